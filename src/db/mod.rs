//! Database helpers: migrations, path handling and the SQLite-backed
//! key-value storage the mailbox persists into.

use crate::{error::Result, mailbox::Storage};
use sqlx::SqlitePool;
use std::path::Path;

/// Run SQLite migrations to create tables if absent.
pub async fn run_migrations(pool: &SqlitePool) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") {
        return db_url.to_string();
    }
    let path_part = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    if path_part == ":memory:" {
        return db_url.to_string();
    }
    let path_only = path_part
        .split_once('?')
        .map_or(path_part, |(p, _)| p);
    if !path_only.is_empty() {
        let p = Path::new(path_only);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(p);
    }
    db_url.to_string()
}

/// Key-value storage in the `kv_store` table.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Storage for SqliteStorage {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
