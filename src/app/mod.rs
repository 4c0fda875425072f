//! Application setup and runtime.

use crate::{db, db::SqliteStorage, http, mailbox::Mailbox};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

/// Storage key the mailbox is persisted under unless overridden.
pub const DEFAULT_STORAGE_KEY: &str = "finmgt_case_emails_v1";

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
  pub addr: String,
  pub database_url: String,
  pub storage_key: String,
}

impl Config {
  pub fn from_env() -> Self {
    Config {
      addr: std::env::var("MOCKMAIL_ADDR").unwrap_or_else(|_| "127.0.0.1:8026".to_string()),
      database_url: std::env::var("MOCKMAIL_DATABASE")
        .unwrap_or_else(|_| "sqlite://mockmail.db".to_string()),
      storage_key: std::env::var("MOCKMAIL_STORAGE_KEY")
        .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string()),
    }
  }
}

/// Shared application state. The mailbox has a single writer; requests take
/// turns on the lock so every action runs to completion before the next.
#[derive(Clone)]
pub struct AppState {
  pub mailbox: Arc<Mutex<Mailbox<SqliteStorage>>>,
}

impl AppState {
  /// Load the mailbox stored under `storage_key` from an already migrated pool.
  pub async fn open(pool: SqlitePool, storage_key: &str) -> Self {
    let mailbox = Mailbox::open(SqliteStorage::new(pool), storage_key).await;
    AppState {
      mailbox: Arc::new(Mutex::new(mailbox)),
    }
  }
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();
  let config = Config::from_env();

  let db_url = db::ensure_sqlite_path(&config.database_url);
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;
  db::run_migrations(&pool).await?;

  let state = AppState::open(pool, &config.storage_key).await;
  {
    let mailbox = state.mailbox.lock().await;
    info!(
      "mailbox '{}' ready with {} messages",
      config.storage_key,
      mailbox.messages().len()
    );
  }

  let app = http::build_router(state);

  let addr: SocketAddr = config.addr.parse()?;
  info!("mockmail:          http://{}/", addr);
  info!("scenario export:   GET  http://{}/scenario", addr);
  info!("scenario import:   POST http://{}/scenario", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
