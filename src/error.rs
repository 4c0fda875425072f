//! Error types for storage and persistence.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// SQLite operation failed.
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  /// Message collection could not be (de)serialized.
  #[error("serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Backing store refused the write, e.g. out of quota.
  #[error("storage unavailable: {0}")]
  Unavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
