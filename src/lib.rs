//! mockmail library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `mailbox`: message store, view derivation, selection, scenarios
//! - `db`: migrations and SQLite key-value storage
//! - `models`: typed records used across layers
//! - `error`: storage error type
//! - `util`: tracing setup and HTML escaping

pub mod app;
pub mod db;
pub mod error;
pub mod http;
pub mod mailbox;
pub mod models;
pub mod util;
