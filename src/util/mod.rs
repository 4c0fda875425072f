//! Utility functions: tracing and HTML escape.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// Minimal HTML escaping for text display.
pub fn html_escape(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

/// `Name <email>` list for header lines, escaped.
pub fn format_contacts(contacts: &[crate::models::email::message::Contact]) -> String {
  if contacts.is_empty() {
    return "(none)".to_string();
  }
  contacts
    .iter()
    .map(|c| html_escape(&format!("{} <{}>", c.name, c.email)))
    .collect::<Vec<_>>()
    .join(", ")
}
