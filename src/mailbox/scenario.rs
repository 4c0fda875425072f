//! Scenario import and export.
//!
//! Import runs in two phases: the raw text is parsed as JSON, then every
//! element is checked and converted into a typed [`Message`]. The first
//! problem found aborts the whole import, so callers either get a complete
//! collection or an [`ImportError`] and nothing else.

use super::sample::new_id;
use crate::models::email::message::{Contact, Message};
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// File name offered for exported scenarios.
pub const EXPORT_FILE_NAME: &str = "finmgt_case_emails.json";

/// Fields every imported message must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 5] = ["subject", "from", "date", "folder", "body"];

#[derive(Debug, Error)]
pub enum ImportError {
  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("JSON must be an array of emails")]
  NotAnArray,

  #[error("email #{index} is not an object")]
  NotAnObject { index: usize },

  #[error("email #{index} is missing required field '{field}'; each email needs subject, from, date, folder and body")]
  MissingField { index: usize, field: &'static str },

  #[error("email #{index} has an invalid value: {reason}")]
  InvalidField { index: usize, reason: String },

  #[error("email #{index} repeats id '{id}'")]
  DuplicateId { index: usize, id: String },
}

/// Recipient filled in when an imported message has no `to`.
pub fn default_recipient() -> Contact {
  Contact::new("Student", "student@example.com")
}

/// Parse and validate a scenario. Missing ids get a generated one, numeric
/// ids are kept in their string form, missing recipients get
/// [`default_recipient`].
pub fn parse_scenario(raw: &str) -> Result<Vec<Message>, ImportError> {
  let parsed: Value = serde_json::from_str(raw)?;
  let Value::Array(items) = parsed else {
    return Err(ImportError::NotAnArray);
  };

  let mut seen = HashSet::new();
  let mut messages = Vec::with_capacity(items.len());
  for (index, item) in items.into_iter().enumerate() {
    let Value::Object(mut fields) = item else {
      return Err(ImportError::NotAnObject { index });
    };
    if let Some(field) = REQUIRED_FIELDS.iter().copied().find(|f| is_missing(&fields, f)) {
      return Err(ImportError::MissingField { index, field });
    }
    if is_missing(&fields, "id") {
      fields.insert("id".into(), Value::String(new_id()));
    } else if let Some(Value::Number(n)) = fields.get("id") {
      let id = n.to_string();
      fields.insert("id".into(), Value::String(id));
    }
    if fields.get("to").map_or(true, Value::is_null) {
      fields.insert("to".into(), serde_json::to_value(vec![default_recipient()])?);
    }

    let message: Message =
      serde_json::from_value(Value::Object(fields)).map_err(|e| ImportError::InvalidField {
        index,
        reason: e.to_string(),
      })?;
    if !seen.insert(message.id.clone()) {
      return Err(ImportError::DuplicateId {
        index,
        id: message.id,
      });
    }
    messages.push(message);
  }
  Ok(messages)
}

/// Absent, null, `false` and empty strings all count as missing.
fn is_missing(fields: &Map<String, Value>, field: &str) -> bool {
  match fields.get(field) {
    None | Some(Value::Null) | Some(Value::Bool(false)) => true,
    Some(Value::String(s)) => s.is_empty(),
    Some(_) => false,
  }
}

/// Pretty-printed JSON array of the whole collection.
pub fn export_scenario(messages: &[Message]) -> Result<String, serde_json::Error> {
  serde_json::to_string_pretty(messages)
}
