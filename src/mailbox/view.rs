//! Derived views: the filtered, searched, date-sorted message list and the
//! per-folder unread counts.

use crate::models::email::{folder::Folder, message::Message};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Selection a view is derived for.
#[derive(Debug, Clone, Copy)]
pub struct ViewFilter<'a> {
  pub folder: &'a Folder,
  pub query: &'a str,
  pub unread_only: bool,
}

/// Messages of the filter's folder, optionally unread only, matching the
/// query as a case-insensitive substring, newest first.
///
/// Messages whose date cannot be parsed sort after all dated ones; ties keep
/// collection order.
pub fn derive_view<'m>(messages: &'m [Message], filter: &ViewFilter<'_>) -> Vec<&'m Message> {
  let query = filter.query.trim().to_lowercase();
  let mut keyed: Vec<(Option<i64>, &Message)> = messages
    .iter()
    .filter(|m| &m.folder == filter.folder)
    .filter(|m| !filter.unread_only || m.unread)
    .filter(|m| query.is_empty() || m.search_text().contains(&query))
    .map(|m| (timestamp_millis(&m.date), m))
    .collect();
  keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
  keyed.into_iter().map(|(_, m)| m).collect()
}

/// Milliseconds since the epoch, or `None` when the date is unparseable.
pub fn timestamp_millis(date: &str) -> Option<i64> {
  let date = date.trim();
  if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
    return Some(dt.timestamp_millis());
  }
  for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, fmt) {
      return Some(dt.and_utc().timestamp_millis());
    }
  }
  NaiveDate::parse_from_str(date, "%Y-%m-%d")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|dt| dt.and_utc().timestamp_millis())
}

/// Unread messages per folder over the whole collection, independent of any
/// search or filter. The five known folders are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadCounts(BTreeMap<Folder, usize>);

impl UnreadCounts {
  pub fn tally(messages: &[Message]) -> Self {
    let mut counts: BTreeMap<Folder, usize> = Folder::KNOWN.into_iter().map(|f| (f, 0)).collect();
    for m in messages.iter().filter(|m| m.unread) {
      *counts.entry(m.folder.clone()).or_insert(0) += 1;
    }
    UnreadCounts(counts)
  }

  pub fn get(&self, folder: &Folder) -> usize {
    self.0.get(folder).copied().unwrap_or(0)
  }
}
