//! Snapshot of the mailbox view model returned by the view endpoints.

use super::message_summary::MessageSummary;
use crate::mailbox::{Mailbox, Storage, view::UnreadCounts};
use crate::models::email::folder::Folder;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
  pub folder: Folder,
  pub query: String,
  pub unread_only: bool,
  /// The message shown in the reading pane, if the view has any.
  pub selected_id: Option<String>,
  pub counts: UnreadCounts,
  pub messages: Vec<MessageSummary>,
}

impl<S: Storage> From<&Mailbox<S>> for ViewResponse {
  fn from(mb: &Mailbox<S>) -> Self {
    ViewResponse {
      folder: mb.folder().clone(),
      query: mb.query().to_string(),
      unread_only: mb.unread_only(),
      selected_id: mb.selected().map(|m| m.id.clone()),
      counts: mb.unread_counts(),
      messages: mb.view().into_iter().map(MessageSummary::from).collect(),
    }
  }
}
