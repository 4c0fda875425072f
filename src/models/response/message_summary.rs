//! List-pane projection of a message.

use crate::models::email::{
  folder::Folder,
  message::{Contact, Message},
};
use serde::Serialize;

const SNIPPET_CHARS: usize = 140;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSummary {
  pub id: String,
  pub subject: String,
  pub from: Contact,
  pub date: String,
  pub folder: Folder,
  pub unread: bool,
  pub starred: bool,
  pub tags: Vec<String>,
  pub attachment_count: usize,
  pub snippet: String,
}

impl From<&Message> for MessageSummary {
  fn from(m: &Message) -> Self {
    let snippet: String = m.plain_body().chars().take(SNIPPET_CHARS).collect();
    MessageSummary {
      id: m.id.clone(),
      subject: m.subject.clone(),
      from: m.from.clone(),
      date: m.date.clone(),
      folder: m.folder.clone(),
      unread: m.unread,
      starred: m.starred,
      tags: m.tags.clone(),
      attachment_count: m.attachments.len(),
      snippet,
    }
  }
}
