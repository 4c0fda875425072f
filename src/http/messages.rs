//! Message JSON APIs, reading-pane HTML view and per-message actions.

use crate::{
  app::AppState,
  mailbox::{Mailbox, Storage},
  models::{email::folder::Folder, response::view_response::ViewResponse},
  util::{format_contacts, html_escape},
};
use axum::{
  Json,
  extract::{Path as AxumPath, State},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct ReadRequest {
  pub unread: bool,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
  pub folder: Folder,
}

fn not_found() -> Response {
  (StatusCode::NOT_FOUND, "message not found").into_response()
}

/// Result of an action: the refreshed view, or 404 if the id is unknown.
fn view_after<S: Storage>(mailbox: &Mailbox<S>, found: bool) -> Response {
  if !found {
    return not_found();
  }
  Json(ViewResponse::from(mailbox)).into_response()
}

pub async fn get_message(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
) -> Response {
  let mailbox = state.mailbox.lock().await;
  match mailbox.message(&id) {
    Some(m) => Json(m.clone()).into_response(),
    None => not_found(),
  }
}

pub async fn get_message_html(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
) -> Response {
  let mailbox = state.mailbox.lock().await;
  let Some(m) = mailbox.message(&id) else {
    return not_found();
  };
  let cc_line = if m.cc.is_empty() {
    String::new()
  } else {
    format!(" &nbsp; <strong>Cc:</strong> {}", format_contacts(&m.cc))
  };
  let attachments = if m.attachments.is_empty() {
    "None".to_string()
  } else {
    m.attachments
      .iter()
      .map(|a| format!("<li>{} ({} KB)</li>", html_escape(&a.name), a.size_kb))
      .collect::<Vec<_>>()
      .join("")
  };
  let tags = m
    .tags
    .iter()
    .map(|t| format!("<span class=\"tag\">{}</span>", html_escape(t)))
    .collect::<Vec<_>>()
    .join(" ");
  let tmpl = r#"<!doctype html>
<html lang="en"><head><meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{SUBJECT}</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 1.5rem; }
  .tag { background:#eef2ff; color:#4f46e5; border-radius:999px; padding:.1rem .5rem; font-size:12px; }
</style>
</head>
<body>
  <p><a href="/">← back</a></p>
  <h2>{SUBJECT}</h2>
  <p>{TAGS}</p>
  <p><strong>From:</strong> {FROM} &nbsp; <strong>To:</strong> {TO}{CC}</p>
  <p><strong>Date:</strong> {DATE} &nbsp; <strong>Folder:</strong> {FOLDER}</p>
  <hr/>
  <div>{HTML}</div>
  <h3>Attachments</h3>
  <ul>{ATTACHMENTS}</ul>
</body></html>"#;
  let page = tmpl
    .replace("{SUBJECT}", &html_escape(&m.subject))
    .replace("{TAGS}", &tags)
    .replace("{FROM}", &format_contacts(std::slice::from_ref(&m.from)))
    .replace("{TO}", &format_contacts(&m.to))
    .replace("{CC}", &cc_line)
    .replace("{DATE}", &html_escape(&m.date))
    .replace("{FOLDER}", &html_escape(m.folder.as_str()))
    .replace("{ATTACHMENTS}", &attachments)
    .replace("{HTML}", &m.body);
  Html(page).into_response()
}

/// Select a message and mark it read.
pub async fn open_message(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
) -> Response {
  let mut mailbox = state.mailbox.lock().await;
  let found = mailbox.open_message(&id).await;
  view_after(&*mailbox, found)
}

pub async fn mark_read(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
  Json(req): Json<ReadRequest>,
) -> Response {
  let mut mailbox = state.mailbox.lock().await;
  let found = mailbox.mark_read(&id, req.unread).await;
  view_after(&*mailbox, found)
}

pub async fn toggle_star(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
) -> Response {
  let mut mailbox = state.mailbox.lock().await;
  let found = mailbox.toggle_star(&id).await;
  view_after(&*mailbox, found)
}

pub async fn move_message(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
  Json(req): Json<MoveRequest>,
) -> Response {
  let folder = req.folder;
  let mut mailbox = state.mailbox.lock().await;
  let found = mailbox.move_to(&id, folder.clone()).await;
  if found {
    info!("moved message {id} to {folder}");
  }
  view_after(&*mailbox, found)
}

pub async fn delete_message(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
) -> Response {
  let mut mailbox = state.mailbox.lock().await;
  let found = mailbox.remove(&id).await;
  view_after(&*mailbox, found)
}

pub async fn restore_message(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
) -> Response {
  let mut mailbox = state.mailbox.lock().await;
  let found = mailbox.restore(&id).await;
  view_after(&*mailbox, found)
}
