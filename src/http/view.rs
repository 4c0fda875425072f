//! View model API: current folder, search and unread filter.

use crate::{
  app::AppState,
  models::{email::folder::Folder, response::view_response::ViewResponse},
};
use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::debug;

/// Partial update of the view settings; absent fields are left alone.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewUpdate {
  pub folder: Option<Folder>,
  pub query: Option<String>,
  pub unread_only: Option<bool>,
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewResponse> {
  let mailbox = state.mailbox.lock().await;
  Json(ViewResponse::from(&*mailbox))
}

pub async fn update_view(
  State(state): State<AppState>,
  Json(update): Json<ViewUpdate>,
) -> Json<ViewResponse> {
  let mut mailbox = state.mailbox.lock().await;
  if let Some(folder) = update.folder {
    debug!("switching to folder {folder}");
    mailbox.switch_folder(folder);
  }
  if let Some(query) = update.query {
    mailbox.set_query(query);
  }
  if let Some(unread_only) = update.unread_only {
    mailbox.set_unread_only(unread_only);
  }
  Json(ViewResponse::from(&*mailbox))
}
