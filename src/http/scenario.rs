//! Scenario import, export and reset.

use crate::{
  app::AppState,
  mailbox::scenario::EXPORT_FILE_NAME,
  models::response::view_response::ViewResponse,
};
use axum::{
  Json,
  extract::State,
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

/// Current collection as a downloadable JSON file.
pub async fn export_scenario(State(state): State<AppState>) -> Response {
  let mailbox = state.mailbox.lock().await;
  match mailbox.export_scenario() {
    Ok(body) => (
      [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
          header::CONTENT_DISPOSITION,
          format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
      ],
      body,
    )
      .into_response(),
    Err(e) => {
      error!("export_scenario error: {e}");
      (StatusCode::INTERNAL_SERVER_ERROR, "export failed").into_response()
    }
  }
}

/// Replace the mailbox with the raw JSON scenario in the request body.
pub async fn import_scenario(State(state): State<AppState>, body: String) -> Response {
  let mut mailbox = state.mailbox.lock().await;
  match mailbox.import_scenario(&body).await {
    Ok(imported) => Json(json!({
      "imported": imported,
      "view": ViewResponse::from(&*mailbox),
    }))
    .into_response(),
    Err(e) => {
      warn!("scenario import rejected: {e}");
      (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("Import failed: {e}") })),
      )
        .into_response()
    }
  }
}

pub async fn reset_scenario(State(state): State<AppState>) -> Json<ViewResponse> {
  let mut mailbox = state.mailbox.lock().await;
  mailbox.reset_to_sample().await;
  Json(ViewResponse::from(&*mailbox))
}
