//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod messages;
pub mod scenario;
pub mod ui;
pub mod view;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::ui_index))
        .route("/view", get(view::get_view).put(view::update_view))
        .route("/messages/:id", get(messages::get_message))
        .route("/messages/:id/html", get(messages::get_message_html))
        .route("/messages/:id/open", post(messages::open_message))
        .route("/messages/:id/read", post(messages::mark_read))
        .route("/messages/:id/star", post(messages::toggle_star))
        .route("/messages/:id/move", post(messages::move_message))
        .route("/messages/:id/delete", post(messages::delete_message))
        .route("/messages/:id/restore", post(messages::restore_message))
        .route(
            "/scenario",
            get(scenario::export_scenario).post(scenario::import_scenario),
        )
        .route("/scenario/reset", post(scenario::reset_scenario))
        .with_state(state)
}
