//! HTTP API server for box-tracker.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod viewer;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use box_tracker_service::BoxService;

pub use response_types::{DeleteBoxResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Validation and storage access for the `boxes` resource
    pub box_service: Arc<BoxService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/boxes",
            get(handlers::boxes::list_boxes)
                .post(handlers::boxes::create_box)
                .put(handlers::boxes::update_box)
                .delete(handlers::boxes::delete_box),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
