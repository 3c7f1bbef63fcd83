//! Browser UI - embedded single page for managing boxes.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the box list UI
pub const VIEWER_HTML: &str = include_str!("viewer.html");

/// Serve the viewer HTML page
pub async fn serve_viewer() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(VIEWER_HTML))
        .into_response()
}
