//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses with the right status code.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use box_tracker_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns the fixed
/// per-endpoint message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed body or failed validation.
    BadRequest(String),
    /// 404 Not Found: no box with the requested id.
    NotFound(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal { message: &'static str, unavailable: bool, source: anyhow::Error },
}

impl ApiError {
    /// Classify a service error; `message` is what the client sees on a 500.
    pub fn from_service(err: ServiceError, message: &'static str) -> Self {
        match err {
            ServiceError::InvalidInput(e) => Self::BadRequest(e.to_string()),
            ServiceError::NotFound { id } => Self::NotFound(format!("box {id} not found")),
            ServiceError::Storage(_) => {
                Self::Internal { message, unavailable: err.is_unavailable(), source: err.into() }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal { message, unavailable, source } => {
                tracing::error!(error = ?source, unavailable, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Attach the endpoint's client-facing failure message to a service result.
pub trait ServiceResultExt<T> {
    fn or_api_error(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> ServiceResultExt<T> for Result<T, ServiceError> {
    fn or_api_error(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_service(e, message))
    }
}

#[cfg(test)]
mod tests {
    use box_tracker_storage::StorageError;

    use super::*;

    #[test]
    fn test_pool_exhaustion_is_marked_unavailable() {
        let err = ServiceError::Storage(StorageError::Pool("timed out".into()));
        match ApiError::from_service(err, "Failed to fetch boxes") {
            ApiError::Internal { message, unavailable, .. } => {
                assert_eq!(message, "Failed to fetch boxes");
                assert!(unavailable);
            },
            other => panic!("expected internal error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_migration_is_not_unavailable() {
        let err = ServiceError::Storage(StorageError::Migration {
            step: "add_hidden_column",
            reason: "boom".into(),
        });
        let api = ApiError::from_service(err, "Failed to add box");
        assert!(matches!(api, ApiError::Internal { unavailable: false, .. }));
        assert_eq!(api.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
