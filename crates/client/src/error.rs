//! Typed error enum for the client crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("image upload failed: {0}")]
    Upload(String),
    #[error("{0}")]
    Validation(String),
}
