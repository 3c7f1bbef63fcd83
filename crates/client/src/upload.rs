//! Image upload seam. The upload service itself is external.

use std::time::Duration;

use async_trait::async_trait;
use box_tracker_core::UPLOAD_FIELD_NAME;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::ClientError;
use crate::image::ImageSelection;

const UPLOAD_TIMEOUT_SECS: u64 = 60;
const UPLOAD_URL_ENV: &str = "BOX_TRACKER_UPLOAD_URL";

#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload `image` and return the URL it is served from.
    async fn upload(&self, image: &ImageSelection) -> Result<String, ClientError>;
}

/// Posts `multipart/form-data` with the image under field `file` and reads `{url}` back.
#[derive(Debug, Clone)]
pub struct HttpImageUploader {
    client: reqwest::Client,
    upload_url: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    url: Option<String>,
}

impl HttpImageUploader {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(upload_url: impl Into<String>) -> Result<Self, ClientError> {
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS)).build()?;
        Ok(Self { client, upload_url: upload_url.into() })
    }

    /// Uses `BOX_TRACKER_UPLOAD_URL` if set, otherwise `<base_url>/api/upload`.
    pub fn from_env(base_url: &str) -> Result<Self, ClientError> {
        let url = std::env::var(UPLOAD_URL_ENV)
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| format!("{}/api/upload", base_url.trim_end_matches('/')));
        Self::new(url)
    }

    #[must_use]
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

#[async_trait]
impl ImageUploader for HttpImageUploader {
    async fn upload(&self, image: &ImageSelection) -> Result<String, ClientError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.content_type())?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self.client.post(&self.upload_url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Upload(format!("upload endpoint returned {status}")));
        }
        let parsed: UploadResponse = response.json().await?;
        parsed
            .url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::Upload("response has no url".to_owned()))
    }
}
