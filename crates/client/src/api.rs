//! Box API seam and its `reqwest` implementation.

use std::time::Duration;

use async_trait::async_trait;
use box_tracker_core::{BoxUpdate, MovingBox, NewBox};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[async_trait]
pub trait BoxApi: Send + Sync {
    async fn list_boxes(&self, include_hidden: bool) -> Result<Vec<MovingBox>, ClientError>;

    async fn create_box(&self, input: &NewBox) -> Result<MovingBox, ClientError>;

    async fn update_box(&self, id: i32, update: &BoxUpdate) -> Result<MovingBox, ClientError>;

    async fn set_hidden(&self, id: i32, hidden: bool) -> Result<MovingBox, ClientError>;

    async fn delete_box(&self, id: i32) -> Result<(), ClientError>;
}

/// Talks to `/api/boxes` on a running box-tracker server.
#[derive(Debug, Clone)]
pub struct HttpBoxApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct DeleteResponse {
    success: bool,
}

impl HttpBoxApi {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn boxes_url(&self) -> String {
        format!("{}/api/boxes", self.base_url)
    }
}

#[async_trait]
impl BoxApi for HttpBoxApi {
    async fn list_boxes(&self, include_hidden: bool) -> Result<Vec<MovingBox>, ClientError> {
        let response = self
            .client
            .get(self.boxes_url())
            .query(&[("includeHidden", include_hidden)])
            .send()
            .await?;
        read_json(response).await
    }

    async fn create_box(&self, input: &NewBox) -> Result<MovingBox, ClientError> {
        let response = self.client.post(self.boxes_url()).json(input).send().await?;
        read_json(response).await
    }

    async fn update_box(&self, id: i32, update: &BoxUpdate) -> Result<MovingBox, ClientError> {
        let body = serde_json::json!({
            "id": id,
            "room": update.room,
            "contents": update.contents,
            "image_url": update.image_url,
        });
        let response = self.client.put(self.boxes_url()).json(&body).send().await?;
        read_json(response).await
    }

    async fn set_hidden(&self, id: i32, hidden: bool) -> Result<MovingBox, ClientError> {
        let body = serde_json::json!({"action": "toggleHidden", "id": id, "hidden": hidden});
        let response = self.client.put(self.boxes_url()).json(&body).send().await?;
        read_json(response).await
    }

    async fn delete_box(&self, id: i32) -> Result<(), ClientError> {
        let body = serde_json::json!({"id": id});
        let response = self.client.delete(self.boxes_url()).json(&body).send().await?;
        let parsed: DeleteResponse = read_json(response).await?;
        if !parsed.success {
            tracing::warn!(id, "server reported unsuccessful delete");
        }
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { code: status.as_u16(), body });
    }
    Ok(response.json().await?)
}
