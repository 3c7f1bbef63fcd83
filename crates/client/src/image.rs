//! A locally selected photo waiting to be uploaded.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageSelection {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), content_type: None, bytes }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(FALLBACK_CONTENT_TYPE)
    }

    /// `data:` URL for showing the photo before it has been uploaded.
    #[must_use]
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type(), STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_data_url() {
        let image = ImageSelection::new("a.png", b"abc".to_vec()).with_content_type("image/png");
        assert_eq!(image.preview_data_url(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_missing_content_type_falls_back() {
        let image = ImageSelection::new("blob", vec![0xff]);
        assert!(image.preview_data_url().starts_with("data:application/octet-stream;base64,"));
    }
}
