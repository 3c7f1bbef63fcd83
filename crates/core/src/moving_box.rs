//! The `MovingBox` record and its write inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::room::MAX_ROOM_LEN;

/// One physical moving box as persisted in the `boxes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingBox {
    pub id: i32,
    pub number: i32,
    pub room: String,
    pub contents: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// `true` once the box has been unpacked.
    #[serde(default)]
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a box. `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBox {
    pub number: i32,
    pub room: String,
    pub contents: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewBox {
    #[must_use]
    pub fn new(number: i32, room: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { number, room: room.into(), contents: contents.into(), image_url: None }
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Checks required fields and normalises `image_url`.
    ///
    /// # Errors
    /// Returns [`ValidationError`] if `room` or `contents` is blank or `room` is too long.
    pub fn validate(self) -> Result<Self, ValidationError> {
        validate_room(&self.room)?;
        validate_contents(&self.contents)?;
        Ok(Self { image_url: normalize_image_url(self.image_url), ..self })
    }
}

/// Overwrite of the editable fields of an existing box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxUpdate {
    pub room: String,
    pub contents: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl BoxUpdate {
    /// # Errors
    /// Same rules as [`NewBox::validate`].
    pub fn validate(self) -> Result<Self, ValidationError> {
        validate_room(&self.room)?;
        validate_contents(&self.contents)?;
        Ok(Self { image_url: normalize_image_url(self.image_url), ..self })
    }
}

/// Empty or whitespace-only URLs mean "no photo".
#[must_use]
pub fn normalize_image_url(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

fn validate_room(room: &str) -> Result<(), ValidationError> {
    if room.trim().is_empty() {
        return Err(ValidationError::Missing { field: "room" });
    }
    if room.chars().count() > MAX_ROOM_LEN {
        return Err(ValidationError::TooLong { field: "room", max: MAX_ROOM_LEN });
    }
    Ok(())
}

fn validate_contents(contents: &str) -> Result<(), ValidationError> {
    if contents.trim().is_empty() {
        return Err(ValidationError::Missing { field: "contents" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_box_valid() {
        let input = NewBox::new(5, "Kitchen", "dishes").validate().unwrap();
        assert_eq!(input.number, 5);
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn test_new_box_blank_room_rejected() {
        let err = NewBox::new(1, "   ", "dishes").validate().unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "room" });
    }

    #[test]
    fn test_new_box_blank_contents_rejected() {
        let err = NewBox::new(1, "Kitchen", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "contents" });
    }

    #[test]
    fn test_room_length_limit() {
        let long_room = "x".repeat(MAX_ROOM_LEN + 1);
        let err = NewBox::new(1, long_room, "stuff").validate().unwrap_err();
        assert_eq!(err, ValidationError::TooLong { field: "room", max: MAX_ROOM_LEN });

        let exact = "x".repeat(MAX_ROOM_LEN);
        assert!(NewBox::new(1, exact, "stuff").validate().is_ok());
    }

    #[test]
    fn test_empty_image_url_normalized() {
        let input = NewBox::new(1, "Office", "books").with_image_url("  ").validate().unwrap();
        assert_eq!(input.image_url, None);

        let update = BoxUpdate {
            room: "Office".to_owned(),
            contents: "books".to_owned(),
            image_url: Some("https://img/1.jpg".to_owned()),
        }
        .validate()
        .unwrap();
        assert_eq!(update.image_url.as_deref(), Some("https://img/1.jpg"));
    }

    #[test]
    fn test_box_deserializes_without_optional_fields() {
        let json = r#"{"id":1,"number":2,"room":"Attic","contents":"toys","created_at":"2024-01-01T00:00:00Z"}"#;
        let parsed: MovingBox = serde_json::from_str(json).unwrap();
        assert!(!parsed.hidden);
        assert!(parsed.image_url.is_none());
    }
}
