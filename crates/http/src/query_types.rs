//! Request/query types (Deserialize)

use box_tracker_core::NewBox;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListBoxesQuery {
    #[serde(default, rename = "includeHidden")]
    pub include_hidden: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateBoxRequest {
    pub number: i32,
    pub room: String,
    pub contents: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<CreateBoxRequest> for NewBox {
    fn from(req: CreateBoxRequest) -> Self {
        Self { number: req.number, room: req.room, contents: req.contents, image_url: req.image_url }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum UpdateAction {
    #[serde(rename = "toggleHidden")]
    ToggleHidden,
}

/// `PUT /api/boxes` carries either a visibility toggle or a full edit.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UpdateBoxRequest {
    ToggleHidden {
        #[expect(dead_code, reason = "Only selects the variant")]
        action: UpdateAction,
        id: i32,
        hidden: bool,
    },
    Edit {
        id: i32,
        room: String,
        contents: String,
        #[serde(default)]
        image_url: Option<String>,
    },
}

impl UpdateBoxRequest {
    pub fn id(&self) -> i32 {
        match *self {
            Self::ToggleHidden { id, .. } | Self::Edit { id, .. } => id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteBoxRequest {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_body_selects_toggle_variant() {
        let req: UpdateBoxRequest =
            serde_json::from_str(r#"{"action":"toggleHidden","id":3,"hidden":true}"#).unwrap();
        assert!(matches!(req, UpdateBoxRequest::ToggleHidden { id: 3, hidden: true, .. }));
    }

    #[test]
    fn test_edit_body_selects_edit_variant() {
        let req: UpdateBoxRequest =
            serde_json::from_str(r#"{"id":4,"room":"Office","contents":"pens"}"#).unwrap();
        match req {
            UpdateBoxRequest::Edit { id, image_url, .. } => {
                assert_eq!(id, 4);
                assert!(image_url.is_none());
            },
            UpdateBoxRequest::ToggleHidden { .. } => panic!("expected edit variant"),
        }
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result: Result<UpdateBoxRequest, _> =
            serde_json::from_str(r#"{"action":"archive","id":3,"hidden":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_requires_number() {
        let result: Result<CreateBoxRequest, _> =
            serde_json::from_str(r#"{"room":"Office","contents":"pens"}"#);
        assert!(result.is_err());
    }
}
