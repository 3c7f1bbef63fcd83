use std::sync::Arc;

use box_tracker_core::{BoxUpdate, MovingBox, NewBox, is_known_room};
use box_tracker_storage::{BoxStore, StorageBackend};

use crate::ServiceError;

pub struct BoxService {
    storage: Arc<StorageBackend>,
}

impl BoxService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list(&self, include_hidden: bool) -> Result<Vec<MovingBox>, ServiceError> {
        Ok(self.storage.list_boxes(include_hidden).await?)
    }

    pub async fn get(&self, id: i32) -> Result<MovingBox, ServiceError> {
        self.storage.get_box(id).await?.ok_or(ServiceError::NotFound { id })
    }

    pub async fn create(&self, input: NewBox) -> Result<MovingBox, ServiceError> {
        let input = input.validate()?;
        if !is_known_room(&input.room) {
            tracing::debug!(room = %input.room, "room is not one of the standard rooms");
        }
        let created = self.storage.create_box(input).await?;
        tracing::info!(id = created.id, number = created.number, room = %created.room, "box added");
        Ok(created)
    }

    pub async fn update(&self, id: i32, update: BoxUpdate) -> Result<MovingBox, ServiceError> {
        let update = update.validate()?;
        self.storage.update_box(id, update).await?.ok_or(ServiceError::NotFound { id })
    }

    pub async fn set_hidden(&self, id: i32, hidden: bool) -> Result<MovingBox, ServiceError> {
        self.storage.set_hidden(id, hidden).await?.ok_or(ServiceError::NotFound { id })
    }

    /// Idempotent: deleting an unknown id succeeds.
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.storage.delete_box(id).await? {
            tracing::debug!(id, "delete of unknown box ignored");
        }
        Ok(())
    }
}
