//! Storage backend trait for the `boxes` table.

use async_trait::async_trait;
use box_tracker_core::{BoxUpdate, MovingBox, NewBox};

use crate::error::StorageError;

/// Data access for moving boxes. Every method is one atomic statement.
#[async_trait]
pub trait BoxStore: Send + Sync {
    /// All boxes ordered by `number` ascending (ties by `id`).
    /// Unpacked (`hidden`) boxes are skipped unless `include_hidden` is set.
    async fn list_boxes(&self, include_hidden: bool) -> Result<Vec<MovingBox>, StorageError>;

    /// Fetch a single box.
    async fn get_box(&self, id: i32) -> Result<Option<MovingBox>, StorageError>;

    /// Insert a box and return the persisted row with its generated `id` and `created_at`.
    async fn create_box(&self, input: NewBox) -> Result<MovingBox, StorageError>;

    /// Overwrite room, contents and image URL. `None` if no row has this id.
    async fn update_box(
        &self,
        id: i32,
        update: BoxUpdate,
    ) -> Result<Option<MovingBox>, StorageError>;

    /// Set only the `hidden` flag. `None` if no row has this id.
    async fn set_hidden(&self, id: i32, hidden: bool) -> Result<Option<MovingBox>, StorageError>;

    /// Delete a box. Returns `true` if a row was removed; unknown ids are a no-op.
    async fn delete_box(&self, id: i32) -> Result<bool, StorageError>;
}
