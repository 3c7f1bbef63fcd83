//! Async [`BoxStore`] implementation for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use box_tracker_core::{BoxUpdate, MovingBox, NewBox};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::BoxStore;

/// Run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Join(format!("spawn_blocking join error: {e}")))?
}

/// Clone `self` into the closure and call the synchronous method.
///
/// - `@ref arg`: `.clone()` an owned value, pass as `&arg`
/// - `@val arg`: move directly (Copy types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@pass ref $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl BoxStore for Storage {
    async fn list_boxes(&self, include_hidden: bool) -> Result<Vec<MovingBox>, StorageError> {
        delegate!(self, list_boxes, @val include_hidden)
    }

    async fn get_box(&self, id: i32) -> Result<Option<MovingBox>, StorageError> {
        delegate!(self, get_box, @val id)
    }

    async fn create_box(&self, input: NewBox) -> Result<MovingBox, StorageError> {
        delegate!(self, create_box, @ref input)
    }

    async fn update_box(
        &self,
        id: i32,
        update: BoxUpdate,
    ) -> Result<Option<MovingBox>, StorageError> {
        delegate!(self, update_box, @val id, @ref update)
    }

    async fn set_hidden(&self, id: i32, hidden: bool) -> Result<Option<MovingBox>, StorageError> {
        delegate!(self, set_hidden, @val id, @val hidden)
    }

    async fn delete_box(&self, id: i32) -> Result<bool, StorageError> {
        delegate!(self, delete_box, @val id)
    }
}
