//! BoxStore implementation for PgStorage.

use async_trait::async_trait;
use box_tracker_core::{BoxUpdate, MovingBox, NewBox};
use chrono::Utc;

use super::{BOX_COLUMNS, PgStorage, row_to_box};
use crate::error::StorageError;
use crate::traits::BoxStore;

#[async_trait]
impl BoxStore for PgStorage {
    async fn list_boxes(&self, include_hidden: bool) -> Result<Vec<MovingBox>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {BOX_COLUMNS} FROM boxes
             WHERE $1 OR COALESCE(hidden, FALSE) = FALSE
             ORDER BY number ASC, id ASC"
        ))
        .bind(include_hidden)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_box).collect()
    }

    async fn get_box(&self, id: i32) -> Result<Option<MovingBox>, StorageError> {
        let row = sqlx::query(&format!("SELECT {BOX_COLUMNS} FROM boxes WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_box(&r)).transpose()
    }

    async fn create_box(&self, input: NewBox) -> Result<MovingBox, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO boxes (number, room, contents, image_url, hidden, created_at)
             VALUES ($1, $2, $3, $4, FALSE, $5)
             RETURNING {BOX_COLUMNS}"
        ))
        .bind(input.number)
        .bind(&input.room)
        .bind(&input.contents)
        .bind(&input.image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        let created = row_to_box(&row)?;
        tracing::debug!(id = created.id, number = created.number, "box created");
        Ok(created)
    }

    async fn update_box(
        &self,
        id: i32,
        update: BoxUpdate,
    ) -> Result<Option<MovingBox>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE boxes SET room = $1, contents = $2, image_url = $3
             WHERE id = $4
             RETURNING {BOX_COLUMNS}"
        ))
        .bind(&update.room)
        .bind(&update.contents)
        .bind(&update.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_box(&r)).transpose()
    }

    async fn set_hidden(&self, id: i32, hidden: bool) -> Result<Option<MovingBox>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE boxes SET hidden = $1 WHERE id = $2 RETURNING {BOX_COLUMNS}"
        ))
        .bind(hidden)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_box(&r)).transpose()
    }

    async fn delete_box(&self, id: i32) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM boxes WHERE id = $1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
