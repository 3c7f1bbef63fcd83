use box_tracker_core::{BoxUpdate, MovingBox, NewBox};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, Row, params};

use super::{Storage, get_conn};
use crate::error::StorageError;

const BOX_COLUMNS: &str =
    "id, number, room, contents, image_url, COALESCE(hidden, 0) AS hidden, created_at";

fn map_box(row: &Row<'_>) -> rusqlite::Result<MovingBox> {
    let created_at: String = row.get(6)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;
    Ok(MovingBox {
        id: row.get(0)?,
        number: row.get(1)?,
        room: row.get(2)?,
        contents: row.get(3)?,
        image_url: row.get(4)?,
        hidden: row.get(5)?,
        created_at,
    })
}

impl Storage {
    /// # Errors
    /// Returns error if the query fails.
    pub fn list_boxes(&self, include_hidden: bool) -> Result<Vec<MovingBox>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {BOX_COLUMNS} FROM boxes
             WHERE ?1 OR COALESCE(hidden, 0) = 0
             ORDER BY number ASC, id ASC"
        ))?;
        let rows = stmt.query_map(params![include_hidden], map_box)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::from)
    }

    /// # Errors
    /// Returns error if the query fails.
    pub fn get_box(&self, id: i32) -> Result<Option<MovingBox>, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row(
            &format!("SELECT {BOX_COLUMNS} FROM boxes WHERE id = ?1"),
            params![id],
            map_box,
        )
        .optional()
        .map_err(StorageError::from)
    }

    /// # Errors
    /// Returns error if the insert fails.
    pub fn create_box(&self, input: &NewBox) -> Result<MovingBox, StorageError> {
        let conn = get_conn(&self.pool)?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
        let created = conn.query_row(
            &format!(
                "INSERT INTO boxes (number, room, contents, image_url, hidden, created_at)
                 VALUES (?1, ?2, ?3, ?4, 0, ?5)
                 RETURNING {BOX_COLUMNS}"
            ),
            params![input.number, input.room, input.contents, input.image_url, now],
            map_box,
        )?;
        tracing::debug!(id = created.id, number = created.number, "box created");
        Ok(created)
    }

    /// # Errors
    /// Returns error if the update fails.
    pub fn update_box(
        &self,
        id: i32,
        update: &BoxUpdate,
    ) -> Result<Option<MovingBox>, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row(
            &format!(
                "UPDATE boxes SET room = ?1, contents = ?2, image_url = ?3
                 WHERE id = ?4
                 RETURNING {BOX_COLUMNS}"
            ),
            params![update.room, update.contents, update.image_url, id],
            map_box,
        )
        .optional()
        .map_err(StorageError::from)
    }

    /// # Errors
    /// Returns error if the update fails.
    pub fn set_hidden(&self, id: i32, hidden: bool) -> Result<Option<MovingBox>, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row(
            &format!("UPDATE boxes SET hidden = ?1 WHERE id = ?2 RETURNING {BOX_COLUMNS}"),
            params![hidden, id],
            map_box,
        )
        .optional()
        .map_err(StorageError::from)
    }

    /// # Errors
    /// Returns error if the delete fails.
    pub fn delete_box(&self, id: i32) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let removed = conn.execute("DELETE FROM boxes WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}
