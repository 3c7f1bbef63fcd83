//! PostgreSQL storage backend using sqlx.

mod boxes;

use std::time::Duration;

use box_tracker_core::{
    MovingBox, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    env_parse_with_default,
};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;
use crate::schema::MigrationReport;

/// Pool sizing, overridable through `BOX_TRACKER_PG_*` environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgPoolSettings {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for PgPoolSettings {
    fn default() -> Self {
        Self {
            max_connections: PG_POOL_MAX_CONNECTIONS,
            acquire_timeout_secs: PG_POOL_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl PgPoolSettings {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_connections: env_parse_with_default(
                "BOX_TRACKER_PG_MAX_CONNECTIONS",
                defaults.max_connections,
            ),
            acquire_timeout_secs: env_parse_with_default(
                "BOX_TRACKER_PG_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// # Errors
    /// Returns an error if the connection or a migration step fails.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        Self::connect(database_url, PgPoolSettings::from_env()).await.map(|(storage, _)| storage)
    }

    /// Connect, migrate, and report which migration steps ran.
    ///
    /// # Errors
    /// Returns an error if the connection or a migration step fails.
    pub async fn connect(
        database_url: &str,
        settings: PgPoolSettings,
    ) -> Result<(Self, MigrationReport), StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        let report = run_pg_migrations(&pool).await?;
        tracing::info!(max_connections = settings.max_connections, "PgStorage initialized");
        Ok((Self { pool }, report))
    }
}

pub(crate) const BOX_COLUMNS: &str =
    "id, number, room, contents, image_url, COALESCE(hidden, FALSE) AS hidden, created_at";

pub(crate) fn row_to_box(row: &sqlx::postgres::PgRow) -> Result<MovingBox, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(MovingBox {
        id: row.try_get("id")?,
        number: row.try_get("number")?,
        room: row.try_get("room")?,
        contents: row.try_get("contents")?,
        image_url: row.try_get("image_url")?,
        hidden: row.try_get("hidden")?,
        created_at,
    })
}
