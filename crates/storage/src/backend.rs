//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use box_tracker_core::{BoxUpdate, MovingBox, NewBox};

use crate::error::StorageError;
use crate::schema::MigrationReport;
use crate::traits::BoxStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as BoxStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as BoxStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Self::open_sqlite(db_path).map(|(backend, _)| backend)
    }

    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    #[cfg(feature = "sqlite")]
    pub fn open_sqlite(db_path: &Path) -> Result<(Self, MigrationReport), StorageError> {
        let (storage, report) = crate::Storage::open(db_path)?;
        Ok((Self::Sqlite(storage), report))
    }

    /// # Errors
    /// Returns an error if the connection or a migration step fails.
    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// # Errors
    /// Returns an error if the connection or a migration step fails.
    #[cfg(feature = "postgres")]
    pub async fn connect_postgres(
        database_url: &str,
    ) -> Result<(Self, MigrationReport), StorageError> {
        let settings = crate::pg_storage::PgPoolSettings::from_env();
        let (storage, report) = crate::pg_storage::PgStorage::connect(database_url, settings).await?;
        Ok((Self::Postgres(storage), report))
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl BoxStore for StorageBackend {
    async fn list_boxes(&self, include_hidden: bool) -> Result<Vec<MovingBox>, StorageError> {
        dispatch!(self, list_boxes(include_hidden))
    }

    async fn get_box(&self, id: i32) -> Result<Option<MovingBox>, StorageError> {
        dispatch!(self, get_box(id))
    }

    async fn create_box(&self, input: NewBox) -> Result<MovingBox, StorageError> {
        dispatch!(self, create_box(input))
    }

    async fn update_box(
        &self,
        id: i32,
        update: BoxUpdate,
    ) -> Result<Option<MovingBox>, StorageError> {
        dispatch!(self, update_box(id, update))
    }

    async fn set_hidden(&self, id: i32, hidden: bool) -> Result<Option<MovingBox>, StorageError> {
        dispatch!(self, set_hidden(id, hidden))
    }

    async fn delete_box(&self, id: i32) -> Result<bool, StorageError> {
        dispatch!(self, delete_box(id))
    }
}
