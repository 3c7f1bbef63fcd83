//! `SQLite` storage implementation.
//!
//! All methods are synchronous; [`crate::sqlite_async`] adapts them to
//! [`crate::BoxStore`] through `spawn_blocking`.

mod boxes;

use std::path::Path;
use std::time::Duration;

use box_tracker_core::SQLITE_POOL_MAX_SIZE;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::error::StorageError;
use crate::migrations;
use crate::schema::MigrationReport;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    pool.get().map_err(|e| StorageError::Pool(format!("failed to get SQLite connection: {e}")))
}

impl Storage {
    /// Open (creating if needed) the database file and migrate it.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or a migration step fails.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        Self::open(db_path).map(|(storage, _)| storage)
    }

    /// Like [`Storage::new`] but also returns what the migration pass did.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or a migration step fails.
    pub fn open(db_path: &Path) -> Result<(Self, MigrationReport), StorageError> {
        let manager = SqliteConnectionManager::file(db_path)
            .with_init(|conn| conn.busy_timeout(Duration::from_secs(5)));
        let pool = Pool::builder().max_size(SQLITE_POOL_MAX_SIZE).build(manager)?;
        let mut conn = get_conn(&pool)?;
        let report = migrations::run_migrations(&mut conn)?;
        tracing::info!(path = %db_path.display(), "SQLite storage initialized");
        Ok((Self { pool }, report))
    }
}
