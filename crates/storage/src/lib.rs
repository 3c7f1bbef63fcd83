//! Storage layer for box-tracker
//!
//! One table (`boxes`) behind the [`BoxStore`] trait, with a SQLite backend
//! (rusqlite + r2d2) and a PostgreSQL backend (sqlx). Both run the ordered
//! migration list from [`schema`] when they are opened.

#[cfg(any(feature = "sqlite", feature = "postgres"))]
mod backend;
mod error;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
pub mod schema;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

#[cfg(any(feature = "sqlite", feature = "postgres"))]
pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::{PgPoolSettings, PgStorage};
pub use schema::{MigrationReport, MigrationStep};
#[cfg(feature = "sqlite")]
pub use storage::Storage;
pub use traits::BoxStore;
