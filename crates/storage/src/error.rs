//! Typed error enum for the storage layer.
//!
//! Callers match on the failure mode (unavailable backend, corrupt row,
//! failed migration) instead of downcasting opaque errors. A missing row is
//! `Ok(None)` from the store, never an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// PostgreSQL / connection / timeout failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// SQLite statement failure.
    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[source] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool: {0}")]
    Pool(String),

    /// Row data could not be converted into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A schema migration step failed.
    #[error("migration step {step} failed: {reason}")]
    Migration { step: &'static str, reason: String },

    /// The blocking task running a SQLite call panicked or was cancelled.
    #[error("background task failed: {0}")]
    Join(String),
}

impl StorageError {
    /// Whether the backend itself is unreachable (as opposed to a bad statement).
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Pool(_) => true,
            #[cfg(feature = "postgres")]
            Self::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_),
            ) => true,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::CannotOpen
                    | rusqlite::ErrorCode::DatabaseBusy
                    | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { index, source } => {
                Self::DataCorruption { context: format!("boxes column {index}"), source }
            },
            _ => Self::Database(err),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::FromSqlConversionFailure(column, _, source) => {
                Self::DataCorruption { context: format!("boxes column {column}"), source }
            },
            _ => Self::Sqlite(err),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Pool(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_error_is_unavailable() {
        assert!(StorageError::Pool("timed out".into()).is_unavailable());
    }

    #[test]
    fn test_migration_error_is_not_unavailable() {
        let err = StorageError::Migration { step: "add_hidden_column", reason: "boom".into() };
        assert!(!err.is_unavailable());
        assert!(err.to_string().contains("add_hidden_column"));
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_statement_error_stays_sqlite() {
        let err = StorageError::from(rusqlite::Error::InvalidColumnName("priority".into()));
        assert!(matches!(err, StorageError::Sqlite(_)));
        assert!(!err.is_unavailable());
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_bad_column_value_is_data_corruption() {
        let source: Box<dyn std::error::Error + Send + Sync> = "not a timestamp".into();
        let err = StorageError::from(rusqlite::Error::FromSqlConversionFailure(
            6,
            rusqlite::types::Type::Text,
            source,
        ));
        assert!(matches!(err, StorageError::DataCorruption { .. }));
        assert!(!err.is_unavailable());
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_unavailable());
        assert!(!StorageError::from(sqlx::Error::RowNotFound).is_unavailable());
    }
}
