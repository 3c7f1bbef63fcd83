//! Shared constants for box-tracker.

/// PostgreSQL connection pool: default maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: default acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// SQLite connection pool size.
pub const SQLITE_POOL_MAX_SIZE: u32 = 4;

/// Name of the single persisted table.
pub const BOXES_TABLE: &str = "boxes";

/// First number suggested when no boxes exist yet.
pub const FIRST_BOX_NUMBER: i32 = 1;

/// Multipart field name expected by the image upload endpoint.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Default port for `box-tracker serve`.
pub const DEFAULT_HTTP_PORT: u16 = 3000;
