//! PostgreSQL schema migrations for the `boxes` table.

use box_tracker_core::BOXES_TABLE;
use sqlx::{PgConnection, PgPool};

use crate::error::StorageError;
use crate::schema::{MigrationReport, MigrationStep};

const CREATE_BOXES_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS boxes (
        id SERIAL PRIMARY KEY,
        number INTEGER NOT NULL,
        room VARCHAR(100) NOT NULL,
        contents TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const NUMBER_INDEX: &str = "idx_boxes_number";

/// Key for the transaction-scoped advisory lock serializing migration passes.
const MIGRATION_LOCK_KEY: i64 = 0x626f_7865_735f_6d67;

/// Run all PostgreSQL migrations, checking each step before attempting it.
///
/// The pass runs in one transaction behind `pg_advisory_xact_lock`, so a
/// second process starting at the same time waits and then sees every step
/// as applied.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<MigrationReport, StorageError> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let mut report = MigrationReport::default();
    for step in MigrationStep::ALL {
        let applied = run_step(&mut *tx, step).await.map_err(|e| StorageError::Migration {
            step: step.name(),
            reason: e.to_string(),
        })?;
        report.record(step, applied);
    }
    tx.commit().await?;
    tracing::info!(%report, "PostgreSQL schema up to date");
    Ok(report)
}

async fn run_step(conn: &mut PgConnection, step: MigrationStep) -> Result<bool, sqlx::Error> {
    if is_applied(conn, step).await? {
        return Ok(false);
    }
    let sql = match step {
        MigrationStep::CreateBoxesTable => CREATE_BOXES_SQL.to_owned(),
        MigrationStep::DropPriorityColumn => {
            "ALTER TABLE boxes DROP COLUMN IF EXISTS priority".to_owned()
        },
        MigrationStep::AddImageUrlColumn => {
            "ALTER TABLE boxes ADD COLUMN IF NOT EXISTS image_url TEXT".to_owned()
        },
        MigrationStep::AddHiddenColumn => {
            "ALTER TABLE boxes ADD COLUMN IF NOT EXISTS hidden BOOLEAN NOT NULL DEFAULT FALSE"
                .to_owned()
        },
        MigrationStep::CreatedAtWithTimeZone => "ALTER TABLE boxes
             ALTER COLUMN created_at TYPE TIMESTAMPTZ USING created_at AT TIME ZONE 'UTC'"
            .to_owned(),
        MigrationStep::CreateNumberIndex => {
            format!("CREATE INDEX IF NOT EXISTS {NUMBER_INDEX} ON boxes (number)")
        },
    };
    sqlx::query(&sql).execute(&mut *conn).await?;
    Ok(true)
}

async fn is_applied(conn: &mut PgConnection, step: MigrationStep) -> Result<bool, sqlx::Error> {
    match step {
        MigrationStep::CreateBoxesTable => table_exists(conn, BOXES_TABLE).await,
        MigrationStep::DropPriorityColumn => {
            Ok(!column_exists(conn, BOXES_TABLE, "priority").await?)
        },
        MigrationStep::AddImageUrlColumn => column_exists(conn, BOXES_TABLE, "image_url").await,
        MigrationStep::AddHiddenColumn => column_exists(conn, BOXES_TABLE, "hidden").await,
        MigrationStep::CreatedAtWithTimeZone => {
            let data_type: Option<String> = sqlx::query_scalar(
                "SELECT data_type FROM information_schema.columns
                 WHERE table_schema = current_schema() AND table_name = $1 AND column_name = 'created_at'",
            )
            .bind(BOXES_TABLE)
            .fetch_optional(&mut *conn)
            .await?;
            Ok(data_type.as_deref() != Some("timestamp without time zone"))
        },
        MigrationStep::CreateNumberIndex => index_exists(conn, NUMBER_INDEX).await,
    }
}

async fn table_exists(conn: &mut PgConnection, table: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = current_schema() AND table_name = $1
        )",
    )
    .bind(table)
    .fetch_one(conn)
    .await
}

async fn column_exists(
    conn: &mut PgConnection,
    table: &str,
    column: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = $1 AND column_name = $2
        )",
    )
    .bind(table)
    .bind(column)
    .fetch_one(conn)
    .await
}

async fn index_exists(conn: &mut PgConnection, index: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM pg_indexes WHERE schemaname = current_schema() AND indexname = $1
        )",
    )
    .bind(index)
    .fetch_one(conn)
    .await
}
