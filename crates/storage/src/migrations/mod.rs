#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod column_helpers;

use box_tracker_core::BOXES_TABLE;
use column_helpers::{column_exists, index_exists, table_exists};
use rusqlite::{Connection, TransactionBehavior};

use crate::error::StorageError;
use crate::schema::{MigrationReport, MigrationStep};

const CREATE_BOXES_SQL: &str = "
CREATE TABLE IF NOT EXISTS boxes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    number INTEGER NOT NULL,
    room VARCHAR(100) NOT NULL,
    contents TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
";

const NUMBER_INDEX: &str = "idx_boxes_number";

/// Bring the SQLite schema up to date, checking each step before running it.
///
/// The whole pass holds one `BEGIN IMMEDIATE` write lock, so processes opening
/// the same file concurrently run the checks one after another.
pub(crate) fn run_migrations(conn: &mut Connection) -> Result<MigrationReport, StorageError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let mut report = MigrationReport::default();
    for step in MigrationStep::ALL {
        let applied = run_step(&tx, step).map_err(|e| StorageError::Migration {
            step: step.name(),
            reason: e.to_string(),
        })?;
        report.record(step, applied);
    }
    tx.commit()?;
    tracing::info!(%report, "SQLite schema up to date");
    Ok(report)
}

/// Returns `true` if the step made a change.
fn run_step(conn: &Connection, step: MigrationStep) -> Result<bool, rusqlite::Error> {
    if is_applied(conn, step)? {
        return Ok(false);
    }
    match step {
        MigrationStep::CreateBoxesTable => conn.execute_batch(CREATE_BOXES_SQL)?,
        MigrationStep::DropPriorityColumn => {
            conn.execute_batch("ALTER TABLE boxes DROP COLUMN priority")?;
        },
        MigrationStep::AddImageUrlColumn => {
            conn.execute_batch("ALTER TABLE boxes ADD COLUMN image_url TEXT")?;
        },
        MigrationStep::AddHiddenColumn => {
            conn.execute_batch("ALTER TABLE boxes ADD COLUMN hidden BOOLEAN NOT NULL DEFAULT 0")?;
        },
        MigrationStep::CreatedAtWithTimeZone => {},
        MigrationStep::CreateNumberIndex => {
            conn.execute_batch(&format!(
                "CREATE INDEX IF NOT EXISTS {NUMBER_INDEX} ON boxes (number)"
            ))?;
        },
    }
    Ok(true)
}

fn is_applied(conn: &Connection, step: MigrationStep) -> Result<bool, rusqlite::Error> {
    match step {
        MigrationStep::CreateBoxesTable => table_exists(conn, BOXES_TABLE),
        MigrationStep::DropPriorityColumn => {
            Ok(!column_exists(conn, BOXES_TABLE, "priority")?)
        },
        MigrationStep::AddImageUrlColumn => column_exists(conn, BOXES_TABLE, "image_url"),
        MigrationStep::AddHiddenColumn => column_exists(conn, BOXES_TABLE, "hidden"),
        // created_at is stored as RFC 3339 text, which always carries an offset.
        MigrationStep::CreatedAtWithTimeZone => Ok(true),
        MigrationStep::CreateNumberIndex => index_exists(conn, NUMBER_INDEX),
    }
}
