//! Ordered schema migrations shared by both backends.
//!
//! Each backend decides per step whether it is already applied and only then
//! runs it, so re-running the list on an up-to-date database is a no-op.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MigrationStep {
    /// `CREATE TABLE boxes` with the original column set.
    CreateBoxesTable,
    /// Remove the superseded `priority` column.
    DropPriorityColumn,
    /// Nullable `image_url TEXT`.
    AddImageUrlColumn,
    /// `hidden BOOLEAN NOT NULL DEFAULT FALSE`.
    AddHiddenColumn,
    /// Older PostgreSQL tables used `TIMESTAMP` without zone.
    CreatedAtWithTimeZone,
    /// Index backing the default `ORDER BY number`.
    CreateNumberIndex,
}

impl MigrationStep {
    /// Steps in the order they must run.
    pub const ALL: [Self; 6] = [
        Self::CreateBoxesTable,
        Self::DropPriorityColumn,
        Self::AddImageUrlColumn,
        Self::AddHiddenColumn,
        Self::CreatedAtWithTimeZone,
        Self::CreateNumberIndex,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateBoxesTable => "create_boxes_table",
            Self::DropPriorityColumn => "drop_priority_column",
            Self::AddImageUrlColumn => "add_image_url_column",
            Self::AddHiddenColumn => "add_hidden_column",
            Self::CreatedAtWithTimeZone => "created_at_with_time_zone",
            Self::CreateNumberIndex => "create_number_index",
        }
    }
}

impl fmt::Display for MigrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one pass over [`MigrationStep::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub applied: Vec<MigrationStep>,
    pub skipped: Vec<MigrationStep>,
}

impl MigrationReport {
    pub(crate) fn record(&mut self, step: MigrationStep, applied: bool) {
        if applied {
            tracing::info!(step = %step, "applied migration step");
            self.applied.push(step);
        } else {
            tracing::debug!(step = %step, "migration step already applied, skipping");
            self.skipped.push(step);
        }
    }

    /// `true` when the schema was already current.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |steps: &[MigrationStep]| {
            steps.iter().map(|s| s.name()).collect::<Vec<_>>().join(", ")
        };
        write!(f, "applied [{}], skipped [{}]", join(&self.applied), join(&self.skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_runs_first() {
        assert_eq!(MigrationStep::ALL[0], MigrationStep::CreateBoxesTable);
    }

    #[test]
    fn test_step_names_are_unique() {
        let mut names: Vec<_> = MigrationStep::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MigrationStep::ALL.len());
    }

    #[test]
    fn test_report_display() {
        let mut report = MigrationReport::default();
        report.record(MigrationStep::CreateBoxesTable, true);
        report.record(MigrationStep::DropPriorityColumn, false);
        assert!(!report.is_noop());
        assert_eq!(
            report.to_string(),
            "applied [create_boxes_table], skipped [drop_priority_column]"
        );
    }
}
