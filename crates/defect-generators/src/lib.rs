//! The fifteen data-quality problem generators.
//!
//! Each generator owns one table shape with a deliberate modeling flaw,
//! fills it with rows whose values are corrupted at documented rates, and
//! loads them through the shared batching machinery. Generators are
//! independent: no generator reads another's tables, and each commits its
//! own unit of work.
//!
//! [`plan`] turns a [`Scale`] into the fixed-order list of jobs a setup
//! run executes; [`catalog`] holds the per-problem diagnostic queries.

pub mod catalog;
pub mod problems;

use db_adapter::{AdapterError, DatabaseAdapter};
use workshop_core::{GenContext, Scale};

/// The fifteen problems, in the order a setup run executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    NoPrimaryKey,
    MissingForeignKeys,
    WrongDataTypes,
    MissingNotNull,
    DuplicateRecords,
    InconsistentDates,
    InconsistentCasing,
    Whitespace,
    InvalidEmails,
    OutOfRange,
    CsvInColumns,
    EncodingIssues,
    GodTable,
    MissingIndexes,
    TypeCoercion,
}

impl Problem {
    /// Fixed declaration order.
    pub const ALL: [Problem; 15] = [
        Problem::NoPrimaryKey,
        Problem::MissingForeignKeys,
        Problem::WrongDataTypes,
        Problem::MissingNotNull,
        Problem::DuplicateRecords,
        Problem::InconsistentDates,
        Problem::InconsistentCasing,
        Problem::Whitespace,
        Problem::InvalidEmails,
        Problem::OutOfRange,
        Problem::CsvInColumns,
        Problem::EncodingIssues,
        Problem::GodTable,
        Problem::MissingIndexes,
        Problem::TypeCoercion,
    ];

    /// 1-based position in the run order.
    pub fn number(&self) -> usize {
        Problem::ALL.iter().position(|p| p == self).expect("listed in ALL") + 1
    }

    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Problem::NoPrimaryKey => "No Primary Keys",
            Problem::MissingForeignKeys => "Missing Foreign Keys",
            Problem::WrongDataTypes => "Wrong Data Types",
            Problem::MissingNotNull => "Missing NOT NULL",
            Problem::DuplicateRecords => "Duplicate Records",
            Problem::InconsistentDates => "Inconsistent Dates",
            Problem::InconsistentCasing => "Inconsistent Casing",
            Problem::Whitespace => "Whitespace Issues",
            Problem::InvalidEmails => "Invalid Emails",
            Problem::OutOfRange => "Out of Range Values",
            Problem::CsvInColumns => "CSV in Columns",
            Problem::EncodingIssues => "Encoding Issues",
            Problem::GodTable => "God Table",
            Problem::MissingIndexes => "Missing Indexes",
            Problem::TypeCoercion => "Type Coercion",
        }
    }

    /// Multiplier applied to the scale's base row count.
    ///
    /// The god table doubles the base to make the repetition obvious;
    /// the audit log quintuples it so missing indexes actually hurt.
    pub fn row_multiplier(&self) -> u64 {
        match self {
            Problem::GodTable => 2,
            Problem::MissingIndexes => 5,
            _ => 1,
        }
    }

    /// Run this problem's generator for `row_count` rows.
    pub async fn run(
        &self,
        db: &mut dyn DatabaseAdapter,
        ctx: &mut GenContext,
        row_count: u64,
    ) -> Result<(), AdapterError> {
        use problems::*;
        tracing::debug!(problem = self.name(), row_count, "running generator");
        match self {
            Problem::NoPrimaryKey => no_primary_key::run(db, ctx, row_count).await,
            Problem::MissingForeignKeys => missing_foreign_keys::run(db, ctx, row_count).await,
            Problem::WrongDataTypes => wrong_data_types::run(db, ctx, row_count).await,
            Problem::MissingNotNull => missing_not_null::run(db, ctx, row_count).await,
            Problem::DuplicateRecords => duplicate_records::run(db, ctx, row_count).await,
            Problem::InconsistentDates => inconsistent_dates::run(db, ctx, row_count).await,
            Problem::InconsistentCasing => inconsistent_casing::run(db, ctx, row_count).await,
            Problem::Whitespace => whitespace::run(db, ctx, row_count).await,
            Problem::InvalidEmails => invalid_emails::run(db, ctx, row_count).await,
            Problem::OutOfRange => out_of_range::run(db, ctx, row_count).await,
            Problem::CsvInColumns => csv_in_columns::run(db, ctx, row_count).await,
            Problem::EncodingIssues => encoding_issues::run(db, ctx, row_count).await,
            Problem::GodTable => god_table::run(db, ctx, row_count).await,
            Problem::MissingIndexes => missing_indexes::run(db, ctx, row_count).await,
            Problem::TypeCoercion => type_coercion::run(db, ctx, row_count).await,
        }
    }
}

/// One scheduled generator run.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorJob {
    pub problem: Problem,
    pub row_count: u64,
}

/// Fan the scale's base row count out across all problems, in order.
pub fn plan(scale: Scale) -> Vec<GeneratorJob> {
    let base = scale.base_rows();
    Problem::ALL
        .iter()
        .map(|&problem| GeneratorJob {
            problem,
            row_count: base * problem.row_multiplier(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_covers_all_problems_in_order() {
        let jobs = plan(Scale::Small);
        assert_eq!(jobs.len(), 15);
        for (i, job) in jobs.iter().enumerate() {
            assert_eq!(job.problem, Problem::ALL[i]);
            assert_eq!(job.problem.number(), i + 1);
        }
    }

    #[test]
    fn test_plan_row_counts_are_exact() {
        for scale in [Scale::Tiny, Scale::Small, Scale::Medium, Scale::Large, Scale::Xlarge] {
            let base = scale.base_rows();
            for job in plan(scale) {
                let expected = match job.problem {
                    Problem::GodTable => base * 2,
                    Problem::MissingIndexes => base * 5,
                    _ => base,
                };
                assert_eq!(job.row_count, expected, "{:?} at {scale}", job.problem);
            }
        }
    }
}
