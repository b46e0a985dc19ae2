//! Split pipeline orchestration
//!
//! This module wires the stages together: read and validate the export,
//! partition by account, derive filenames, and write one output file per
//! group. It focuses on orchestration, delegating:
//! - CSV parsing to `io::reader::ExportReader` (iterator interface)
//! - Partitioning and filenames to `core::grouping` (pure functions)
//! - CSV output to `io::writer::write_group_csv` (format handling)
//!
//! # Error Policy
//!
//! The reader yields per-row results; this module applies the policy.
//! Under [`ErrorMode::Abort`] (the default) the first bad row aborts
//! the run. Under [`ErrorMode::Collect`] every row is validated and all
//! failures are reported together — the run still aborts with no output.
//! Either way, no output file is written unless every input row
//! validated.
//!
//! Writes happen sequentially per group; an output collision aborts at
//! the point of detection. Files for earlier groups are complete and
//! correct when that happens, never partial.

use crate::cli::ErrorMode;
use crate::core::grouping::group_by_account;
use crate::io::reader::{ExportReader, ReadOptions};
use crate::io::writer::{write_group_csv, WriteOptions};
use crate::types::{SplitError, TransactionRecord};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Configuration for one split run
///
/// All behavior is explicit; nothing is read from process-wide state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOptions {
    /// Ingestion configuration (blank-line policy)
    pub read: ReadOptions,
    /// Output configuration (overwrite policy)
    pub write: WriteOptions,
    /// Stop on first bad row, or validate everything and report together
    pub error_mode: ErrorMode,
}

/// What was written for one account group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    /// The account value shared by the group's rows
    pub account: String,
    /// Number of data rows written (excluding the header)
    pub rows: usize,
    /// Destination file path
    pub path: PathBuf,
}

/// Result of a completed split run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// Total number of validated input rows
    pub total_rows: usize,
    /// Per-group reports in first-seen account order
    pub groups: Vec<GroupReport>,
}

/// Run the full split pipeline
///
/// Reads `input`, validates every row, partitions by account, and
/// writes one CSV per account into `output_dir`. Progress lines
/// (per-group row counts and destinations) go to `progress` before each
/// write, matching the interactive tool's output.
///
/// # Arguments
///
/// * `input` - Path to the combined export CSV
/// * `output_dir` - Directory receiving the per-account files
/// * `options` - Explicit run configuration
/// * `progress` - Sink for human-readable progress lines
///
/// # Returns
///
/// * `Ok(SplitSummary)` - Every group written; counts and destinations
/// * `Err(SplitError)` - First fatal condition encountered; no output
///   file was written for the failing group or any later group
pub fn split(
    input: &Path,
    output_dir: &Path,
    options: &SplitOptions,
    progress: &mut dyn Write,
) -> Result<SplitSummary, SplitError> {
    if !input.is_file() {
        return Err(SplitError::InputNotFound {
            path: input.display().to_string(),
        });
    }

    let reader = ExportReader::open(input, &options.read)?;
    let records = collect_records(reader, options.error_mode)?;
    let total_rows = records.len();

    let groups = group_by_account(records);
    writeln!(
        progress,
        "Parsed {} transactions across {} accounts",
        total_rows,
        groups.len()
    )?;

    let mut reports = Vec::with_capacity(groups.len());
    for group in &groups {
        let path = output_dir.join(group.file_name());
        writeln!(
            progress,
            "Writing {} entries to {}",
            group.records().len(),
            path.display()
        )?;
        write_group_csv(&path, group.records(), &options.write)?;
        reports.push(GroupReport {
            account: group.account().to_string(),
            rows: group.records().len(),
            path,
        });
    }

    Ok(SplitSummary {
        total_rows,
        groups: reports,
    })
}

/// Apply the error-mode policy to the reader's row results
fn collect_records(
    reader: ExportReader,
    mode: ErrorMode,
) -> Result<Vec<TransactionRecord>, SplitError> {
    match mode {
        ErrorMode::Abort => reader.collect(),
        ErrorMode::Collect => {
            let mut records = Vec::new();
            let mut errors = Vec::new();
            for result in reader {
                match result {
                    Ok(record) => records.push(record),
                    Err(e) => errors.push(e),
                }
            }
            if errors.is_empty() {
                Ok(records)
            } else {
                Err(SplitError::RowErrors { errors })
            }
        }
    }
}
