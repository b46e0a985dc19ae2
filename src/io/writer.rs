//! Per-account output CSV writer
//!
//! Writes one import-ready CSV per account group with the fixed
//! `Date,Payee,Memo,Amount` header. The writer refuses to touch an
//! existing destination file: a collision aborts the run before any
//! byte is written, leaving the existing file untouched.

use crate::io::csv_format::{output_row, OUTPUT_HEADER};
use crate::types::{SplitError, TransactionRecord};
use csv::WriterBuilder;
use std::path::Path;

/// Explicit output configuration
///
/// Passed to [`write_group_csv`]; there is no implicit global writer
/// state. The default refuses to overwrite existing files, which is the
/// only behavior the pipeline uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Allow replacing an existing destination file
    pub overwrite: bool,
}

/// Write one account group to its destination file
///
/// Emits the [`OUTPUT_HEADER`] row followed by one row per record in
/// the order given: ISO date, description as Payee, empty Memo, exact
/// decimal Amount.
///
/// # Arguments
///
/// * `path` - Destination file path (directory + derived filename)
/// * `records` - The group's records in insertion order
/// * `options` - Output configuration
///
/// # Returns
///
/// * `Ok(())` - File fully written and flushed
/// * `Err(SplitError::OutputCollision)` - Destination already exists
///   and overwriting is not allowed
/// * `Err(SplitError::Io)` - File creation or write failure
pub fn write_group_csv(
    path: &Path,
    records: &[TransactionRecord],
    options: &WriteOptions,
) -> Result<(), SplitError> {
    if !options.overwrite && path.exists() {
        return Err(SplitError::OutputCollision {
            path: path.display().to_string(),
        });
    }

    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|e| SplitError::Io {
            message: format!("{}: {}", path.display(), e),
        })?;

    writer
        .write_record(OUTPUT_HEADER)
        .map_err(|e| SplitError::Io {
            message: format!("Failed to write header: {}", e),
        })?;

    for record in records {
        writer
            .write_record(&output_row(record))
            .map_err(|e| SplitError::Io {
                message: format!("Failed to write record: {}", e),
            })?;
    }

    writer.flush().map_err(|e| SplitError::Io {
        message: format!("Failed to flush output: {}", e),
    })?;

    Ok(())
}
