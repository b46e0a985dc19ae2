//! Error types for the statement splitter
//!
//! This module defines all errors that can abort a split run. Errors are
//! designed to be descriptive and user-friendly for CLI output: each
//! variant names the offending row, field, or path.
//!
//! # Error Categories
//!
//! - **Input errors**: input file missing, I/O failures
//! - **Schema errors**: a required column absent from the header
//! - **Field errors**: a present field that cannot be parsed (date, amount)
//! - **Output errors**: destination file already exists
//!
//! Every variant is unrecoverable at the point of detection: the run
//! aborts with no partial output. The `RowErrors` variant exists only
//! for the opt-in collect mode, which aggregates every row failure
//! before aborting.

use thiserror::Error;

/// Main error type for the statement splitter
///
/// Row numbers are 1-based source file line numbers (the header row is
/// line 1), so they remain meaningful even when blank lines were skipped
/// during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Resolved input path does not reference an existing file
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// Carries the rendered message rather than the source error so the
    /// enum stays `Clone` and `PartialEq` for tests.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A required column is absent from the input header
    #[error("Missing required column '{column}' in header")]
    MissingColumn {
        /// Name of the absent column
        column: String,
    },

    /// A row could not be decoded against the header at all
    ///
    /// Covers structural CSV problems such as a row with the wrong
    /// number of fields, or a blank line when blank-line skipping is
    /// disabled.
    #[error("Row at line {line}: malformed row: {message}")]
    MalformedRow {
        /// 1-based source line number
        line: u64,
        /// Description of the decoding failure
        message: String,
    },

    /// The "Date" field text does not match `dd/MM/yyyy`
    #[error("Row at line {line}: invalid date '{value}' (expected dd/MM/yyyy, e.g. 26/03/2020)")]
    InvalidDate {
        /// 1-based source line number
        line: u64,
        /// The unparseable date text
        value: String,
    },

    /// The "Amount" field text is not an exact decimal number
    #[error("Row at line {line}: invalid amount '{value}'")]
    InvalidAmount {
        /// 1-based source line number
        line: u64,
        /// The unparseable amount text
        value: String,
    },

    /// The computed destination path for a group already exists
    ///
    /// The run aborts rather than overwrite; the existing file is left
    /// untouched.
    #[error("Refusing to overwrite existing file: {path}")]
    OutputCollision {
        /// The colliding destination path
        path: String,
    },

    /// Multiple row errors collected under `--on-error collect`
    ///
    /// The run still aborts with no output; this variant only changes
    /// how much is reported before aborting.
    #[error("{}", format_row_errors(.errors))]
    RowErrors {
        /// Every row-level error encountered, in source order
        errors: Vec<SplitError>,
    },
}

fn format_row_errors(errors: &[SplitError]) -> String {
    let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("{} invalid row(s):\n{}", errors.len(), lines.join("\n"))
}

impl SplitError {
    /// Wrap an `std::io::Error` with its path context
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        SplitError::Io {
            message: format!("{}: {}", path.display(), source),
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(source: std::io::Error) -> Self {
        SplitError::Io {
            message: source.to_string(),
        }
    }
}
