//! CSV reader for the combined export with iterator interface
//!
//! Reads the whole input file into memory (the export is a single
//! personal statement, never large), applies the blank-line policy,
//! verifies the header schema up front, and then yields one
//! `Result<TransactionRecord, SplitError>` per data row in source order.
//!
//! # Design
//!
//! The reader deliberately does not abort on the first bad row: it
//! yields per-row results and leaves the stop-on-first-error vs.
//! collect-all policy to the orchestrator. Fatal conditions that make
//! row iteration meaningless (unreadable file, missing required column)
//! are returned from [`ExportReader::open`] instead.
//!
//! # Configuration
//!
//! All CSV reader behavior is explicit: [`ReadOptions`] is passed to
//! `open` rather than living in process-wide defaults, and the
//! underlying `csv::ReaderBuilder` is configured inline (no trimming,
//! rigid field counts).
//!
//! # Line Numbers
//!
//! Errors carry 1-based source file line numbers (the header row is
//! line 1). Blank lines removed during ingestion do not shift the
//! numbering: the original position of every data row is recorded
//! before decoding.

use crate::io::csv_format::{convert_raw_row, RawRow};
use crate::types::{SplitError, TransactionRecord};
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Columns that must be present in the input header
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Account",
    "Date",
    "Description",
    "Original Description",
    "Amount",
];

/// Explicit ingestion configuration
///
/// Passed to [`ExportReader::open`]; there is no implicit global reader
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Drop empty/whitespace-only lines before CSV decoding
    ///
    /// When disabled, a blank line is a malformed-row error instead of
    /// being silently ignored.
    pub skip_blank_lines: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
        }
    }
}

/// Reader over the combined export
///
/// Yields validated transaction records (or row-level errors) in source
/// row order.
///
/// # Examples
///
/// ```no_run
/// use statement_splitter::io::reader::{ExportReader, ReadOptions};
/// use std::path::Path;
///
/// let reader = ExportReader::open(Path::new("export.csv"), &ReadOptions::default()).unwrap();
/// for result in reader {
///     match result {
///         Ok(record) => println!("{} on {}", record.account, record.date),
///         Err(e) => eprintln!("{}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct ExportReader {
    reader: csv::Reader<Cursor<Vec<u8>>>,
    /// Source line number of each data row, parallel to the row stream
    line_numbers: Vec<u64>,
    next_row: usize,
}

impl ExportReader {
    /// Open the export and prepare row iteration
    ///
    /// Reads the whole file, applies the blank-line policy, and checks
    /// that every column in [`REQUIRED_COLUMNS`] appears in the header.
    ///
    /// # Returns
    ///
    /// * `Ok(ExportReader)` - File read and header schema verified
    /// * `Err(SplitError)` - Unreadable file, blank line with skipping
    ///   disabled, or a missing required column
    pub fn open(path: &Path, options: &ReadOptions) -> Result<Self, SplitError> {
        let content = fs::read_to_string(path).map_err(|e| SplitError::io(path, e))?;

        // Blank-line pass, keeping original line numbers for diagnostics
        let mut kept_lines: Vec<&str> = Vec::new();
        let mut line_numbers: Vec<u64> = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let line_number = index as u64 + 1;
            if line.trim().is_empty() {
                if options.skip_blank_lines {
                    continue;
                }
                return Err(SplitError::MalformedRow {
                    line: line_number,
                    message: "blank line".to_string(),
                });
            }
            kept_lines.push(line);
            line_numbers.push(line_number);
        }

        let filtered = kept_lines.join("\n");
        let mut reader = ReaderBuilder::new()
            .trim(Trim::None)
            .flexible(false)
            .from_reader(Cursor::new(filtered.into_bytes()));

        // Schema check up front: a missing column fails the whole run
        // before any row is decoded
        let headers = reader
            .headers()
            .map_err(|e| SplitError::Io {
                message: e.to_string(),
            })?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(SplitError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        // Drop the header's line number; the rest belong to data rows
        if !line_numbers.is_empty() {
            line_numbers.remove(0);
        }

        Ok(Self {
            reader,
            line_numbers,
            next_row: 0,
        })
    }
}

impl Iterator for ExportReader {
    type Item = Result<TransactionRecord, SplitError>;

    /// Get the next transaction record from the export
    ///
    /// # Returns
    ///
    /// * `Some(Ok(TransactionRecord))` - Successfully validated row
    /// * `Some(Err(SplitError))` - Decode or field validation failure,
    ///   with the source line number
    /// * `None` - End of input
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.reader.deserialize::<RawRow>().next()?;
        let line = self.line_numbers.get(self.next_row).copied().unwrap_or(0);
        self.next_row += 1;

        Some(match result {
            Ok(raw) => convert_raw_row(raw, line),
            Err(e) => Err(SplitError::MalformedRow {
                line,
                message: e.to_string(),
            }),
        })
    }
}
