//! CSV format handling for the combined export and the per-account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - RawRow structure for header-keyed deserialization of source rows
//! - Conversion from raw rows to validated transaction records
//! - The output header and per-record output row rendering
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{SplitError, TransactionRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Source date format: day/month/4-digit-year, e.g. "26/03/2020"
const SOURCE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Header row of every per-account output file
pub const OUTPUT_HEADER: [&str; 4] = ["Date", "Payee", "Memo", "Amount"];

/// Raw row structure for deserialization
///
/// Matches the combined-export columns by header name. All fields are
/// kept as raw text here; typed parsing and the fallback policy live in
/// [`convert_raw_row`]. Columns beyond the five named ones are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RawRow {
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Original Description")]
    pub original_description: String,
    #[serde(rename = "Amount")]
    pub amount: String,
}

/// Convert a RawRow into a validated TransactionRecord
///
/// Field policy, in order:
/// - `Account` is taken verbatim (no normalization, no trimming)
/// - `Date` must match `dd/MM/yyyy` exactly; anything else fails
/// - `Description` falls back to `Original Description` when it is the
///   empty string; the fallback is shallow — an empty fallback value
///   yields an empty description, not an error
/// - `Amount` must parse as an exact decimal (optional sign, decimal
///   point; no currency symbols or thousands separators)
///
/// # Arguments
///
/// * `raw` - The deserialized source row
/// * `line` - 1-based source line number, used only for error context
///
/// # Returns
///
/// * `Ok(TransactionRecord)` - Every field parsed and validated
/// * `Err(SplitError)` - The first failing field, naming the line
pub fn convert_raw_row(raw: RawRow, line: u64) -> Result<TransactionRecord, SplitError> {
    // Strict dd/MM/yyyy: chrono alone accepts unpadded days and short
    // years, so the parsed date must render back to the exact input
    let date = NaiveDate::parse_from_str(&raw.date, SOURCE_DATE_FORMAT)
        .ok()
        .filter(|d| d.format(SOURCE_DATE_FORMAT).to_string() == raw.date)
        .ok_or_else(|| SplitError::InvalidDate {
            line,
            value: raw.date.clone(),
        })?;

    // Shallow fallback: only the primary field's emptiness is checked
    let description = if raw.description.is_empty() {
        raw.original_description
    } else {
        raw.description
    };

    let amount = Decimal::from_str(&raw.amount).map_err(|_| SplitError::InvalidAmount {
        line,
        value: raw.amount.clone(),
    })?;

    Ok(TransactionRecord {
        account: raw.account,
        date,
        description,
        amount,
    })
}

/// Render one record as an output row
///
/// Columns match [`OUTPUT_HEADER`]: ISO `YYYY-MM-DD` date, description
/// as Payee, an always-empty Memo, and the amount as plain decimal text
/// with the source precision preserved.
pub fn output_row(record: &TransactionRecord) -> [String; 4] {
    [
        record.date.to_string(),
        record.description.clone(),
        String::new(),
        record.amount.to_string(),
    ]
}
