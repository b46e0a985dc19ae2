//! Transaction record types for the statement splitter
//!
//! This module defines the validated transaction record produced by the
//! parser and consumed by the grouping and output stages.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single validated transaction from the combined export
///
/// Constructed exactly once per valid input row by the parser
/// (`io::csv_format`); a row that fails any field rule never produces a
/// record. The struct itself carries no validation logic and is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Owning account identifier, taken verbatim from the source
    /// "Account" column with no normalization
    pub account: String,

    /// Transaction date at day precision (no time, no timezone)
    ///
    /// Parsed strictly from the source `dd/MM/yyyy` text.
    pub date: NaiveDate,

    /// Free-text counterparty description, written to the output "Payee"
    /// column
    ///
    /// Taken from "Description", falling back to "Original Description"
    /// when the primary value is the empty string.
    pub description: String,

    /// Signed transaction amount with exact precision
    ///
    /// Negative values are outflows. Scale is preserved from the source
    /// text ("2000.00" stays "2000.00").
    pub amount: Decimal,
}
