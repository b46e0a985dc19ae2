//! Statement Splitter Library
//! # Overview
//!
//! This library splits a single combined financial-transaction export
//! (Money Dashboard style CSV, covering multiple accounts) into one
//! import-ready CSV per account, named by account and date range.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, SplitError)
//! - [`cli`] - CLI argument parsing and the interactive console
//! - [`core`] - Business logic components:
//!   - [`core::grouping`] - Account partitioning and filename derivation
//!   - [`core::splitter`] - Pipeline orchestration
//! - [`io`] - CSV ingestion and output:
//!   - [`io::reader`] - Export reader with header schema validation
//!   - [`io::writer`] - Per-account output with no-overwrite policy
//!
//! # Pipeline
//!
//! 1. Read the export, skipping blank lines, and validate every row
//!    (strict `dd/MM/yyyy` dates, exact decimal amounts, description
//!    fallback to "Original Description")
//! 2. Partition records by account, preserving source order
//! 3. Derive `{account}_{minDate}_to_{maxDate}.csv` per group
//! 4. Write each group as `Date,Payee,Memo,Amount`, refusing to
//!    overwrite existing files
//!
//! Any failure aborts the run before the failing file (or any later
//! file) is written; there is no per-row skip-and-continue.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    group_by_account, split, AccountGroup, GroupReport, SplitOptions, SplitSummary,
};
pub use io::{ExportReader, ReadOptions, WriteOptions};
pub use types::{SplitError, TransactionRecord};
