//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: the validated transaction record
//! - `error`: error types for the splitter

pub mod error;
pub mod record;

pub use error::SplitError;
pub use record::TransactionRecord;
