//! Core business logic module
//!
//! This module contains the splitting pipeline:
//! - `grouping` - Account partitioning and filename derivation (pure)
//! - `splitter` - Pipeline orchestration: parse, group, write

pub mod grouping;
pub mod splitter;

pub use grouping::{group_by_account, AccountGroup};
pub use splitter::{split, GroupReport, SplitOptions, SplitSummary};
