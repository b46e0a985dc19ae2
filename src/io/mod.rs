//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, output rendering)
//! - `reader` - Export reader with iterator interface and blank-line policy
//! - `writer` - Per-account output writer with no-overwrite policy

pub mod csv_format;
pub mod reader;
pub mod writer;

pub use csv_format::{convert_raw_row, output_row, RawRow, OUTPUT_HEADER};
pub use reader::{ExportReader, ReadOptions, REQUIRED_COLUMNS};
pub use writer::{write_group_csv, WriteOptions};
