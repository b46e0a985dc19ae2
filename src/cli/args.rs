use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Split a combined account export into one CSV per account
#[derive(Parser, Debug)]
#[command(name = "statement-splitter")]
#[command(
    about = "Split a combined financial export CSV into one import-ready file per account",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the combined export CSV
    ///
    /// Prompted for interactively when omitted.
    #[arg(value_name = "INPUT", help = "Path to the combined export CSV file")]
    pub input_file: Option<PathBuf>,

    /// Directory to write the per-account files into
    ///
    /// Prompted for interactively when omitted; an empty answer defaults
    /// to the input file's own directory.
    #[arg(value_name = "OUTPUT_DIR", help = "Directory for the per-account output files")]
    pub output_dir: Option<PathBuf>,

    /// Row validation policy
    #[arg(
        long = "on-error",
        value_name = "MODE",
        default_value = "abort",
        help = "Row error policy: 'abort' stops at the first bad row, 'collect' reports all bad rows together"
    )]
    pub on_error: ErrorMode,
}

/// Row error policy applied while validating the export
///
/// Both modes abort the run on any bad row and write no output files;
/// `Collect` only changes how much is reported before aborting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorMode {
    /// Stop at the first invalid row (default, matches the source tool)
    #[default]
    Abort,
    /// Validate every row and report all failures together
    Collect,
}
