// CLI module
// Command-line interface, argument parsing, and interactive prompts

mod args;
pub mod console;

pub use args::{CliArgs, ErrorMode};
pub use console::{resolve_input_path, resolve_output_dir, Console};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g. an invalid `--on-error` value, or the --help
/// flag), clap displays an error message or help text and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
