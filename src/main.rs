//! Statement Splitter CLI
//!
//! Command-line interface for splitting a combined account export into
//! one CSV per account.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- export.csv out/
//! cargo run -- export.csv
//! cargo run
//! cargo run -- --on-error collect export.csv out/
//! ```
//!
//! Either positional argument may be omitted, in which case the program
//! prompts for it interactively. The output directory defaults to the
//! input file's own directory when the prompt is answered with an empty
//! line.
//!
//! # Exit Behavior
//!
//! The program always pauses for an acknowledgment line before exiting
//! and always exits with the success status, even after a validation
//! failure. This matches the tool it replaces; failures are reported as
//! descriptive messages, not exit codes.

use statement_splitter::cli::{self, CliArgs, Console};
use statement_splitter::core::{split, SplitOptions};
use statement_splitter::types::SplitError;
use std::io::{BufRead, Write};

fn main() {
    let args = cli::parse_args();
    let mut console = Console::stdio();

    // Every fatal condition funnels into one uniform abort path: print
    // the diagnostic, pause, exit with the success status
    if let Err(e) = run(args, &mut console) {
        let _ = console.say(&e.to_string());
    }
    console.pause();
}

/// Resolve arguments interactively and run the pipeline
///
/// Parsing and validation signal failure through `SplitError`; only the
/// caller decides how to abort.
fn run<R: BufRead, W: Write>(
    args: CliArgs,
    console: &mut Console<R, W>,
) -> Result<(), SplitError> {
    console.greet()?;

    let input = cli::resolve_input_path(args.input_file, console)?;
    if !input.is_file() {
        return Err(SplitError::InputNotFound {
            path: input.display().to_string(),
        });
    }
    let output_dir = cli::resolve_output_dir(args.output_dir, &input, console)?;

    let options = SplitOptions {
        error_mode: args.on_error,
        ..SplitOptions::default()
    };
    split(&input, &output_dir, &options, console.writer())?;

    Ok(())
}
