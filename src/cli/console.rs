//! Interactive console for resolving missing arguments
//!
//! The splitter prompts for whatever the command line did not supply:
//! the input file (re-prompting until a non-empty answer arrives) and
//! the output directory (an empty answer defaults to the input file's
//! own directory). It also pauses for an acknowledgment line before the
//! process exits, on success and failure alike.
//!
//! The console is generic over its reader and writer so the prompt
//! loops are testable with in-memory buffers instead of a real TTY.

use crate::types::SplitError;
use std::io::{self, BufRead, Stdout, Write};
use std::path::{Path, PathBuf};

/// Paired input/output streams for interactive exchanges
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console over the process's real stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line to the console's output
    pub fn say(&mut self, message: &str) -> Result<(), SplitError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print a prompt (no newline) and read one answer line
    ///
    /// The trailing line terminator is stripped. End of input is an
    /// error: with no interactive source left there is nothing to
    /// re-prompt.
    pub fn prompt(&mut self, message: &str) -> Result<String, SplitError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(SplitError::Io {
                message: "unexpected end of interactive input".to_string(),
            });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print the greeting banner
    pub fn greet(&mut self) -> Result<(), SplitError> {
        let lines = [
            "Welcome to the statement splitter!",
            "I'm going to write a separate import file for each account in your export.",
        ];
        let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        self.say(&"*".repeat(width + 4))?;
        for line in lines {
            self.say(&format!("* {}{} *", line, " ".repeat(width - line.len())))?;
        }
        self.say(&"*".repeat(width + 4))?;
        Ok(())
    }

    /// Wait for an acknowledgment line before the process exits
    ///
    /// Best-effort: a failure here must not mask the run's outcome.
    pub fn pause(&mut self) {
        let _ = writeln!(self.output, "Press enter to exit");
        let _ = self.output.flush();
        let _ = self.input.read_line(&mut String::new());
    }

    /// Sink for pipeline progress lines
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }
}

/// Resolve the input file path from argv or the console
///
/// An argv value is echoed and used as-is. Otherwise the console is
/// asked, re-prompting until the answer is non-empty.
pub fn resolve_input_path<R: BufRead, W: Write>(
    arg: Option<PathBuf>,
    console: &mut Console<R, W>,
) -> Result<PathBuf, SplitError> {
    if let Some(path) = arg {
        console.say(&format!("Using: {}", path.display()))?;
        return Ok(path);
    }

    loop {
        let answer = console.prompt("Please enter the file to split: ")?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(PathBuf::from(answer));
        }
    }
}

/// Resolve the output directory from argv or the console
///
/// An argv value is echoed and used as-is. Otherwise the console is
/// asked once; an empty answer selects the input file's own directory.
pub fn resolve_output_dir<R: BufRead, W: Write>(
    arg: Option<PathBuf>,
    input: &Path,
    console: &mut Console<R, W>,
) -> Result<PathBuf, SplitError> {
    if let Some(dir) = arg {
        console.say(&format!("Writing to: {}", dir.display()))?;
        return Ok(dir);
    }

    let default = parent_dir(input);
    let answer = console.prompt(&format!("Directory to write to ({}): ", default.display()))?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default)
    } else {
        Ok(PathBuf::from(answer))
    }
}

/// The input file's own directory, or "." for a bare filename
fn parent_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
