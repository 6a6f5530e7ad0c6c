//! Command handlers for the Mono CLI.
//!
//! Each submodule implements one mode. Shared helpers like `read_file`
//! live here in the module root.

use std::process::ExitCode;

use mono_lexer::ScanOutput;

use crate::CliError;

mod file;
mod interactive;

pub use file::{lex_file, run_file, write_file_report};
pub use interactive::{render_line, run_interactive, PROMPT};

/// How a scan ended, as far as the process exit status is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// Lexical errors were reported; scanning finished normally.
    Errors(usize),
    /// An error asked the host to stop (reserved word misuse in a file).
    Halt,
}

impl Outcome {
    pub fn from_scan(output: &ScanOutput) -> Self {
        if output.halt_requested() {
            Outcome::Halt
        } else if output.is_clean() {
            Outcome::Clean
        } else {
            Outcome::Errors(output.errors.len())
        }
    }

    /// Only a halt request fails the process; ordinary lexical errors are
    /// reported and the run still succeeds.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean | Outcome::Errors(_) => ExitCode::SUCCESS,
            Outcome::Halt => ExitCode::FAILURE,
        }
    }
}

/// Read a source file, mapping failures to a [`CliError::Read`].
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
