//! `mono -file <path>`: scan one source file.

use std::io::{self, IsTerminal, Write};

use mono_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use mono_lexer::{scan, ScanOutput};

use super::{read_file, Outcome};
use crate::output::{render_token_table, section_rule};
use crate::CliError;

/// Read and scan `path`, returning the source alongside the result.
#[tracing::instrument(level = "debug")]
pub fn lex_file(path: &str) -> Result<(String, ScanOutput), CliError> {
    let source = read_file(path)?;
    tracing::debug!(bytes = source.len(), "read source file");
    let output = scan(path, &source);
    Ok((source, output))
}

/// Scan `path` and print the token table and diagnostics to stdout.
pub fn run_file(path: &str, color: ColorMode) -> Result<Outcome, CliError> {
    let (source, output) = lex_file(path)?;

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let mut out = stdout.lock();
    write_file_report(&mut out, &output, &source, color.should_use_colors(is_tty))?;
    out.flush()?;

    Ok(Outcome::from_scan(&output))
}

/// The file-mode report: token table (including `Eof`), a `_` rule, then
/// every diagnostic followed by a count.
pub fn write_file_report<W: Write>(
    out: &mut W,
    output: &ScanOutput,
    source: &str,
    colors: bool,
) -> io::Result<()> {
    out.write_all(render_token_table(output.tokens.as_slice()).as_bytes())?;
    writeln!(out)?;
    writeln!(out, "{}", section_rule())?;
    writeln!(out)?;

    if output.is_clean() {
        return Ok(());
    }

    let mode = if colors {
        ColorMode::Always
    } else {
        ColorMode::Never
    };
    let mut emitter = TerminalEmitter::with_color_mode(&mut *out, mode, false);
    emitter.emit_all(&output.diagnostics(), source)?;
    emitter.emit_summary(output.errors.len())?;
    emitter.flush()
}
