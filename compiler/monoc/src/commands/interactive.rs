//! `mono -cli`: scan stdin one line at a time.

use std::io::{self, BufRead, Write};

use mono_lexer::{scan, STDIN_SOURCE};

use crate::output::render_token_table;

pub const PROMPT: &str = "mono > ";

/// Prompt, read a line, print its scan; repeat until end of input.
///
/// Blank lines are skipped. Each line is scanned on its own, so nothing
/// carries over between lines.
pub fn run_interactive<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let text = line.trim_end_matches(['\n', '\r']);
        if text.trim().is_empty() {
            continue;
        }
        out.write_all(render_line(text).as_bytes())?;
    }
}

/// The rendered errors of `text` if it has any, otherwise its token
/// table without the `Eof` row.
pub fn render_line(text: &str) -> String {
    let output = scan(STDIN_SOURCE, text);
    if output.is_clean() {
        render_token_table(output.tokens.without_eof())
    } else {
        let mut rendered = output.render_errors(text);
        rendered.push_str("\n\n");
        rendered
    }
}
