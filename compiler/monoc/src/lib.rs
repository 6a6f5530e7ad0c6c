//! The Mono command line.
//!
//! Two modes sit on top of [`mono_lexer::scan`]:
//!
//! ```text
//! mono -cli | -c          read lines from stdin, scan each one
//! mono -file | -f <path>  scan a .mono file once
//! ```
//!
//! Everything the binary does lives here so it can be tested without
//! spawning a process; `main.rs` only maps results to exit codes.

pub mod cli;
pub mod commands;
pub mod output;
mod tracing_setup;

pub use cli::{parse_args, CliError, Command, USAGE};
pub use commands::Outcome;
pub use tracing_setup::init_tracing;
