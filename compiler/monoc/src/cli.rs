//! Argument handling.
//!
//! Flags are matched case-insensitively and may appear anywhere; the path
//! after `-file`/`-f` keeps its original spelling.

use std::io;

use mono_diagnostic::emitter::ColorMode;

/// Printed for any argument shape that is not a mode switch.
pub const USAGE: &str = "usage: mono [-cli | -c] | [-file | -f] <path>";

/// Required extension of Mono source files (compared case-insensitively).
pub const SOURCE_EXTENSION: &str = ".mono";

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Line-by-line prompt on stdin.
    Interactive,
    /// Scan one source file.
    File(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{usage}", usage = USAGE)]
    NoArguments,

    #[error("unknown option '{option}'\n{usage}", usage = USAGE)]
    UnknownOption { option: String },

    #[error("no file name argument found\n{usage}", usage = USAGE)]
    MissingPath,

    #[error("'{path}' is not a Mono source file (expected a `{ext}` extension)", ext = SOURCE_EXTENSION)]
    BadExtension { path: String },

    #[error("{}", describe_read_error(.path, .source))]
    Read { path: String, source: io::Error },

    #[error("error: {0}")]
    Io(#[from] io::Error),
}

fn describe_read_error(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

/// Parse the arguments after the program name.
///
/// `-cli`/`-c` wins over `-file`/`-f` when both are given.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let lowered: Vec<String> = args.iter().map(|arg| arg.to_lowercase()).collect();
    let has = |flag: &str| lowered.iter().any(|arg| arg == flag);

    if has("-cli") || has("-c") {
        return Ok(Command::Interactive);
    }

    if let Some(flag_index) = lowered.iter().position(|arg| arg == "-file" || arg == "-f") {
        let path = args.get(flag_index + 1).ok_or(CliError::MissingPath)?;
        if !has_source_extension(path) {
            return Err(CliError::BadExtension { path: path.clone() });
        }
        return Ok(Command::File(path.clone()));
    }

    match args.first() {
        None => Err(CliError::NoArguments),
        Some(option) => Err(CliError::UnknownOption {
            option: option.clone(),
        }),
    }
}

/// Whether `path` ends in `.mono`, ignoring case.
pub fn has_source_extension(path: &str) -> bool {
    path.to_lowercase().ends_with(SOURCE_EXTENSION)
}

/// `Auto` unless the `NO_COLOR` convention turns color off.
pub fn color_mode_from_env() -> ColorMode {
    if std::env::var_os("NO_COLOR").is_some() {
        ColorMode::Never
    } else {
        ColorMode::Auto
    }
}

impl CliError {
    /// Whether the usage line is part of the message.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::NoArguments | CliError::UnknownOption { .. } | CliError::MissingPath
        )
    }
}
