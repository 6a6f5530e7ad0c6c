//! Scanner configuration.

/// Source name used for lines read from the interactive prompt.
pub const STDIN_SOURCE: &str = "<stdin>";

/// Where the source text came from.
///
/// The mode only changes one rule: in `File` mode a reserved word standing
/// alone is an error, at the prompt it is a token.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScanMode {
    /// One line typed at the prompt.
    Interactive,
    /// A whole source file.
    #[default]
    File,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScanConfig {
    pub mode: ScanMode,
}

impl ScanConfig {
    pub const fn new(mode: ScanMode) -> Self {
        ScanConfig { mode }
    }

    pub const fn interactive() -> Self {
        Self::new(ScanMode::Interactive)
    }

    pub const fn file() -> Self {
        Self::new(ScanMode::File)
    }

    /// Pick the mode from a source name: [`STDIN_SOURCE`] is interactive,
    /// anything else is a file.
    pub fn for_source(source_name: &str) -> Self {
        if source_name == STDIN_SOURCE {
            Self::interactive()
        } else {
            Self::file()
        }
    }
}
