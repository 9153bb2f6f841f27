use std::io;

use thiserror::Error;

/// Library-wide error type for msgbox operations.
///
/// The prompt core itself never fails with this type: timer, presenter, resolver and
/// launcher all return total value types. `AppError` covers configuration and the
/// outcome of the top-level API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Yes/No mode was requested without an executable to run.
    #[error("Please provide an executable to run using --exe flag when using Yes/No box.")]
    MissingExecutable,

    /// Config file given explicitly but not present.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The prompt could not be shown at all.
    #[error("Failed to show message box: {0}")]
    Presentation(String),

    /// The executable could not be started.
    #[error("Failed to start executable: {0}")]
    Launch(String),
}
