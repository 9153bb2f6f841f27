//! Launch request and result models.

use std::fmt;
use std::path::Path;

/// Reason reported when a launch is attempted without a path.
pub const MISSING_EXECUTABLE_PATH: &str = "missing executable path";

/// Executable to start after an affirmative decision.
///
/// The path is kept as given; the launcher rejects an empty or blank one before touching
/// the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    executable_path: String,
}

impl LaunchRequest {
    pub fn new(executable_path: impl Into<String>) -> Self {
        Self { executable_path: executable_path.into() }
    }

    pub fn executable_path(&self) -> &str {
        &self.executable_path
    }

    /// Path to hand to the OS, or `None` if it is empty or only whitespace.
    pub fn validated_path(&self) -> Option<&Path> {
        if self.executable_path.trim().is_empty() {
            None
        } else {
            Some(Path::new(&self.executable_path))
        }
    }
}

/// Whether the OS accepted the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchResult {
    Started,
    Failed(String),
}

impl LaunchResult {
    pub fn is_started(&self) -> bool {
        matches!(self, LaunchResult::Started)
    }
}

impl fmt::Display for LaunchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchResult::Started => write!(f, "started"),
            LaunchResult::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}
