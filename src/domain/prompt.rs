//! Prompt domain models.

use std::fmt;
use std::time::Duration;

/// Button set offered by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// Single "OK" button; any dismissal counts as acknowledgement.
    Acknowledge,
    /// Yes and No buttons.
    YesNo,
}

impl PromptMode {
    pub fn from_yes_no(yes_no: bool) -> Self {
        if yes_no { PromptMode::YesNo } else { PromptMode::Acknowledge }
    }
}

/// Everything needed to show one prompt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    message: String,
    caption: String,
    mode: PromptMode,
    timeout: Duration,
}

impl PromptSpec {
    pub fn new(
        message: impl Into<String>,
        caption: impl Into<String>,
        mode: PromptMode,
        timeout: Duration,
    ) -> Self {
        Self { message: message.into(), caption: caption.into(), mode, timeout }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn mode(&self) -> PromptMode {
        self.mode
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// How a single prompt invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// User chose Yes (or acknowledged an OK prompt).
    Yes,
    /// User chose No.
    No,
    /// The timer elapsed before the user answered.
    TimedOut,
    /// The prompt could not be shown.
    PresentationFailed(String),
}

impl PromptOutcome {
    /// Restrict an outcome to what the given mode can produce.
    ///
    /// An acknowledgement prompt has no negative answer, so dismissing it is `Yes`.
    pub fn for_mode(self, mode: PromptMode) -> Self {
        match (mode, self) {
            (PromptMode::Acknowledge, PromptOutcome::No) => PromptOutcome::Yes,
            (_, outcome) => outcome,
        }
    }
}

impl fmt::Display for PromptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptOutcome::Yes => write!(f, "yes"),
            PromptOutcome::No => write!(f, "no"),
            PromptOutcome::TimedOut => write!(f, "timed out"),
            PromptOutcome::PresentationFailed(reason) => {
                write!(f, "presentation failed: {}", reason)
            }
        }
    }
}
