//! Mapping from prompt outcomes to decisions.

use std::fmt;

use super::prompt::PromptOutcome;

/// What to do when the prompt times out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionPolicy {
    pub auto_yes_on_timeout: bool,
}

impl DecisionPolicy {
    pub fn new(auto_yes_on_timeout: bool) -> Self {
        Self { auto_yes_on_timeout }
    }
}

/// Final verdict derived from a prompt outcome.
///
/// `Skip` is a negative answer, given explicitly or by timeout policy. `Abort` means the
/// prompt itself never ran and must be surfaced as an error, not as a "No".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Skip,
    Abort(String),
}

impl Decision {
    pub fn from_outcome(outcome: &PromptOutcome, policy: DecisionPolicy) -> Self {
        match outcome {
            PromptOutcome::Yes => Decision::Proceed,
            PromptOutcome::No => Decision::Skip,
            PromptOutcome::TimedOut if policy.auto_yes_on_timeout => Decision::Proceed,
            PromptOutcome::TimedOut => Decision::Skip,
            PromptOutcome::PresentationFailed(reason) => Decision::Abort(reason.clone()),
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, Decision::Proceed)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Proceed => write!(f, "proceed"),
            Decision::Skip => write!(f, "skip"),
            Decision::Abort(reason) => write!(f, "abort: {}", reason),
        }
    }
}
