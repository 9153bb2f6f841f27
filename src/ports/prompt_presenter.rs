use crate::domain::{PromptOutcome, PromptSpec};

use super::CancellationToken;

/// Port for showing a modal prompt to the user.
///
/// `present` blocks until the user answers, so it is always called on its own thread.
/// Implementations without a native timeout should watch `cancel` and return
/// `TimedOut` once it fires; the caller never waits for them to do so.
pub trait PromptPresenter: Send + Sync {
    /// Show the prompt and wait for the answer.
    ///
    /// Failures of the UI layer are reported as `PresentationFailed`, never as panics.
    fn present(&self, spec: &PromptSpec, cancel: &CancellationToken) -> PromptOutcome;
}
