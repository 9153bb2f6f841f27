use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::domain::{PromptOutcome, PromptSpec};
use crate::ports::{CancellationToken, PromptPresenter};

enum Script {
    Answer { outcome: PromptOutcome, after: Duration, honour_cancel: bool },
    Silent,
    Panic,
}

/// Presenter double that plays back a fixed user behaviour.
pub struct ScriptedPresenter {
    script: Script,
    calls: AtomicUsize,
    saw_cancel: CancellationToken,
}

impl ScriptedPresenter {
    fn with_script(script: Script) -> Self {
        Self { script, calls: AtomicUsize::new(0), saw_cancel: CancellationToken::new() }
    }

    /// User answers `outcome` after `after`, unless cancelled first.
    pub fn answering(outcome: PromptOutcome, after: Duration) -> Self {
        Self::with_script(Script::Answer { outcome, after, honour_cancel: true })
    }

    /// User answers `outcome` after `after`, even if the prompt was cancelled.
    pub fn ignoring_cancel(outcome: PromptOutcome, after: Duration) -> Self {
        Self::with_script(Script::Answer { outcome, after, honour_cancel: false })
    }

    /// User never answers; the prompt stays up until cancelled.
    pub fn silent() -> Self {
        Self::with_script(Script::Silent)
    }

    /// The UI layer blows up.
    pub fn panicking() -> Self {
        Self::with_script(Script::Panic)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wait until the presenter has observed a cancellation request.
    pub fn wait_until_cancelled(&self, timeout: Duration) -> bool {
        self.saw_cancel.wait_timeout(timeout)
    }
}

impl PromptPresenter for ScriptedPresenter {
    fn present(&self, _spec: &PromptSpec, cancel: &CancellationToken) -> PromptOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Answer { outcome, after, honour_cancel: true } => {
                if cancel.wait_timeout(*after) {
                    self.saw_cancel.cancel();
                    return PromptOutcome::TimedOut;
                }
                outcome.clone()
            }
            Script::Answer { outcome, after, honour_cancel: false } => {
                thread::sleep(*after);
                outcome.clone()
            }
            Script::Silent => {
                cancel.wait();
                self.saw_cancel.cancel();
                PromptOutcome::TimedOut
            }
            Script::Panic => panic!("scripted presenter failure"),
        }
    }
}
