use std::io::{self, IsTerminal};
use std::time::Duration;

use super::line_presenter::LinePresenter;
use super::terminal_presenter::TerminalPresenter;
use crate::domain::{PromptOutcome, PromptSpec};
use crate::ports::{CancellationToken, PromptPresenter};

/// Presenter chosen from what the process is attached to.
pub enum ConsolePresenter {
    Terminal(TerminalPresenter),
    Line(LinePresenter),
}

impl ConsolePresenter {
    /// Interactive dialog when stdin and stderr are both terminals, line input otherwise.
    pub fn detect() -> Self {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            ConsolePresenter::Terminal(TerminalPresenter::new())
        } else {
            ConsolePresenter::Line(LinePresenter::stdio())
        }
    }

    /// Wait for a cancelled prompt to hand the console back.
    ///
    /// Line prompts never change the terminal mode, so only the terminal prompt waits.
    pub fn wait_until_restored(&self, timeout: Duration) -> bool {
        match self {
            ConsolePresenter::Terminal(presenter) => presenter.wait_until_restored(timeout),
            ConsolePresenter::Line(_) => true,
        }
    }
}

impl PromptPresenter for ConsolePresenter {
    fn present(&self, spec: &PromptSpec, cancel: &CancellationToken) -> PromptOutcome {
        match self {
            ConsolePresenter::Terminal(presenter) => presenter.present(spec, cancel),
            ConsolePresenter::Line(presenter) => presenter.present(spec, cancel),
        }
    }
}
