//! msgbox: show a timed Yes/No prompt and launch an executable on confirmation.
//!
//! The prompt and its timeout run as two threads; whichever finishes first decides the
//! outcome, and an explicit answer beats a timeout that fires at the same moment.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{LaunchAttempt, PromptReport, load_options, prompt};
pub use app::resolver::{DecisionResolver, Resolution};
pub use app::timer::{Timer, TimerHandle, TimerSignal, TimerState};
pub use app::{AppContext, launcher::ProcessLauncher};
pub use domain::{
    AppError, Decision, DecisionPolicy, LaunchRequest, LaunchResult, PromptMode, PromptOptions,
    PromptOutcome, PromptSettings, PromptSpec,
};
pub use ports::{CancellationToken, ProcessSpawner, PromptPresenter};
