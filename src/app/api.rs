//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::adapters::{CommandSpawner, ConsolePresenter};
use crate::app::commands::prompt as prompt_command;
use crate::app::{AppContext, config};

pub use crate::app::commands::prompt::{LaunchAttempt, PromptReport};
pub use crate::domain::{AppError, PromptOptions, PromptSettings};

/// How long a cancelled prompt gets to restore the terminal after a timeout.
const RESTORE_GRACE: Duration = Duration::from_millis(500);

/// Create an `AppContext` wired to the console and the OS.
fn create_context() -> AppContext<ConsolePresenter, CommandSpawner> {
    AppContext::new(Arc::new(ConsolePresenter::detect()), CommandSpawner::new())
}

/// Merge command-line settings over an optional config file and validate them.
pub fn load_options(
    overrides: PromptSettings,
    config_path: Option<&Path>,
) -> Result<PromptOptions, AppError> {
    config::load_options(overrides, config_path)
}

/// Show the prompt on the console and launch the executable if the answer is Yes.
///
/// Fails before showing anything if a Yes/No prompt has no executable. Otherwise the
/// report is returned as-is; use [`PromptReport::into_result`] to turn an aborted prompt
/// or a failed launch into an error.
pub fn prompt(options: &PromptOptions) -> Result<PromptReport, AppError> {
    let ctx = create_context();
    let report = prompt_command::execute(&ctx, options)?;
    if !ctx.resolver().presenter().wait_until_restored(RESTORE_GRACE) {
        warn!("terminal prompt did not restore the terminal in time");
    }
    Ok(report)
}
