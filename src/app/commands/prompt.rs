//! Prompt command: race the prompt, then launch on an affirmative decision.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{
    AppError, Decision, LaunchRequest, LaunchResult, PromptMode, PromptOptions, PromptOutcome,
};
use crate::ports::{ProcessSpawner, PromptPresenter};

/// A launch that was attempted after `Proceed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchAttempt {
    pub request: LaunchRequest,
    pub result: LaunchResult,
}

/// Everything the prompt flow produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptReport {
    pub mode: PromptMode,
    pub outcome: PromptOutcome,
    pub decision: Decision,
    /// Set only when a Yes/No prompt ended in `Proceed`.
    pub launch: Option<LaunchAttempt>,
}

impl PromptReport {
    /// Human-readable status lines for a successful flow.
    ///
    /// Failures are not rendered here; [`PromptReport::into_result`] turns them into errors.
    pub fn status_lines(&self) -> Vec<String> {
        match (self.mode, &self.decision) {
            (_, Decision::Abort(_)) => Vec::new(),
            (PromptMode::Acknowledge, _) => {
                if self.outcome == PromptOutcome::TimedOut {
                    vec!["Message box timed out.".to_string()]
                } else {
                    vec!["OK message box closed.".to_string()]
                }
            }
            (PromptMode::YesNo, Decision::Skip) => {
                vec!["No clicked or timeout without auto-yes.".to_string()]
            }
            (PromptMode::YesNo, Decision::Proceed) => {
                let Some(attempt) = &self.launch else {
                    return Vec::new();
                };
                let mut lines = vec![format!(
                    "Yes clicked or auto-yes triggered, running executable: {}",
                    attempt.request.executable_path()
                )];
                if attempt.result.is_started() {
                    lines.push("Executable started successfully.".to_string());
                }
                lines
            }
        }
    }

    /// Surface an aborted prompt or a failed launch as an error.
    pub fn into_result(self) -> Result<Self, AppError> {
        if let Decision::Abort(reason) = &self.decision {
            return Err(AppError::Presentation(reason.clone()));
        }
        if let Some(LaunchAttempt { result: LaunchResult::Failed(reason), .. }) = &self.launch {
            return Err(AppError::Launch(reason.clone()));
        }
        Ok(self)
    }
}

/// Execute the prompt flow.
///
/// A Yes/No prompt without a launch request is rejected before anything is shown.
pub fn execute<P, S>(
    ctx: &AppContext<P, S>,
    options: &PromptOptions,
) -> Result<PromptReport, AppError>
where
    P: PromptPresenter + ?Sized + 'static,
    S: ProcessSpawner,
{
    let mode = options.spec.mode();
    if mode == PromptMode::YesNo && options.launch.is_none() {
        return Err(AppError::MissingExecutable);
    }

    let resolution = ctx.resolver().resolve(&options.spec, options.policy);

    let launch = match (mode, &resolution.decision, &options.launch) {
        (PromptMode::YesNo, Decision::Proceed, Some(request)) => {
            let result = ctx.launcher().launch(request);
            Some(LaunchAttempt { request: request.clone(), result })
        }
        _ => {
            debug!(decision = %resolution.decision, "nothing to launch");
            None
        }
    };

    Ok(PromptReport { mode, outcome: resolution.outcome, decision: resolution.decision, launch })
}
