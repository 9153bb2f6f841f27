//! Validated prompt options.

use std::time::Duration;

use crate::domain::{AppError, DecisionPolicy, LaunchRequest, PromptMode, PromptSpec};

use super::settings::PromptSettings;

pub const DEFAULT_MESSAGE: &str = "Hello!";
pub const DEFAULT_CAPTION: &str = "msgbox";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Fully validated input to the prompt flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    pub spec: PromptSpec,
    pub policy: DecisionPolicy,
    /// Present only in Yes/No mode.
    pub launch: Option<LaunchRequest>,
}

impl PromptOptions {
    /// Validate merged settings, applying defaults for anything still unset.
    ///
    /// Yes/No mode requires a non-empty executable. In acknowledge mode the executable
    /// is ignored.
    pub fn from_settings(settings: PromptSettings) -> Result<Self, AppError> {
        let mode = PromptMode::from_yes_no(settings.yes_no.unwrap_or(false));
        let timeout = Duration::from_secs(settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        let launch = match mode {
            PromptMode::YesNo => {
                let path = settings
                    .executable
                    .filter(|path| !path.trim().is_empty())
                    .ok_or(AppError::MissingExecutable)?;
                Some(LaunchRequest::new(path))
            }
            PromptMode::Acknowledge => None,
        };

        let spec = PromptSpec::new(
            settings.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            settings.caption.unwrap_or_else(|| DEFAULT_CAPTION.to_string()),
            mode,
            timeout,
        );
        let policy = DecisionPolicy::new(settings.auto_yes.unwrap_or(false));

        Ok(Self { spec, policy, launch })
    }
}
