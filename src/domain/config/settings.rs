//! Prompt settings as read from a config file or the command line.

use serde::Deserialize;

/// Top-level layout of a msgbox config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Prompt settings.
    #[serde(default)]
    pub prompt: PromptSettings,
}

/// Partially specified prompt settings.
///
/// Every field is optional so that a config file and the command line can each supply
/// a subset; [`PromptSettings::or`] layers them and defaults fill the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptSettings {
    /// Text shown in the prompt body.
    pub message: Option<String>,
    /// Title of the prompt.
    pub caption: Option<String>,
    /// Seconds before the prompt times out.
    pub timeout_secs: Option<u64>,
    /// Show Yes/No buttons instead of OK.
    pub yes_no: Option<bool>,
    /// Treat a timeout as Yes.
    pub auto_yes: Option<bool>,
    /// Executable to start when the answer is Yes.
    pub executable: Option<String>,
}

impl PromptSettings {
    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: PromptSettings) -> PromptSettings {
        PromptSettings {
            message: self.message.or(fallback.message),
            caption: self.caption.or(fallback.caption),
            timeout_secs: self.timeout_secs.or(fallback.timeout_secs),
            yes_no: self.yes_no.or(fallback.yes_no),
            auto_yes: self.auto_yes.or(fallback.auto_yes),
            executable: self.executable.or(fallback.executable),
        }
    }
}
