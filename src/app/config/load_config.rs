//! Prompt configuration loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config::{self, PromptOptions, PromptSettings};
use crate::domain::AppError;

/// Load prompt settings from a config file, if one was given.
pub fn load_settings(config_path: Option<&Path>) -> Result<PromptSettings, AppError> {
    let Some(path) = config_path else {
        return Ok(PromptSettings::default());
    };

    if !path.is_file() {
        return Err(AppError::ConfigFileNotFound(path.display().to_string()));
    }

    debug!(path = %path.display(), "loading config file");
    let content = fs::read_to_string(path)?;
    Ok(config::parse_config_content(&content)?.prompt)
}

/// Layer command-line settings over the config file and validate the result.
pub fn load_options(
    overrides: PromptSettings,
    config_path: Option<&Path>,
) -> Result<PromptOptions, AppError> {
    let file_settings = load_settings(config_path)?;
    PromptOptions::from_settings(overrides.or(file_settings))
}
