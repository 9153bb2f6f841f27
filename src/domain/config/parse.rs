//! Pure parse for msgbox config files.

use crate::domain::AppError;

use super::settings::ConfigFile;

/// Parse config file content.
pub fn parse_config_content(content: &str) -> Result<ConfigFile, AppError> {
    let config: ConfigFile = toml::from_str(content)?;
    Ok(config)
}
