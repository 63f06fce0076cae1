// src/config/validate.rs

use std::path::Path;

use crate::config::model::{ConfigFile, DeploySettings, RawConfigFile};
use crate::errors::{DeployError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DeployError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_settings(&raw.netlify)?;
        Ok(ConfigFile::new_unchecked(raw.netlify, raw.deploy))
    }
}

fn validate_settings(settings: &DeploySettings) -> Result<()> {
    ensure_non_empty("runner", &settings.runner)?;
    ensure_non_empty("program", &settings.program)?;
    ensure_non_empty("auth_token_env_var", &settings.auth_token_env_var)?;
    ensure_bare_file_name("config_file_name", &settings.config_file_name)?;
    ensure_bare_file_name("result_file_name", &settings.result_file_name)?;

    if settings.config_file_name == settings.result_file_name {
        return Err(DeployError::ConfigError(format!(
            "[netlify].config_file_name and [netlify].result_file_name must differ (both '{}')",
            settings.config_file_name
        )));
    }

    Ok(())
}

fn ensure_non_empty(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeployError::ConfigError(format!(
            "[netlify].{key} must not be empty"
        )));
    }
    Ok(())
}

/// Both files live directly in the working directory, so a name with path
/// components would escape it.
fn ensure_bare_file_name(key: &str, value: &str) -> Result<()> {
    ensure_non_empty(key, value)?;

    let is_bare = Path::new(value)
        .file_name()
        .is_some_and(|name| name == value);
    if !is_bare {
        return Err(DeployError::ConfigError(format!(
            "[netlify].{key} must be a plain file name (got '{value}')"
        )));
    }
    Ok(())
}
