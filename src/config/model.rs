// src/config/model.rs

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::DeployError;

/// Environments the Netlify CLI can be asked to deploy to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployEnvironment {
    Development,
    Staging,
    Production,
}

impl DeployEnvironment {
    /// Non-production deployments publish under an alias (draft URL).
    pub fn is_preview(self) -> bool {
        !matches!(self, DeployEnvironment::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeployEnvironment::Development => "development",
            DeployEnvironment::Staging => "staging",
            DeployEnvironment::Production => "production",
        }
    }
}

impl fmt::Display for DeployEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeployEnvironment {
    type Err = DeployError;

    /// Names are matched exactly; `"Production"` is not `"production"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(DeployEnvironment::Development),
            "staging" => Ok(DeployEnvironment::Staging),
            "production" => Ok(DeployEnvironment::Production),
            other => Err(DeployError::UnsupportedConfiguration(format!(
                "unknown configuration '{other}' (expected development, staging or production)"
            ))),
        }
    }
}

/// One deployment, as requested by the caller.
///
/// `environment_name` stays raw text: it is only interpreted once the
/// config file has been copied and the site id resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeployRequest {
    pub alias_name: String,
    pub environment_name: String,
    pub site_id_env_var_name: String,
    pub project_directory_path: String,
    pub site_template: String,
}

/// Fixed names the orchestrator works with.
///
/// Defaults match a stock Netlify setup driven through `npx`:
///
/// ```toml
/// [netlify]
/// runner = "npx"
/// program = "netlify"
/// auth_token_env_var = "NETLIFY_AUTH_TOKEN"
/// config_file_name = "netlify.toml"
/// result_file_name = "deploy.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploySettings {
    /// Package-runner wrapper used to launch the CLI.
    #[serde(default = "default_runner")]
    pub runner: String,

    /// CLI program handed to the runner as its first argument.
    #[serde(default = "default_program")]
    pub program: String,

    /// Variable that must hold the Netlify credential.
    #[serde(default = "default_auth_token_env_var")]
    pub auth_token_env_var: String,

    /// Config file copied from the project directory.
    #[serde(default = "default_config_file_name")]
    pub config_file_name: String,

    /// File the deployed URL is appended to.
    #[serde(default = "default_result_file_name")]
    pub result_file_name: String,
}

fn default_runner() -> String {
    "npx".to_string()
}

fn default_program() -> String {
    "netlify".to_string()
}

fn default_auth_token_env_var() -> String {
    "NETLIFY_AUTH_TOKEN".to_string()
}

fn default_config_file_name() -> String {
    "netlify.toml".to_string()
}

fn default_result_file_name() -> String {
    "deploy.txt".to_string()
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            runner: default_runner(),
            program: default_program(),
            auth_token_env_var: default_auth_token_env_var(),
            config_file_name: default_config_file_name(),
            result_file_name: default_result_file_name(),
        }
    }
}

/// `[deploy]` section: request fields that can be pinned in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestDefaults {
    pub alias: Option<String>,
    pub configuration: Option<String>,
    pub site_id_env_var: Option<String>,
    pub project_directory: Option<String>,
    pub site_template: Option<String>,
}

impl RequestDefaults {
    /// Build a request, preferring explicit values over the file's.
    ///
    /// Missing fields become empty strings; the orchestrator reports them
    /// when it checks its preconditions.
    pub fn to_request(&self, overrides: &RequestDefaults) -> DeployRequest {
        fn pick(over: &Option<String>, base: &Option<String>) -> String {
            over.clone().or_else(|| base.clone()).unwrap_or_default()
        }

        DeployRequest {
            alias_name: pick(&overrides.alias, &self.alias),
            environment_name: pick(&overrides.configuration, &self.configuration),
            site_id_env_var_name: pick(&overrides.site_id_env_var, &self.site_id_env_var),
            project_directory_path: pick(&overrides.project_directory, &self.project_directory),
            site_template: pick(&overrides.site_template, &self.site_template),
        }
    }
}

/// Settings file exactly as deserialized, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub netlify: DeploySettings,

    #[serde(default)]
    pub deploy: RequestDefaults,
}

/// Validated settings file. Construct via `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub netlify: DeploySettings,
    pub deploy: RequestDefaults,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(netlify: DeploySettings, deploy: RequestDefaults) -> Self {
        Self { netlify, deploy }
    }
}
