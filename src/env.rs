// src/env.rs

//! Environment-variable lookup.
//!
//! The orchestrator reads the credential and the site id through
//! [`EnvSource`] so tests can supply variables without touching the
//! process environment.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::errors::{DeployError, Result};

/// Read-only view of environment variables.
pub trait EnvSource: Send + Sync + Debug {
    /// Value of `name`, or `None` if unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// Implementation backed by `std::env`.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Read a variable that must be set to a non-empty value.
pub fn require_var(env: &dyn EnvSource, name: &str) -> Result<String> {
    match env.var(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DeployError::ConfigError(format!(
            "missing environment variable {name}"
        ))),
    }
}

/// Resolve the site id through one level of indirection: `var_name` names
/// the variable that holds the id.
pub fn lookup_site_id(env: &dyn EnvSource, var_name: &str) -> Result<String> {
    if var_name.trim().is_empty() {
        return Err(DeployError::ConfigError(
            "no site id variable name given".to_string(),
        ));
    }

    match env.var(var_name) {
        Some(site_id) if !site_id.is_empty() => Ok(site_id),
        _ => Err(DeployError::ConfigError(format!(
            "did not find the Netlify site id at env.{var_name}"
        ))),
    }
}
