// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    /// A required input is missing: the project directory, the auth token,
    /// or the variable holding the site id.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The requested environment is not one we know how to deploy to.
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DeployError>;
