// src/config/mod.rs

//! Deploy request model and the optional `Deploy.toml` settings file.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_settings};
pub use model::{
    ConfigFile, DeployEnvironment, DeployRequest, DeploySettings, RawConfigFile, RequestDefaults,
};
