#![allow(dead_code)]

use std::sync::Arc;

use netlify_deploy::config::DeploySettings;
use netlify_deploy::deploy::{Orchestrator, ProcessLauncher};
use netlify_deploy::env::MapEnv;
use netlify_deploy::fs::mock::MockFileSystem;

pub use netlify_deploy_test_utils::builders::DeployRequestBuilder;
pub use netlify_deploy_test_utils::init_tracing;

pub const WORK_DIR: &str = "work";
pub const PROJECT_CONFIG: &str = "apps/site/netlify.toml";
pub const COPIED_CONFIG: &str = "work/netlify.toml";
pub const RESULT_FILE: &str = "work/deploy.txt";

/// Environment with a credential and `SITE_ID` set.
pub fn full_env() -> MapEnv {
    MapEnv::new()
        .with_var("NETLIFY_AUTH_TOKEN", "token-123")
        .with_var("SITE_ID", "site-abc")
}

/// Mock filesystem containing the project's `netlify.toml`.
pub fn project_fs() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file(PROJECT_CONFIG, "[build]\npublish = \"dist\"\n");
    fs
}

pub fn orchestrator(
    fs: &MockFileSystem,
    env: MapEnv,
    launcher: impl ProcessLauncher + 'static,
) -> Orchestrator {
    Orchestrator::with_backends(
        DeploySettings::default(),
        WORK_DIR,
        Arc::new(fs.clone()),
        Arc::new(env),
        Box::new(launcher),
    )
}
