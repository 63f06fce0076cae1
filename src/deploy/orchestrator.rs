// src/deploy/orchestrator.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{DeployRequest, DeploySettings};
use crate::deploy::args::build_netlify_args;
use crate::deploy::output::extract_deployed_url;
use crate::deploy::runner::{Invocation, ProcessLauncher, TokioProcessLauncher};
use crate::env::{self, EnvSource, ProcessEnv};
use crate::errors::{DeployError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// What one Netlify run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeployResult {
    pub exit_code: i32,
    /// Marker line with colours removed; empty if the CLI printed none.
    pub deployed_url: String,
}

/// Outcome reported to the caller of [`Orchestrator::execute`].
///
/// `success == false` means the CLI ran and reported failure. Anything that
/// kept it from running at all is an `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployOutcome {
    pub success: bool,
}

/// Runs one Netlify deployment per [`execute`](Orchestrator::execute) call.
///
/// Holds no state between calls. Two orchestrators sharing a working
/// directory race on the config and result files.
pub struct Orchestrator {
    settings: DeploySettings,
    working_dir: PathBuf,
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvSource>,
    launcher: Box<dyn ProcessLauncher>,
}

impl Orchestrator {
    /// Orchestrator using the real filesystem, process environment and
    /// process launcher.
    pub fn new(settings: DeploySettings, working_dir: impl Into<PathBuf>) -> Self {
        Self::with_backends(
            settings,
            working_dir,
            Arc::new(RealFileSystem),
            Arc::new(ProcessEnv),
            Box::new(TokioProcessLauncher::new()),
        )
    }

    pub fn with_backends(
        settings: DeploySettings,
        working_dir: impl Into<PathBuf>,
        fs: Arc<dyn FileSystem>,
        env: Arc<dyn EnvSource>,
        launcher: Box<dyn ProcessLauncher>,
    ) -> Self {
        Self {
            settings,
            working_dir: working_dir.into(),
            fs,
            env,
            launcher,
        }
    }

    pub fn settings(&self) -> &DeploySettings {
        &self.settings
    }

    /// Where the project's config file is copied to.
    pub fn config_copy_path(&self) -> PathBuf {
        self.working_dir.join(&self.settings.config_file_name)
    }

    /// File the deployed URL is appended to.
    pub fn result_file_path(&self) -> PathBuf {
        self.working_dir.join(&self.settings.result_file_name)
    }

    /// Deploy `request`.
    ///
    /// Order matters: the project directory and credential are checked
    /// before anything touches the disk; the config file is copied before
    /// the site id is resolved and the environment name interpreted. The
    /// result file is only written when the CLI exits with 0.
    pub async fn execute(&mut self, request: &DeployRequest) -> Result<DeployOutcome> {
        info!(
            alias = %request.alias_name,
            environment = %request.environment_name,
            site_template = %request.site_template,
            "starting deployment"
        );

        self.check_preconditions(request)?;
        self.copy_config_file(request)?;

        let invocation = self.build_invocation(request)?;
        let result = self.run_netlify(invocation).await?;

        if result.exit_code != 0 {
            warn!(exit_code = result.exit_code, "netlify exited with failure");
            return Ok(DeployOutcome { success: false });
        }

        let result_path = self.result_file_path();
        info!(path = %result_path.display(), url = %result.deployed_url, "writing deployed url");
        self.fs
            .append(&result_path, result.deployed_url.as_bytes())?;

        Ok(DeployOutcome { success: true })
    }

    /// Everything `execute` would do before launching, minus side effects.
    ///
    /// Used by `--dry-run`.
    pub fn plan(&self, request: &DeployRequest) -> Result<Invocation> {
        self.check_preconditions(request)?;

        let source = self.config_source_path(request);
        if !self.fs.exists(&source) {
            warn!(path = %source.display(), "config file to copy does not exist");
        }

        self.build_invocation(request)
    }

    fn check_preconditions(&self, request: &DeployRequest) -> Result<()> {
        if request.project_directory_path.is_empty() {
            return Err(DeployError::ConfigError(
                "missing option project_directory".to_string(),
            ));
        }

        env::require_var(self.env.as_ref(), &self.settings.auth_token_env_var)?;
        debug!(var = %self.settings.auth_token_env_var, "auth token present");
        Ok(())
    }

    fn config_source_path(&self, request: &DeployRequest) -> PathBuf {
        Path::new(&request.project_directory_path).join(&self.settings.config_file_name)
    }

    fn copy_config_file(&self, request: &DeployRequest) -> Result<()> {
        let from = self.config_source_path(request);
        let to = self.config_copy_path();
        info!(from = %from.display(), to = %to.display(), "copying {}", self.settings.config_file_name);
        self.fs.copy(&from, &to)?;
        Ok(())
    }

    fn build_invocation(&self, request: &DeployRequest) -> Result<Invocation> {
        let site_id = env::lookup_site_id(self.env.as_ref(), &request.site_id_env_var_name)?;
        let netlify_args =
            build_netlify_args(&request.environment_name, &request.alias_name, &site_id)?;

        let mut args = Vec::with_capacity(netlify_args.len() + 1);
        args.push(self.settings.program.clone());
        args.extend(netlify_args);

        Ok(Invocation {
            program: self.settings.runner.clone(),
            args,
            working_dir: self.working_dir.clone(),
        })
    }

    async fn run_netlify(&mut self, invocation: Invocation) -> Result<DeployResult> {
        info!(program = %self.settings.program, "executing netlify");
        let output = self.launcher.launch(invocation).await?;

        let text = String::from_utf8_lossy(&output.stdout);
        let deployed_url = extract_deployed_url(&text);
        if deployed_url.is_empty() {
            debug!("no deployed url found in netlify output");
        }

        Ok(DeployResult {
            exit_code: output.exit_code,
            deployed_url,
        })
    }
}
