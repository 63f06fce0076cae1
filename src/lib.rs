// src/lib.rs

pub mod cli;
pub mod config;
pub mod deploy;
pub mod env;
pub mod errors;
pub mod fs;
pub mod logging;

use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, DeployRequest, RequestDefaults, load_settings};
use crate::deploy::{Invocation, Orchestrator};
use crate::errors::Result;

/// High-level entry point used by `main.rs`.
///
/// Loads settings, merges them with the CLI flags into a `DeployRequest`
/// and runs (or, with `--dry-run`, plans) the deployment. Returns whether
/// the deployment succeeded.
pub async fn run(args: CliArgs) -> Result<bool> {
    let cfg = load_settings(args.config.as_deref().map(std::path::Path::new))?;
    let request = request_from_args(&cfg, &args);

    let working_dir = match args.working_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("resolving current directory")?,
    };

    let mut orchestrator = Orchestrator::new(cfg.netlify.clone(), working_dir);

    if args.dry_run {
        let invocation = orchestrator.plan(&request)?;
        print_dry_run(&request, &orchestrator, &invocation);
        return Ok(true);
    }

    let outcome = orchestrator.execute(&request).await?;
    info!(success = outcome.success, "deployment finished");
    Ok(outcome.success)
}

/// Merge CLI flags over the `[deploy]` section of the settings file.
pub fn request_from_args(cfg: &ConfigFile, args: &CliArgs) -> DeployRequest {
    let overrides = RequestDefaults {
        alias: args.alias.clone(),
        configuration: args.configuration.clone(),
        site_id_env_var: args.site_id_env_var.clone(),
        project_directory: args.project_directory.clone(),
        site_template: args.site_template.clone(),
    };
    cfg.deploy.to_request(&overrides)
}

fn print_dry_run(request: &DeployRequest, orchestrator: &Orchestrator, invocation: &Invocation) {
    let settings = orchestrator.settings();

    println!("netlify-deploy dry-run");
    println!("  alias = {}", request.alias_name);
    println!("  configuration = {}", request.environment_name);
    println!("  site_template = {}", request.site_template);
    println!();
    println!(
        "would copy: {}/{} -> {}",
        request.project_directory_path,
        settings.config_file_name,
        orchestrator.config_copy_path().display()
    );
    println!("would run:  {}", invocation.command_line());
    println!("  in: {}", invocation.working_dir.display());
    println!(
        "would append deployed url to: {}",
        orchestrator.result_file_path().display()
    );

    debug!("dry-run complete (no execution)");
}
