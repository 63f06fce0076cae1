// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `netlify-deploy`.
///
/// Every request field can also come from the `[deploy]` section of the
/// settings file; flags given here win.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "netlify-deploy",
    version,
    about = "Deploy a built site with the Netlify CLI and record the published URL.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (TOML).
    ///
    /// Default: `Deploy.toml` in the current working directory. A missing
    /// default file is fine; a missing file passed explicitly is an error.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Alias used for preview deployments (also used as the deploy message).
    #[arg(long, value_name = "NAME")]
    pub alias: Option<String>,

    /// Target environment: development, staging or production.
    #[arg(long = "configuration", value_name = "ENV")]
    pub configuration: Option<String>,

    /// Name of the environment variable that holds the Netlify site id.
    #[arg(long, value_name = "VAR")]
    pub site_id_env_var: Option<String>,

    /// Directory containing the project's `netlify.toml`.
    #[arg(long, value_name = "PATH")]
    pub project_directory: Option<String>,

    /// Site template name, carried through for logging.
    #[arg(long, value_name = "NAME")]
    pub site_template: Option<String>,

    /// Directory the Netlify CLI runs in and where the result file is written.
    ///
    /// Defaults to the current working directory.
    #[arg(long, value_name = "PATH")]
    pub working_dir: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `NETLIFY_DEPLOY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve everything and print the Netlify command, but don't run it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
