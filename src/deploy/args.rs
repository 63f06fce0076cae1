// src/deploy/args.rs

use crate::config::DeployEnvironment;
use crate::errors::Result;

/// Build the Netlify CLI arguments for one deployment.
///
/// Preview environments deploy under `alias` (reused as the deploy message);
/// production deploys with `--prod` and no alias. An unknown
/// `environment_name` yields `UnsupportedConfiguration`.
pub fn build_netlify_args(environment_name: &str, alias: &str, site_id: &str) -> Result<Vec<String>> {
    let environment: DeployEnvironment = environment_name.parse()?;

    let mut args = vec!["deploy".to_string(), "--build".to_string()];
    if environment.is_preview() {
        args.push(format!("--alias={alias}"));
        args.push(format!("--message={alias}"));
    } else {
        args.push("--prod".to_string());
    }
    args.push(format!("--site={site_id}"));

    Ok(args)
}
