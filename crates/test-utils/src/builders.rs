#![allow(dead_code)]

use netlify_deploy::config::DeployRequest;

/// Builder for `DeployRequest` to simplify test setup.
///
/// Starts from a valid staging request: alias `pr-42`, site id read from
/// `SITE_ID`, project in `apps/site`.
pub struct DeployRequestBuilder {
    request: DeployRequest,
}

impl DeployRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: DeployRequest {
                alias_name: "pr-42".to_string(),
                environment_name: "staging".to_string(),
                site_id_env_var_name: "SITE_ID".to_string(),
                project_directory_path: "apps/site".to_string(),
                site_template: "default".to_string(),
            },
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.request.alias_name = alias.to_string();
        self
    }

    pub fn environment(mut self, environment: &str) -> Self {
        self.request.environment_name = environment.to_string();
        self
    }

    pub fn site_id_env_var(mut self, name: &str) -> Self {
        self.request.site_id_env_var_name = name.to_string();
        self
    }

    pub fn project_directory(mut self, path: &str) -> Self {
        self.request.project_directory_path = path.to_string();
        self
    }

    pub fn site_template(mut self, template: &str) -> Self {
        self.request.site_template = template.to_string();
        self
    }

    pub fn build(self) -> DeployRequest {
        self.request
    }
}

impl Default for DeployRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
