use std::env;

/// Connection settings for a Jira server, read once at startup.
///
/// Missing values are kept as `None` and reported by the client when the
/// first request is made, so an unconfigured tool still prints its usage
/// banner without touching the network.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub server_url: Option<String>,
    pub token: Option<String>,
}

impl JiraConfig {
    pub fn from_env() -> Self {
        Self {
            server_url: env_value("JIRA_SERVER_URL"),
            token: env_value("JIRA_PAT_TOKEN"),
        }
    }
}

/// Connection settings for an Azure DevOps organization.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub organization_url: Option<String>,
    pub token: Option<String>,
}

impl AzureConfig {
    pub fn from_env() -> Self {
        Self {
            organization_url: env_value("AZURE_DEVOPS_ORGANIZATION_URL"),
            token: env_value("AZURE_PAT_TOKEN"),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
