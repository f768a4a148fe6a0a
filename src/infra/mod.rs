pub mod azure;
pub mod jira;

pub use azure::AzureDevOpsClient;
pub use jira::JiraClient;
