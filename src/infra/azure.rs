use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;

use crate::config::AzureConfig;
use crate::domain::ticket::Ticket;
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

const API_VERSION: &str = "7.1";
const TITLE_FIELD: &str = "System.Title";

pub struct AzureDevOpsClient {
    http: Client,
    organization_url: Option<String>,
    token: Option<String>,
}

impl AzureDevOpsClient {
    pub fn new(config: AzureConfig) -> Self {
        Self {
            http: Client::new(),
            organization_url: config.organization_url,
            token: config.token,
        }
    }

    fn api_details(&self) -> AppResult<(&str, &str)> {
        let organization_url = self.organization_url.as_deref().ok_or_else(|| {
            AppError::Configuration("Azure DevOps organization URL not configured".to_string())
        })?;
        let token = self.token.as_deref().ok_or_else(|| {
            AppError::Configuration("Azure DevOps PAT token not configured".to_string())
        })?;
        Ok((organization_url, token))
    }

    // Azure PATs use basic auth with an empty user name.
    fn auth_header(token: &str) -> String {
        let encoded = BASE64_STANDARD.encode(format!(":{token}"));
        format!("Basic {encoded}")
    }

    fn work_item_endpoint(organization_url: &str, id: &str) -> String {
        format!(
            "{}/_apis/wit/workitems/{id}?fields={TITLE_FIELD}&api-version={API_VERSION}",
            organization_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl IssueTrackerService for AzureDevOpsClient {
    async fn fetch_ticket(&self, ticket_id: &str) -> AppResult<Ticket> {
        let id = ticket_id.trim();
        if id.is_empty() || !id.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(AppError::IssueTracker(format!(
                "work item ID must be numeric, got '{ticket_id}'"
            )));
        }

        let (organization_url, token) = self.api_details()?;

        let response = self
            .http
            .get(Self::work_item_endpoint(organization_url, id))
            .header(AUTHORIZATION, Self::auth_header(token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to call Azure DevOps: {err}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::TicketNotFound(id.to_string()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::IssueTracker(format!(
                "Azure DevOps responded with {status}: {body}"
            )));
        }

        let payload: WorkItemResponse = response.json().await.map_err(|err| {
            AppError::IssueTracker(format!("failed to parse Azure DevOps response: {err}"))
        })?;

        Ok(Ticket {
            id: payload.id.to_string(),
            title: payload.fields.title,
        })
    }
}

#[derive(Deserialize)]
struct WorkItemResponse {
    id: u64,
    fields: WorkItemFields,
}

#[derive(Deserialize)]
struct WorkItemFields {
    #[serde(rename = "System.Title")]
    title: String,
}
