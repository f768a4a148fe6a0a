use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;

use crate::config::JiraConfig;
use crate::domain::ticket::Ticket;
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    server_url: Option<String>,
    token: Option<String>,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Self {
        Self {
            http: Client::new(),
            server_url: config.server_url,
            token: config.token,
        }
    }

    fn api_details(&self) -> AppResult<(&str, &str)> {
        let server_url = self
            .server_url
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Jira server URL not configured".to_string()))?;
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Jira API token not configured".to_string()))?;
        Ok((server_url, token))
    }

    fn issue_endpoint(server_url: &str, key: &str) -> String {
        format!(
            "{}/rest/api/2/issue/{key}?fields=summary",
            server_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn fetch_ticket(&self, ticket_id: &str) -> AppResult<Ticket> {
        let key = ticket_id.trim();
        if key.is_empty() {
            return Err(AppError::IssueTracker(
                "ticket key must not be empty".to_string(),
            ));
        }

        let (server_url, token) = self.api_details()?;

        let response = self
            .http
            .get(Self::issue_endpoint(server_url, key))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to call Jira: {err}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::TicketNotFound(key.to_string()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::IssueTracker(format!(
                "Jira responded with {status}: {body}"
            )));
        }

        let payload: JiraIssueResponse = response.json().await.map_err(|err| {
            AppError::IssueTracker(format!("failed to parse Jira response: {err}"))
        })?;

        Ok(Ticket {
            id: payload.key,
            title: payload.fields.summary,
        })
    }
}

#[derive(Deserialize)]
struct JiraIssueResponse {
    key: String,
    fields: JiraIssueFields,
}

#[derive(Deserialize)]
struct JiraIssueFields {
    summary: String,
}
