use crate::domain::branch::{BranchName, SanitizeMode};
use crate::error::AppResult;
use crate::services::IssueTrackerService;

/// Fetches the ticket title and formats the branch name. The whole pipeline
/// behind both binaries.
pub async fn branch_for_ticket(
    tracker: &dyn IssueTrackerService,
    ticket_id: &str,
    mode: SanitizeMode,
) -> AppResult<BranchName> {
    let ticket = tracker.fetch_ticket(ticket_id).await?;
    Ok(BranchName::format(&ticket.id, &ticket.title, mode))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::ticket::Ticket;
    use crate::error::AppError;

    struct StubTracker {
        result: Result<Ticket, &'static str>,
    }

    #[async_trait]
    impl IssueTrackerService for StubTracker {
        async fn fetch_ticket(&self, _ticket_id: &str) -> AppResult<Ticket> {
            match &self.result {
                Ok(ticket) => Ok(ticket.clone()),
                Err(message) => Err(AppError::IssueTracker((*message).to_string())),
            }
        }
    }

    #[tokio::test]
    async fn formats_fetched_title() {
        let tracker = StubTracker {
            result: Ok(Ticket {
                id: "ABC-1234".to_string(),
                title: "Fix login bug".to_string(),
            }),
        };
        let branch = branch_for_ticket(&tracker, "ABC-1234", SanitizeMode::Simple)
            .await
            .unwrap();
        assert_eq!(branch.as_str(), "ABC-1234-Fix-login-bug");
    }

    #[tokio::test]
    async fn propagates_fetch_failure() {
        let tracker = StubTracker {
            result: Err("service unavailable"),
        };
        let error = branch_for_ticket(&tracker, "ABC-1", SanitizeMode::Simple)
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::IssueTracker(_)));
        assert_eq!(
            error.to_string(),
            "issue tracker error: service unavailable"
        );
    }
}
