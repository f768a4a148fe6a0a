use async_trait::async_trait;

use crate::domain::ticket::Ticket;
use crate::error::AppResult;

/// One authenticated lookup against a remote tracker. A single call maps to
/// a single network round trip; failures are never retried here.
#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn fetch_ticket(&self, ticket_id: &str) -> AppResult<Ticket>;
}
