use async_trait::async_trait;

use crate::domain::issue::Issue;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    pub board: String,
    pub status: String,
}

impl IssueQuery {
    pub fn new(board: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            status: status.into(),
        }
    }

    pub fn to_jql(&self) -> String {
        format!("project={} AND status={}", self.board, self.status)
    }
}

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    /// Issues matching the query, in the tracker's response order.
    async fn search(&self, query: &IssueQuery) -> AppResult<Vec<Issue>>;
}
