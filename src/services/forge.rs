use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::domain::pull_request::PullRequestDraft;
use crate::error::AppResult;

#[async_trait]
pub trait ForgeService: Send + Sync {
    /// Whether an open pull request lists `base` as its base branch.
    async fn has_open_request(&self, base: &BranchName) -> AppResult<bool>;
    async fn create_request(&self, draft: &PullRequestDraft) -> AppResult<()>;
}
