use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Commit hash `HEAD` currently resolves to.
    async fn resolve_head(&self) -> AppResult<String>;
    /// Whether any ref resolves under `branch`.
    async fn branch_exists(&self, branch: &BranchName) -> AppResult<bool>;
    async fn create_and_switch(&self, branch: &BranchName) -> AppResult<()>;
    async fn switch_to(&self, branch: &BranchName) -> AppResult<()>;
    /// Empty commit that bypasses hooks.
    async fn commit_empty(&self, message: &str) -> AppResult<()>;
    async fn push_upstream(&self, remote: &str, branch: &BranchName) -> AppResult<()>;
}
