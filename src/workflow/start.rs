use std::fs;
use std::io;
use std::path::Path;

use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::domain::issue::Selection;
use crate::domain::pull_request::PullRequestDraft;
use crate::error::{AppError, AppResult, WorkflowStage};

/// Placeholder commit meant to be squashed away before merging.
pub const SENTINEL_COMMIT_MESSAGE: &str = "[skip ci] REMOVE ME. EMPTY COMMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchAction {
    Created,
    Switched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestOutcome {
    Created(PullRequestDraft),
    AlreadyOpen,
}

pub struct StartWorkOutcome {
    pub branch: BranchName,
    pub branch_action: BranchAction,
    /// `None` when the branch already had its own commits and nothing was published.
    pub pull_request: Option<PullRequestOutcome>,
}

pub async fn start_work(ctx: &AppContext, issue: &Selection) -> AppResult<StartWorkOutcome> {
    let branch = BranchName::for_issue(&issue.key, &issue.summary);

    let (parent, branch_action) = ensure_branch(ctx, &branch)
        .await
        .map_err(|err| err.in_stage(WorkflowStage::Branch))?;

    let fresh = ensure_commit(ctx, &parent)
        .await
        .map_err(|err| err.in_stage(WorkflowStage::Commit))?;

    // A branch that already carries commits is left alone, even if it was
    // never pushed or never got a pull request.
    if !fresh {
        tracing::info!(
            branch = %branch,
            "branch already has commits; skipping push and pull request"
        );
        return Ok(StartWorkOutcome {
            branch,
            branch_action,
            pull_request: None,
        });
    }

    ensure_upstream(ctx, &branch)
        .await
        .map_err(|err| err.in_stage(WorkflowStage::Upstream))?;

    let pull_request = ensure_pull_request(ctx, &branch, issue)
        .await
        .map_err(|err| err.in_stage(WorkflowStage::PullRequest))?;

    Ok(StartWorkOutcome {
        branch,
        branch_action,
        pull_request: Some(pull_request),
    })
}

/// Returns the commit `HEAD` pointed at before switching.
async fn ensure_branch(
    ctx: &AppContext,
    branch: &BranchName,
) -> AppResult<(String, BranchAction)> {
    tracing::info!(branch = %branch, "preparing branch");
    let vcs = &ctx.version_control;

    let parent = vcs.resolve_head().await?;

    if vcs.branch_exists(branch).await? {
        vcs.switch_to(branch).await?;
        tracing::info!(branch = %branch, "branch switched");
        Ok((parent, BranchAction::Switched))
    } else {
        vcs.create_and_switch(branch).await?;
        tracing::info!(branch = %branch, "branch created");
        Ok((parent, BranchAction::Created))
    }
}

/// True when the sentinel commit was created.
async fn ensure_commit(ctx: &AppContext, parent: &str) -> AppResult<bool> {
    let current = ctx.version_control.resolve_head().await?;
    if current != parent {
        return Ok(false);
    }

    ctx.version_control
        .commit_empty(SENTINEL_COMMIT_MESSAGE)
        .await?;
    tracing::info!(commit_message = SENTINEL_COMMIT_MESSAGE, "empty commit created");
    Ok(true)
}

async fn ensure_upstream(ctx: &AppContext, branch: &BranchName) -> AppResult<()> {
    let remote = ctx.config.remote.as_str();
    tracing::info!(branch = %branch, remote, "setting remote upstream");
    ctx.version_control.push_upstream(remote, branch).await?;
    tracing::info!("remote upstream set: {remote}/{branch}");
    Ok(())
}

async fn ensure_pull_request(
    ctx: &AppContext,
    branch: &BranchName,
    issue: &Selection,
) -> AppResult<PullRequestOutcome> {
    tracing::info!(issue = %issue.key, "checking for pull request");
    if ctx.forge.has_open_request(branch).await? {
        tracing::info!(branch = %branch, "pull request already open");
        return Ok(PullRequestOutcome::AlreadyOpen);
    }

    let template = load_template(&ctx.config.template_path)?;
    let draft = PullRequestDraft::for_issue(issue, template.as_deref());

    tracing::info!(issue = %issue.key, "creating pull request");
    ctx.forge.create_request(&draft).await?;
    tracing::info!(title = %draft.title, "pull request created");
    Ok(PullRequestOutcome::Created(draft))
}

/// A missing template yields `None`; any other read failure is fatal.
fn load_template(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no pull request template");
            Ok(None)
        }
        Err(err) => Err(AppError::Template(format!(
            "failed to read {}: {err}",
            path.display()
        ))),
    }
}
