use crate::context::AppContext;
use crate::domain::issue::Selection;
use crate::error::{AppError, AppResult};
use crate::services::IssueQuery;
use crate::workflow::pick::{Candidates, choose_issue};
use crate::workflow::start::{StartWorkOutcome, start_work};

pub struct StartCommandOutcome {
    pub issue: Selection,
    pub work: StartWorkOutcome,
}

pub async fn run(ctx: &AppContext) -> AppResult<StartCommandOutcome> {
    let config = &ctx.config;
    let query = IssueQuery::new(config.board.as_str(), config.status.as_str());

    tracing::info!(jql = %query.to_jql(), "fetching Jira issues");
    let issues = ctx.issue_tracker.search(&query).await?;
    if issues.is_empty() {
        return Err(AppError::NoIssues(format!(
            "No Jira issues with {} status found.",
            config.status
        )));
    }

    let candidates = Candidates::tagged(&issues, &config.component);
    if candidates.is_empty() {
        return Err(AppError::NoIssues(format!(
            "No Jira issues with component '{}' found among {} issue(s).",
            config.component,
            issues.len()
        )));
    }

    let issue = choose_issue(ctx.selector.as_ref(), &candidates).await?;
    if issue.is_empty() {
        return Err(AppError::Selection(
            "No Jira issue selected. Manual entry is required.".to_string(),
        ));
    }

    let work = start_work(ctx, &issue).await?;
    Ok(StartCommandOutcome { issue, work })
}
