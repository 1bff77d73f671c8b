use std::fmt;
use std::io;

use thiserror::Error;

/// The orchestrator stage that was running when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Branch,
    Commit,
    Upstream,
    PullRequest,
}

impl WorkflowStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Branch => "branch",
            WorkflowStage::Commit => "commit",
            WorkflowStage::Upstream => "upstream",
            WorkflowStage::PullRequest => "pull request",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error("{0}")]
    NoIssues(String),
    #[error("selection error: {0}")]
    Selection(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("forge error: {0}")]
    Forge(String),
    #[error("template error: {0}")]
    Template(String),
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: WorkflowStage,
        #[source]
        source: Box<AppError>,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn in_stage(self, stage: WorkflowStage) -> Self {
        AppError::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Stage tag of a failure raised by the orchestrator, if any.
    pub fn stage(&self) -> Option<WorkflowStage> {
        match self {
            AppError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_errors_name_the_stage_and_cause() {
        let error = AppError::VersionControl("git push exited with 1".to_string())
            .in_stage(WorkflowStage::Upstream);
        assert_eq!(error.stage(), Some(WorkflowStage::Upstream));
        assert_eq!(
            error.to_string(),
            "upstream stage failed: version control error: git push exited with 1"
        );
    }

    #[test]
    fn untagged_errors_have_no_stage() {
        let error = AppError::Configuration("missing token".to_string());
        assert_eq!(error.stage(), None);
    }
}
