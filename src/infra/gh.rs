use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::domain::pull_request::PullRequestDraft;
use crate::error::{AppError, AppResult};
use crate::infra::command::{ExternalCommand, trimmed_stdout};
use crate::services::ForgeService;

/// GitHub through the `gh` CLI.
pub struct GhCli {
    workspace_root: PathBuf,
}

impl GhCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    fn list_command(&self, base: &BranchName) -> ExternalCommand {
        ExternalCommand::new("gh", &self.workspace_root).args([
            "pr",
            "list",
            "--base",
            base.as_str(),
        ])
    }

    fn create_command(&self, draft: &PullRequestDraft) -> ExternalCommand {
        ExternalCommand::new("gh", &self.workspace_root).args([
            "pr",
            "create",
            "-d",
            "-t",
            draft.title.as_str(),
            "-b",
            draft.body.as_str(),
        ])
    }
}

#[async_trait]
impl ForgeService for GhCli {
    async fn has_open_request(&self, base: &BranchName) -> AppResult<bool> {
        let command = self.list_command(base);
        let output = command
            .capture()
            .await
            .map_err(|err| AppError::Forge(format!("failed to run `{command}`: {err}")))?;

        if !output.status.success() {
            return Err(AppError::Forge(
                command.failure_message(output.status, &output.stderr),
            ));
        }

        Ok(!trimmed_stdout(&output).is_empty())
    }

    async fn create_request(&self, draft: &PullRequestDraft) -> AppResult<()> {
        let command = self.create_command(draft);
        let status = command
            .passthrough()
            .await
            .map_err(|err| AppError::Forge(format!("failed to run `{command}`: {err}")))?;

        if !status.success() {
            return Err(AppError::Forge(command.failure_message(status, &[])));
        }
        Ok(())
    }
}
