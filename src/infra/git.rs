use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::infra::command::{ExternalCommand, trimmed_stdout};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    fn git<I, S>(&self, args: I) -> ExternalCommand
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExternalCommand::new("git", &self.workspace_root).args(args)
    }

    /// Runs git and fails on a non-zero exit, returning trimmed stdout.
    async fn run(&self, command: ExternalCommand) -> AppResult<String> {
        let output = command
            .capture()
            .await
            .map_err(|err| {
                AppError::VersionControl(format!("failed to run `{command}`: {err}"))
            })?;

        if !output.status.success() {
            return Err(AppError::VersionControl(
                command.failure_message(output.status, &output.stderr),
            ));
        }

        Ok(trimmed_stdout(&output))
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn resolve_head(&self) -> AppResult<String> {
        self.run(self.git(["rev-parse", "--verify", "HEAD"])).await
    }

    async fn branch_exists(&self, branch: &BranchName) -> AppResult<bool> {
        let command = self.git(["rev-parse", "--verify", "--quiet", branch.as_str()]);
        let output = command
            .capture()
            .await
            .map_err(|err| {
                AppError::VersionControl(format!("failed to run `{command}`: {err}"))
            })?;
        Ok(output.status.success())
    }

    async fn create_and_switch(&self, branch: &BranchName) -> AppResult<()> {
        self.run(self.git(["switch", "-c", branch.as_str()])).await?;
        Ok(())
    }

    async fn switch_to(&self, branch: &BranchName) -> AppResult<()> {
        self.run(self.git(["switch", branch.as_str()])).await?;
        Ok(())
    }

    async fn commit_empty(&self, message: &str) -> AppResult<()> {
        self.run(self.git(["commit", "--allow-empty", "-m", message, "--no-verify"]))
            .await?;
        Ok(())
    }

    async fn push_upstream(&self, remote: &str, branch: &BranchName) -> AppResult<()> {
        self.run(self.git(["push", "-u", remote, branch.as_str()])).await?;
        Ok(())
    }
}
