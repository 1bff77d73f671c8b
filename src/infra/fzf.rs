use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::infra::command::{ExternalCommand, trimmed_stdout};
use crate::services::SelectorService;

const PROMPT: &str = "Select a Jira issue: ";

pub struct FzfSelector {
    program: String,
    workspace_root: PathBuf,
}

impl FzfSelector {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self::with_program("fzf", workspace_root)
    }

    pub fn with_program(program: impl Into<String>, workspace_root: PathBuf) -> Self {
        Self {
            program: program.into(),
            workspace_root,
        }
    }

    fn command(&self) -> ExternalCommand {
        ExternalCommand::new(self.program.as_str(), &self.workspace_root)
            .args(["--height", "50%", "--prompt", PROMPT])
    }
}

#[async_trait]
impl SelectorService for FzfSelector {
    async fn choose(&self, candidates: &[String]) -> AppResult<String> {
        let command = self.command();
        let output = command
            .capture_with_input(&candidates.join("\n"))
            .await
            .map_err(|err| {
                AppError::Selection(format!("error running {}: {err}", self.program))
            })?;

        if !output.status.success() {
            return Err(AppError::Selection(format!(
                "error running {}: exited with {}",
                self.program, output.status
            )));
        }

        Ok(trimmed_stdout(&output))
    }
}
