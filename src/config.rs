use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const TOKEN_ENV: &str = "JIRA_API_TOKEN";
pub const DOMAIN_ENV: &str = "JIRA_DOMAIN";

pub const DEFAULT_BOARD: &str = "UTPR";
/// Multi-word statuses must stay quoted inside JQL.
pub const DEFAULT_STATUS: &str = "'To Do'";
pub const DEFAULT_COMPONENT: &str = "Software Engineering";
pub const DEFAULT_TEMPLATE: &str = ".github/gojira_pr_template.md";
pub const DEFAULT_REMOTE: &str = "origin";

/// Run parameters that can be overridden from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub board: Option<String>,
    pub status: Option<String>,
    pub component: Option<String>,
    pub template: Option<PathBuf>,
    pub remote: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jira_token: String,
    pub jira_domain: String,
    pub board: String,
    pub status: String,
    pub component: String,
    pub template_path: PathBuf,
    pub remote: String,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path, overrides: RunOverrides) -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok(), workspace_hint, overrides)
    }

    pub fn from_lookup<F>(
        lookup: F,
        workspace_hint: &Path,
        overrides: RunOverrides,
    ) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jira_token = required(&lookup, TOKEN_ENV, "Please provide a Jira API token")?;
        let jira_domain = required(&lookup, DOMAIN_ENV, "Please provide a Jira domain")?;

        let template = overrides
            .template
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE));
        let template_path = if template.is_absolute() {
            template
        } else {
            workspace_hint.join(template)
        };

        Ok(Self {
            jira_token,
            jira_domain,
            board: overrides.board.unwrap_or_else(|| DEFAULT_BOARD.to_string()),
            status: overrides.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            component: overrides
                .component
                .unwrap_or_else(|| DEFAULT_COMPONENT.to_string()),
            template_path,
            remote: overrides.remote.unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            workspace_root: workspace_hint.to_path_buf(),
        })
    }
}

fn required<F>(lookup: &F, key: &str, message: &str) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Configuration(format!("{message} ({key})")))
}
