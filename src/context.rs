use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ForgeService, IssueTrackerService, SelectorService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub selector: Arc<dyn SelectorService>,
    pub version_control: Arc<dyn VersionControlService>,
    pub forge: Arc<dyn ForgeService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        issue_tracker: Arc<dyn IssueTrackerService>,
        selector: Arc<dyn SelectorService>,
        version_control: Arc<dyn VersionControlService>,
        forge: Arc<dyn ForgeService>,
    ) -> Self {
        Self {
            config,
            issue_tracker,
            selector,
            version_control,
            forge,
        }
    }
}
