pub mod forge;
pub mod issue_tracker;
pub mod selector;
pub mod version_control;

pub use forge::ForgeService;
pub use issue_tracker::{IssueQuery, IssueTrackerService};
pub use selector::SelectorService;
pub use version_control::VersionControlService;
