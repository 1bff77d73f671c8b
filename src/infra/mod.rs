pub mod command;
pub mod fzf;
pub mod gh;
pub mod git;
pub mod jira;
