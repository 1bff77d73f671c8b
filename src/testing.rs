//! In-memory stand-ins for the external tools, recording every call.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::domain::issue::Issue;
use crate::domain::pull_request::PullRequestDraft;
use crate::error::{AppError, AppResult};
use crate::services::{
    ForgeService, IssueQuery, IssueTrackerService, SelectorService, VersionControlService,
};

pub fn test_config(workspace_root: PathBuf) -> AppConfig {
    AppConfig {
        jira_token: "token".to_string(),
        jira_domain: "jira.example.com".to_string(),
        board: "UTPR".to_string(),
        status: "'To Do'".to_string(),
        component: "Software Engineering".to_string(),
        template_path: workspace_root.join(".github/gojira_pr_template.md"),
        remote: "origin".to_string(),
        workspace_root,
    }
}

pub struct Fakes {
    pub tracker: Arc<FakeIssueTracker>,
    pub selector: Arc<FakeSelector>,
    pub vcs: Arc<FakeVersionControl>,
    pub forge: Arc<FakeForge>,
}

impl Fakes {
    pub fn context(&self, config: AppConfig) -> AppContext {
        AppContext::new(
            config,
            self.tracker.clone(),
            self.selector.clone(),
            self.vcs.clone(),
            self.forge.clone(),
        )
    }
}

#[derive(Default)]
pub struct FakeIssueTracker {
    issues: Vec<Issue>,
    fail: bool,
    pub queries: Mutex<Vec<IssueQuery>>,
}

impl FakeIssueTracker {
    pub fn returning(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl IssueTrackerService for FakeIssueTracker {
    async fn search(&self, query: &IssueQuery) -> AppResult<Vec<Issue>> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(AppError::IssueTracker("connection refused".to_string()));
        }
        Ok(self.issues.clone())
    }
}

pub enum SelectorReply {
    Line(String),
    Abort,
}

pub struct FakeSelector {
    reply: SelectorReply,
    pub candidates: Mutex<Vec<Vec<String>>>,
}

impl FakeSelector {
    pub fn picking(line: impl Into<String>) -> Self {
        Self {
            reply: SelectorReply::Line(line.into()),
            candidates: Mutex::new(Vec::new()),
        }
    }

    pub fn aborting() -> Self {
        Self {
            reply: SelectorReply::Abort,
            candidates: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SelectorService for FakeSelector {
    async fn choose(&self, candidates: &[String]) -> AppResult<String> {
        self.candidates.lock().unwrap().push(candidates.to_vec());
        match &self.reply {
            SelectorReply::Line(line) => Ok(line.trim().to_string()),
            SelectorReply::Abort => Err(AppError::Selection(
                "error running fzf: exited with exit status: 130".to_string(),
            )),
        }
    }
}

struct RepoState {
    refs: HashMap<String, String>,
    current: String,
    next_commit: usize,
}

/// A repository reduced to branch pointers. Operations named in
/// `failing` return an error instead of mutating state.
pub struct FakeVersionControl {
    state: Mutex<RepoState>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl FakeVersionControl {
    pub fn at(head: &str) -> Self {
        let mut refs = HashMap::new();
        refs.insert("main".to_string(), head.to_string());
        Self {
            state: Mutex::new(RepoState {
                refs,
                current: "main".to_string(),
                next_commit: 1,
            }),
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_branch(self, name: &str, commit: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .refs
            .insert(name.to_string(), commit.to_string());
        self
    }

    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Checks out `name` without recording a call.
    pub fn return_to(&self, name: &str) {
        self.state.lock().unwrap().current = name.to_string();
    }

    pub fn current_branch(&self) -> String {
        self.state.lock().unwrap().current.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, call: String) -> AppResult<()> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.contains(operation) {
            return Err(AppError::VersionControl(format!("`{call}` exited with 1")));
        }
        Ok(())
    }
}

#[async_trait]
impl VersionControlService for FakeVersionControl {
    async fn resolve_head(&self) -> AppResult<String> {
        self.record("resolve_head", "resolve_head".to_string())?;
        let state = self.state.lock().unwrap();
        Ok(state.refs[&state.current].clone())
    }

    async fn branch_exists(&self, branch: &BranchName) -> AppResult<bool> {
        self.record("branch_exists", format!("branch_exists {branch}"))?;
        Ok(self.state.lock().unwrap().refs.contains_key(branch.as_str()))
    }

    async fn create_and_switch(&self, branch: &BranchName) -> AppResult<()> {
        self.record("create_and_switch", format!("create_and_switch {branch}"))?;
        let mut state = self.state.lock().unwrap();
        if state.refs.contains_key(branch.as_str()) {
            return Err(AppError::VersionControl(format!(
                "a branch named '{branch}' already exists"
            )));
        }
        let head = state.refs[&state.current].clone();
        state.refs.insert(branch.as_str().to_string(), head);
        state.current = branch.as_str().to_string();
        Ok(())
    }

    async fn switch_to(&self, branch: &BranchName) -> AppResult<()> {
        self.record("switch_to", format!("switch_to {branch}"))?;
        let mut state = self.state.lock().unwrap();
        if !state.refs.contains_key(branch.as_str()) {
            return Err(AppError::VersionControl(format!("invalid reference: {branch}")));
        }
        state.current = branch.as_str().to_string();
        Ok(())
    }

    async fn commit_empty(&self, message: &str) -> AppResult<()> {
        self.record("commit_empty", format!("commit_empty {message}"))?;
        let mut state = self.state.lock().unwrap();
        let commit = format!("commit-{}", state.next_commit);
        state.next_commit += 1;
        let current = state.current.clone();
        state.refs.insert(current, commit);
        Ok(())
    }

    async fn push_upstream(&self, remote: &str, branch: &BranchName) -> AppResult<()> {
        self.record("push_upstream", format!("push_upstream {remote} {branch}"))
    }
}

#[derive(Default)]
pub struct FakeForge {
    open_bases: HashSet<String>,
    failing: HashSet<&'static str>,
    pub listed: Mutex<Vec<String>>,
    created: Mutex<Vec<PullRequestDraft>>,
}

impl FakeForge {
    pub fn with_open_request(mut self, base: &str) -> Self {
        self.open_bases.insert(base.to_string());
        self
    }

    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn created(&self) -> Vec<PullRequestDraft> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForgeService for FakeForge {
    async fn has_open_request(&self, base: &BranchName) -> AppResult<bool> {
        self.listed.lock().unwrap().push(base.as_str().to_string());
        if self.failing.contains("has_open_request") {
            return Err(AppError::Forge("`gh pr list` exited with 1".to_string()));
        }
        Ok(self.open_bases.contains(base.as_str()))
    }

    async fn create_request(&self, draft: &PullRequestDraft) -> AppResult<()> {
        if self.failing.contains("create_request") {
            return Err(AppError::Forge("`gh pr create` exited with 1".to_string()));
        }
        self.created.lock().unwrap().push(draft.clone());
        Ok(())
    }
}
