use crate::domain::issue::Selection;

pub const ISSUE_ID_PLACEHOLDER: &str = "{{ISSUE_ID}}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDraft {
    pub title: String,
    pub body: String,
}

impl PullRequestDraft {
    /// Title is `<key>: <summary>`; the body is the template with every
    /// placeholder replaced by the issue key, or empty without a template.
    pub fn for_issue(issue: &Selection, template: Option<&str>) -> Self {
        let body = template
            .map(|template| template.replace(ISSUE_ID_PLACEHOLDER, &issue.key))
            .unwrap_or_default();

        Self {
            title: format!("{}: {}", issue.key, issue.summary),
            body,
        }
    }
}
