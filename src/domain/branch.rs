use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<issue key>/<slug of title>`. Total over any input.
    pub fn for_issue(issue_key: &str, title: &str) -> Self {
        Self(format!("{}/{}", issue_key, slugify(title)))
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spaces become hyphens, anything outside `[a-zA-Z0-9-]` is dropped, then lowercased.
fn slugify(input: &str) -> String {
    input
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}
