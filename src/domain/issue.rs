/// A tracker issue as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub components: Vec<String>,
}

impl Issue {
    pub fn new(
        key: impl Into<String>,
        summary: impl Into<String>,
        components: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            components,
        }
    }

    /// Exact, case-sensitive component match.
    pub fn has_component(&self, component: &str) -> bool {
        self.components.iter().any(|name| name == component)
    }

    /// Display string handed to the selector and used to map the choice back.
    pub fn selection_key(&self) -> String {
        format!("{} - {}", self.key, self.summary)
    }
}

/// The issue the user picked, or an empty pair when nothing resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub key: String,
    pub summary: String,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() || self.summary.is_empty()
    }
}

impl From<&Issue> for Selection {
    fn from(issue: &Issue) -> Self {
        Self {
            key: issue.key.clone(),
            summary: issue.summary.clone(),
        }
    }
}
