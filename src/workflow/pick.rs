use std::collections::HashMap;

use crate::domain::issue::{Issue, Selection};
use crate::error::AppResult;
use crate::services::SelectorService;

/// Selector lines for the issues carrying a component, plus the way back
/// from a chosen line to its issue.
#[derive(Debug, Default)]
pub struct Candidates {
    pub lines: Vec<String>,
    by_line: HashMap<String, Issue>,
}

impl Candidates {
    /// Keeps issues tagged with `component`, preserving order. Identical
    /// display lines overwrite each other in the lookup; the last one wins.
    pub fn tagged(issues: &[Issue], component: &str) -> Self {
        let mut candidates = Self::default();
        for issue in issues.iter().filter(|issue| issue.has_component(component)) {
            let line = issue.selection_key();
            if let Some(previous) = candidates.by_line.insert(line.clone(), issue.clone()) {
                tracing::warn!(
                    line = %line,
                    replaced = %previous.key,
                    "duplicate selection line; keeping the later issue"
                );
            }
            candidates.lines.push(line);
        }
        candidates
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Unknown lines resolve to an empty selection.
    pub fn resolve(&self, line: &str) -> Selection {
        self.by_line
            .get(line)
            .map(Selection::from)
            .unwrap_or_default()
    }
}

pub async fn choose_issue(
    selector: &dyn SelectorService,
    candidates: &Candidates,
) -> AppResult<Selection> {
    let line = selector.choose(&candidates.lines).await?;
    tracing::debug!(line = %line, "selector returned");
    Ok(candidates.resolve(&line))
}
