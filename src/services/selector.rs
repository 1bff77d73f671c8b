use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait SelectorService: Send + Sync {
    /// Presents the candidates and returns the chosen line, trimmed.
    async fn choose(&self, candidates: &[String]) -> AppResult<String>;
}
