use async_trait::async_trait;

use crate::errors::PassageResult;
use crate::models::Completion;

/// Text-generation provider for the answer stage.
#[async_trait]
pub trait ICompletionProvider: Send + Sync {
    /// Answer `question` given the retrieved `context` (may be empty).
    ///
    /// Fails with `ProviderError::CompletionUnavailable` on provider error.
    async fn complete(&self, question: &str, context: &str) -> PassageResult<Completion>;
}
