use async_trait::async_trait;

use crate::errors::PassageResult;

/// Embedding generation provider.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    ///
    /// Fails with `ProviderError::EmbeddingUnavailable` on provider error.
    /// The returned dimension must match the index's configured dimension.
    async fn embed(&self, text: &str) -> PassageResult<Vec<f64>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
