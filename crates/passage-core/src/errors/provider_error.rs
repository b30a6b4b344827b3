/// External provider errors (embedding, completion).
///
/// Transient by nature; propagated to the caller without internal retry.
/// Retry policy belongs to the enclosing request handler.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("embedding provider unavailable: {reason}")]
    EmbeddingUnavailable { reason: String },

    #[error("completion provider unavailable: {reason}")]
    CompletionUnavailable { reason: String },
}
