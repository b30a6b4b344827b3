//! Cross-crate value types for the answer path.

use serde::{Deserialize, Serialize};

/// Token accounting reported by the completion provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

/// A completion provider response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

/// User-facing outcome of a document question.
///
/// `NoRelevantMaterial` is a normal result, not an error: the retrieval
/// stages found nothing for this document, and callers surface that to
/// the user directly.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    Answered(Completion),
    NoRelevantMaterial,
}
