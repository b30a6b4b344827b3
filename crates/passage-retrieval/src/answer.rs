//! Answer stage: embed the question, retrieve, assemble context, complete.

use std::sync::Arc;

use tracing::{debug, info};

use passage_core::constants::CONTEXT_SEPARATOR;
use passage_core::errors::PassageResult;
use passage_core::models::QueryOutcome;
use passage_core::traits::{ICompletionProvider, IEmbeddingProvider};

use crate::coordinator::RetrievalCoordinator;

/// Turns a document question into an answer via retrieval plus completion.
pub struct AnswerEngine {
    coordinator: RetrievalCoordinator,
    embedder: Arc<dyn IEmbeddingProvider>,
    completion: Arc<dyn ICompletionProvider>,
}

impl AnswerEngine {
    pub fn new(
        coordinator: RetrievalCoordinator,
        embedder: Arc<dyn IEmbeddingProvider>,
        completion: Arc<dyn ICompletionProvider>,
    ) -> Self {
        Self { coordinator, embedder, completion }
    }

    /// Answer `question` from the chunks of `document_id`.
    ///
    /// Returns `QueryOutcome::NoRelevantMaterial` when retrieval comes up
    /// empty; provider failures propagate as errors without retry.
    pub async fn ask(&self, document_id: &str, question: &str) -> PassageResult<QueryOutcome> {
        let query_vector = self.embedder.embed(question).await?;
        let ranked = self.coordinator.retrieve(document_id, &query_vector).await?;

        if ranked.is_empty() {
            return Ok(QueryOutcome::NoRelevantMaterial);
        }

        let top_k = self.coordinator.config().top_k;
        let context = ranked
            .iter()
            .take(top_k)
            .map(|r| r.record.text.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR);

        debug!(
            document_id,
            context_chunks = ranked.len().min(top_k),
            context_bytes = context.len(),
            "assembled completion context"
        );

        let completion = self.completion.complete(question, &context).await?;
        info!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            total_tokens = completion.usage.total_tokens,
            "completion returned"
        );

        Ok(QueryOutcome::Answered(completion))
    }
}
