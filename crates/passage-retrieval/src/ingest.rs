//! Document ingestion: embed, sign, persist.

use std::sync::Arc;

use tracing::info;

use passage_core::chunk::ChunkRecord;
use passage_core::errors::PassageResult;
use passage_core::traits::{IChunkStore, IEmbeddingProvider};
use passage_index::SignatureIndex;

/// Writes pre-chunked document text into the store, one record per chunk.
///
/// The signature index enforces the embedding dimension here, so every
/// record that reaches the store is comparable with query signatures.
pub struct IngestPipeline {
    embedder: Arc<dyn IEmbeddingProvider>,
    index: Arc<SignatureIndex>,
    store: Arc<dyn IChunkStore>,
}

impl IngestPipeline {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        index: Arc<SignatureIndex>,
        store: Arc<dyn IChunkStore>,
    ) -> Self {
        Self { embedder, index, store }
    }

    /// Ingest one batch of chunks for `document_id`, numbering them from
    /// `start_seq`. Returns the number of chunks stored.
    ///
    /// Fails fast on the first provider, index, or store error; chunks
    /// stored before the failure remain in place, and the batch can be
    /// re-run from the failing sequence number (puts are upserts).
    pub async fn ingest_batch(
        &self,
        document_id: &str,
        chunks: &[String],
        start_seq: u32,
    ) -> PassageResult<usize> {
        info!(
            document_id,
            chunks = chunks.len(),
            start_seq,
            "ingesting chunk batch"
        );

        for (offset, text) in chunks.iter().enumerate() {
            let sequence_no = start_seq + offset as u32;
            let embedding = self.embedder.embed(text).await?;
            let signature = self.index.compute_signature(&embedding)?;

            self.store
                .put_chunk(&ChunkRecord {
                    document_id: document_id.to_string(),
                    sequence_no,
                    text: text.clone(),
                    embedding,
                    signature,
                })
                .await?;
        }

        info!(document_id, stored = chunks.len(), "chunk batch stored");
        Ok(chunks.len())
    }
}
