use async_trait::async_trait;

use crate::chunk::ChunkRecord;
use crate::errors::PassageResult;

/// Partitioned chunk store.
///
/// Records are keyed by (document id, sequence number) and secondarily
/// indexed by (document id, signature prefix, sequence number) so that
/// prefix-range lookups are efficient.
#[async_trait]
pub trait IChunkStore: Send + Sync {
    /// Persist one chunk record. Overwrites an existing record with the
    /// same key.
    async fn put_chunk(&self, record: &ChunkRecord) -> PassageResult<()>;

    /// All chunks of `document_id` whose indexed signature prefix starts
    /// with `signature_prefix`.
    async fn query_by_prefix(
        &self,
        document_id: &str,
        signature_prefix: &str,
    ) -> PassageResult<Vec<ChunkRecord>>;

    /// A bounded sample of all chunks for `document_id`, in sequence
    /// order. Used as the exhaustive recall fallback.
    async fn scan_document(&self, document_id: &str, limit: usize)
        -> PassageResult<Vec<ChunkRecord>>;
}
