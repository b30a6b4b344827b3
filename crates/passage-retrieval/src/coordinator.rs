//! RetrievalCoordinator: multi-resolution probing over the chunk store.
//!
//! Probes the longest (most selective) signature prefixes first and
//! widens to shorter ones only while the candidate set stays below the
//! early-stop threshold; a bounded full-document scan backstops recall
//! when the ladder is exhausted. Probe queries within one prefix length
//! run concurrently; the ladder itself is sequential so the early-stop
//! decision sees each length's fully merged results.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use passage_core::chunk::{ChunkKey, ChunkRecord};
use passage_core::config::RetrievalConfig;
use passage_core::constants::INDEX_PREFIX_LEN;
use passage_core::errors::{IndexError, PassageResult};
use passage_core::traits::IChunkStore;
use passage_index::{expand_probes, SignatureIndex};

use crate::ranking::{rank, RankedChunk};

/// Orchestrates signature probing, dedup, fallback, and exact ranking.
pub struct RetrievalCoordinator {
    store: Arc<dyn IChunkStore>,
    index: Arc<SignatureIndex>,
    config: RetrievalConfig,
}

impl std::fmt::Debug for RetrievalCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalCoordinator")
            .field("index", &self.index)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RetrievalCoordinator {
    /// Build a coordinator, validating the prefix ladder up front.
    ///
    /// Every ladder entry must fit both the stored index prefix
    /// ([`INDEX_PREFIX_LEN`]) and the signature bit length; an entry
    /// outside that range could never match a stored bucket and would
    /// silently degrade its rung to zero hits.
    pub fn new(
        store: Arc<dyn IChunkStore>,
        index: Arc<SignatureIndex>,
        config: RetrievalConfig,
    ) -> PassageResult<Self> {
        let max = INDEX_PREFIX_LEN.min(index.signature_bits());
        if let Some(&entry) = config.prefix_ladder.iter().find(|&&e| e == 0 || e > max) {
            return Err(IndexError::InvalidPrefixLadder { entry, max }.into());
        }
        Ok(Self { store, index, config })
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Retrieve and rank candidates for `query_vector` within one document.
    ///
    /// An empty result is the normal "no relevant material" outcome, never
    /// an error. Individual probe failures and timeouts contribute zero
    /// candidates; only precondition violations (wrong query dimension,
    /// malformed probe parameters) fail the whole call.
    ///
    /// Dropping the returned future aborts all in-flight probe queries.
    pub async fn retrieve(
        &self,
        document_id: &str,
        query_vector: &[f64],
    ) -> PassageResult<Vec<RankedChunk>> {
        let signature = self.index.compute_signature(query_vector)?;
        debug!(document_id, signature = %signature, "computed query signature");

        let probe_timeout = Duration::from_millis(self.config.probe_timeout_ms);
        let mut candidates: BTreeMap<ChunkKey, ChunkRecord> = BTreeMap::new();

        for &prefix_len in &self.config.prefix_ladder {
            let probe_count = prefix_len.min(self.config.max_probes_per_length);
            let probes = expand_probes(&signature, prefix_len, probe_count)?;

            let mut queries = JoinSet::new();
            for prefix in probes {
                let store = Arc::clone(&self.store);
                let document_id = document_id.to_string();
                queries.spawn(async move {
                    probe_one(store.as_ref(), &document_id, &prefix, probe_timeout).await
                });
            }

            // Dedup by key is idempotent, so completion order doesn't matter.
            while let Some(joined) = queries.join_next().await {
                for record in joined.unwrap_or_default() {
                    candidates.entry(record.key()).or_insert(record);
                }
            }

            if candidates.len() >= self.config.early_stop_candidates {
                debug!(
                    prefix_len,
                    candidates = candidates.len(),
                    "early stop: enough candidates at this resolution"
                );
                break;
            }
        }

        info!(
            document_id,
            candidates = candidates.len(),
            "probe ladder complete"
        );

        if candidates.len() < self.config.fallback_min_candidates {
            debug!(
                candidates = candidates.len(),
                limit = self.config.scan_limit,
                "recall below fallback threshold, scanning document"
            );
            let scan = tokio::time::timeout(
                probe_timeout,
                self.store.scan_document(document_id, self.config.scan_limit),
            )
            .await;
            match scan {
                Ok(Ok(records)) => {
                    for record in records {
                        candidates.entry(record.key()).or_insert(record);
                    }
                }
                Ok(Err(e)) => warn!(document_id, error = %e, "fallback scan failed"),
                Err(_) => warn!(document_id, "fallback scan timed out"),
            }
        }

        if candidates.is_empty() {
            info!(document_id, "no relevant material");
            return Ok(Vec::new());
        }

        let ranked = rank(query_vector, candidates.into_values().collect())?;
        Ok(ranked)
    }
}

/// One probe query: a failure or timeout yields zero candidates so that a
/// single bad bucket never aborts the retrieval.
async fn probe_one(
    store: &dyn IChunkStore,
    document_id: &str,
    prefix: &str,
    probe_timeout: Duration,
) -> Vec<ChunkRecord> {
    match tokio::time::timeout(probe_timeout, store.query_by_prefix(document_id, prefix)).await
    {
        Ok(Ok(records)) => records,
        Ok(Err(e)) => {
            warn!(document_id, prefix, error = %e, "probe query failed");
            Vec::new()
        }
        Err(_) => {
            warn!(document_id, prefix, "probe query timed out");
            Vec::new()
        }
    }
}
