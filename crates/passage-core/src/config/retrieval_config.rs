use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval coordinator configuration.
///
/// The two thresholds are independent: `early_stop_candidates` stops the
/// prefix ladder from widening further, `fallback_min_candidates` decides
/// whether the bounded full scan runs after the ladder is done.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Prefix lengths probed per query, most selective first. Entries must
    /// be in `1..=INDEX_PREFIX_LEN` and fit the signature bit length; the
    /// retrieval coordinator rejects configs that violate this.
    pub prefix_ladder: Vec<usize>,
    /// Cap on single-bit probe variants generated per prefix length.
    pub max_probes_per_length: usize,
    /// Candidate count at which the ladder stops widening.
    pub early_stop_candidates: usize,
    /// Candidate count below which the bounded full scan engages.
    pub fallback_min_candidates: usize,
    /// Row cap for the fallback document scan.
    pub scan_limit: usize,
    /// Ranked chunks handed to context assembly.
    pub top_k: usize,
    /// Per-probe store query timeout in milliseconds.
    pub probe_timeout_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            prefix_ladder: defaults::DEFAULT_PREFIX_LADDER.to_vec(),
            max_probes_per_length: defaults::DEFAULT_MAX_PROBES_PER_LENGTH,
            early_stop_candidates: defaults::DEFAULT_EARLY_STOP_CANDIDATES,
            fallback_min_candidates: defaults::DEFAULT_FALLBACK_MIN_CANDIDATES,
            scan_limit: defaults::DEFAULT_SCAN_LIMIT,
            top_k: defaults::DEFAULT_TOP_K,
            probe_timeout_ms: defaults::DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}
