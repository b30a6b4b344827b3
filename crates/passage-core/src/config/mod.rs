//! Configuration for the index and retrieval subsystems.
//!
//! Every recall/latency tuning knob lives here rather than as an inline
//! literal; defaults come from the named constants in [`defaults`].

mod index_config;
mod retrieval_config;

pub use index_config::IndexConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

/// Named default values for all configuration fields.
pub mod defaults {
    /// Seed for the deterministic hyperplane generator.
    pub const DEFAULT_LSH_SEED: u64 = 42;
    /// Embedding dimensionality.
    pub const DEFAULT_DIMENSIONS: usize = 3072;
    /// Number of hyperplanes, i.e. signature bits.
    pub const DEFAULT_PLANES: usize = 16;

    /// Prefix lengths probed per query, most selective first.
    pub const DEFAULT_PREFIX_LADDER: [usize; 4] = [12, 10, 8, 6];
    /// Cap on single-bit probe variants generated per prefix length.
    pub const DEFAULT_MAX_PROBES_PER_LENGTH: usize = 8;
    /// Candidate count at which the ladder stops widening.
    pub const DEFAULT_EARLY_STOP_CANDIDATES: usize = 5;
    /// Candidate count below which the bounded full scan engages.
    pub const DEFAULT_FALLBACK_MIN_CANDIDATES: usize = 5;
    /// Row cap for the fallback document scan.
    pub const DEFAULT_SCAN_LIMIT: usize = 64;
    /// Ranked chunks handed to context assembly.
    pub const DEFAULT_TOP_K: usize = 6;
    /// Per-probe store query timeout.
    pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;
}

/// Top-level configuration, TOML-loadable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PassageConfig {
    pub index: IndexConfig,
    pub retrieval: RetrievalConfig,
}

impl PassageConfig {
    /// Parse a configuration from TOML text. Missing sections and fields
    /// fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
