use serde::{Deserialize, Serialize};

use super::defaults;

/// Signature index configuration.
///
/// `seed` is a compatibility contract: signatures persisted under one seed
/// are only comparable to signatures computed under the same seed. Changing
/// any of these fields invalidates previously stored signatures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Seed for the deterministic hyperplane generator.
    pub seed: u64,
    /// Embedding dimensionality D; every vector must match it.
    pub dimensions: usize,
    /// Number of hyperplanes P, i.e. signature bits.
    pub planes: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            seed: defaults::DEFAULT_LSH_SEED,
            dimensions: defaults::DEFAULT_DIMENSIONS,
            planes: defaults::DEFAULT_PLANES,
        }
    }
}
