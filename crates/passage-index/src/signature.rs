//! Random-hyperplane signature index.
//!
//! Planes are generated once from a seeded LCG and never mutated; every
//! signature computed over the life of the process must use the same
//! planes, or previously persisted signatures stop being comparable.

use passage_core::config::IndexConfig;
use passage_core::errors::IndexError;
use tracing::info;

/// Immutable family of random hyperplanes plus the signature function.
///
/// Build once at startup and share via `Arc`; there is deliberately no way
/// to mutate or re-seed an existing index.
#[derive(Debug)]
pub struct SignatureIndex {
    dimensions: usize,
    planes: Vec<Vec<f64>>,
}

impl SignatureIndex {
    /// Generate the plane family for `config`.
    ///
    /// The generator is a fixed 32-bit linear congruential recurrence
    /// (`state = state * 1664525 + 1013904223 mod 2^32`), each draw mapped
    /// to [-0.5, 0.5). The recurrence is a persistence contract: the same
    /// seed must reproduce bit-identical planes across versions and hosts,
    /// so do not change it.
    pub fn build(config: &IndexConfig) -> Self {
        let mut rng = Lcg32::new(config.seed);
        let planes = (0..config.planes)
            .map(|_| (0..config.dimensions).map(|_| rng.next_unit() - 0.5).collect())
            .collect();

        info!(
            planes = config.planes,
            dimensions = config.dimensions,
            seed = config.seed,
            "initialized deterministic LSH planes"
        );

        Self { dimensions: config.dimensions, planes }
    }

    /// The configured embedding dimension D.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The signature bit length P.
    pub fn signature_bits(&self) -> usize {
        self.planes.len()
    }

    /// Compute the LSH signature of `vector`: one char per plane, '1' iff
    /// the dot product with that plane is non-negative.
    ///
    /// Pure function of (planes, vector). A wrong-length vector is a fatal
    /// precondition violation, never a silent skip.
    pub fn compute_signature(&self, vector: &[f64]) -> Result<String, IndexError> {
        if vector.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }

        Ok(self
            .planes
            .iter()
            .map(|plane| if dot(vector, plane) >= 0.0 { '1' } else { '0' })
            .collect())
    }
}

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// 32-bit linear congruential generator (Numerical Recipes constants).
struct Lcg32 {
    state: u64,
}

impl Lcg32 {
    const MODULUS: u64 = 1 << 32;

    fn new(seed: u64) -> Self {
        Self { state: seed % Self::MODULUS }
    }

    /// Next draw in [0, 1).
    fn next_unit(&mut self) -> f64 {
        self.state = (self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223))
            % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }
}
