//! # passage-index
//!
//! Deterministic random-hyperplane LSH: signature computation and
//! multi-probe prefix expansion. Pure functions over immutable plane
//! state; no I/O.

pub mod probe;
pub mod signature;

pub use probe::expand_probes;
pub use signature::SignatureIndex;
