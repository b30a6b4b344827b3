//! # passage-core
//!
//! Foundation crate for the passage document-retrieval system.
//! Defines the chunk record, errors, config, constants, and the
//! collaborator traits (embedding, completion, chunk store).
//! Every other crate in the workspace depends on this.

pub mod chunk;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use chunk::{ChunkKey, ChunkRecord};
pub use config::PassageConfig;
pub use errors::{PassageError, PassageResult};
pub use models::{Completion, QueryOutcome, TokenUsage};
