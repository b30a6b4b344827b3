//! Collaborator traits consumed by the retrieval core.
//!
//! The embedding provider, completion provider, and partitioned chunk
//! store are external systems; the core depends only on these contracts.

mod completion;
mod embedding;
mod store;

pub use completion::ICompletionProvider;
pub use embedding::IEmbeddingProvider;
pub use store::IChunkStore;
