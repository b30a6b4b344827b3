//! # passage-retrieval
//!
//! The retrieval pipeline over the partitioned chunk store:
//! multi-resolution signature probing with bounded fallback
//! ([`coordinator`]), exact cosine re-scoring ([`ranking`]), document
//! ingestion ([`ingest`]), and question answering ([`answer`]).

pub mod answer;
pub mod coordinator;
pub mod ingest;
pub mod ranking;

pub use answer::AnswerEngine;
pub use coordinator::RetrievalCoordinator;
pub use ingest::IngestPipeline;
pub use ranking::{cosine, rank, RankedChunk};
