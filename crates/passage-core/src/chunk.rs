//! The chunk record and its store-facing embedding codec.

use serde::{Deserialize, Serialize};

use crate::errors::StorageError;

/// Unique key of a chunk: (owning document id, sequence number).
pub type ChunkKey = (String, u32);

/// One unit of an ingested document. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Owning document identifier.
    pub document_id: String,
    /// Chunk index within the document; part of the unique key.
    pub sequence_no: u32,
    /// Raw chunk text.
    pub text: String,
    /// Embedding vector, dimension fixed per deployment.
    pub embedding: Vec<f64>,
    /// Full LSH signature, one '0'/'1' per hyperplane.
    pub signature: String,
}

impl ChunkRecord {
    pub fn key(&self) -> ChunkKey {
        (self.document_id.clone(), self.sequence_no)
    }
}

/// Encode an embedding as a comma-separated decimal list.
///
/// Uses `f64`'s shortest round-trip `Display` form, so
/// `decode_embedding(&encode_embedding(v)) == v` for finite values.
pub fn encode_embedding(embedding: &[f64]) -> String {
    let mut out = String::with_capacity(embedding.len() * 8);
    for (i, value) in embedding.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&value.to_string());
    }
    out
}

/// Decode a comma-separated decimal list back into an embedding.
pub fn decode_embedding(encoded: &str) -> Result<Vec<f64>, StorageError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    encoded
        .split(',')
        .map(|field| {
            field.parse::<f64>().map_err(|e| StorageError::InvalidEmbedding {
                reason: format!("bad field {field:?}: {e}"),
            })
        })
        .collect()
}
