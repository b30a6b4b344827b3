/// Chunk-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("stored embedding is not decodable: {reason}")]
    InvalidEmbedding { reason: String },

    #[error("signature has {actual} bits, need at least {required} for the index prefix")]
    SignatureTooShort { required: usize, actual: usize },
}
