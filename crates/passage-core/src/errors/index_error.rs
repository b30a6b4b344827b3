/// Signature index and probe expansion errors.
///
/// Both variants are caller bugs: the call must not proceed, and no
/// partial result is produced.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("embedding dimension mismatch: index expects {expected}, vector has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid probe parameters: prefix length {prefix_len} for signature of {signature_len} bits")]
    InvalidProbeParameters {
        prefix_len: usize,
        signature_len: usize,
    },

    #[error("invalid prefix ladder entry {entry}: usable prefix is 1..={max} bits")]
    InvalidPrefixLadder { entry: usize, max: usize },
}
