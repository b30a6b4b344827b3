/// Bit length of the signature prefix written into the store's secondary
/// index key. Records are bucketed by this prefix at put time, so every
/// entry in the retrieval prefix ladder must be <= this value.
pub const INDEX_PREFIX_LEN: usize = 12;

/// Separator between chunk texts when assembling the completion context.
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";
