//! # passage-storage
//!
//! SQLite implementation of [`passage_core::traits::IChunkStore`].
//!
//! Layout follows the record contract: primary key
//! `(document_id, sequence_no)`, secondary index over
//! `(document_id, signature_prefix, sequence_no)` for prefix-range
//! candidate lookups. Embeddings are stored in the reversible
//! decimal-list text encoding from `passage_core::chunk`.

mod store;

pub use store::SqliteChunkStore;

use passage_core::errors::StorageError;

pub(crate) fn to_storage_err(e: impl std::fmt::Display) -> StorageError {
    StorageError::Sqlite { message: e.to_string() }
}
