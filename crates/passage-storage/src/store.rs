//! SqliteChunkStore — owns the connection, creates the schema on open.

use std::path::Path;

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use passage_core::chunk::{decode_embedding, encode_embedding, ChunkRecord};
use passage_core::constants::INDEX_PREFIX_LEN;
use passage_core::errors::{PassageResult, StorageError};
use passage_core::traits::IChunkStore;

use crate::to_storage_err;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS chunks (
    document_id      TEXT    NOT NULL,
    sequence_no      INTEGER NOT NULL,
    text             TEXT    NOT NULL,
    embedding        TEXT    NOT NULL,
    signature        TEXT    NOT NULL,
    signature_prefix TEXT    NOT NULL,
    PRIMARY KEY (document_id, sequence_no)
);
CREATE INDEX IF NOT EXISTS idx_chunks_signature_prefix
    ON chunks (document_id, signature_prefix, sequence_no);
";

/// SQLite-backed chunk store.
///
/// Queries run synchronously behind a tokio mutex; individual operations
/// are short (indexed point/range reads), so the lock is held briefly.
pub struct SqliteChunkStore {
    conn: Mutex<Connection>,
}

impl SqliteChunkStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> PassageResult<Self> {
        let conn = Connection::open(path).map_err(to_storage_err)?;
        Self::initialize(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> PassageResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_storage_err)?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> PassageResult<Self> {
        conn.execute_batch(SCHEMA).map_err(to_storage_err)?;
        Ok(Self { conn: Mutex::new(conn) })
    }
}

#[async_trait]
impl IChunkStore for SqliteChunkStore {
    async fn put_chunk(&self, record: &ChunkRecord) -> PassageResult<()> {
        if record.signature.len() < INDEX_PREFIX_LEN {
            return Err(StorageError::SignatureTooShort {
                required: INDEX_PREFIX_LEN,
                actual: record.signature.len(),
            }
            .into());
        }
        let prefix = &record.signature[..INDEX_PREFIX_LEN];

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO chunks
                 (document_id, sequence_no, text, embedding, signature, signature_prefix)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.document_id,
                record.sequence_no,
                record.text,
                encode_embedding(&record.embedding),
                record.signature,
                prefix,
            ],
        )
        .map_err(to_storage_err)?;

        debug!(
            document_id = %record.document_id,
            sequence_no = record.sequence_no,
            prefix,
            "stored chunk"
        );
        Ok(())
    }

    async fn query_by_prefix(
        &self,
        document_id: &str,
        signature_prefix: &str,
    ) -> PassageResult<Vec<ChunkRecord>> {
        // Half-open lexicographic range [prefix, bump(prefix)) covers
        // exactly the stored prefixes that start with `signature_prefix`,
        // and lets SQLite walk the secondary index.
        let Some(upper) = prefix_upper_bound(signature_prefix) else {
            return self.scan_document(document_id, usize::MAX).await;
        };

        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT document_id, sequence_no, text, embedding, signature
                 FROM chunks
                 WHERE document_id = ?1
                   AND signature_prefix >= ?2 AND signature_prefix < ?3
                 ORDER BY sequence_no",
            )
            .map_err(to_storage_err)?;

        let rows = stmt
            .query_map(params![document_id, signature_prefix, upper], row_to_raw)
            .map_err(to_storage_err)?;
        collect_records(rows)
    }

    async fn scan_document(
        &self,
        document_id: &str,
        limit: usize,
    ) -> PassageResult<Vec<ChunkRecord>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT document_id, sequence_no, text, embedding, signature
                 FROM chunks
                 WHERE document_id = ?1
                 ORDER BY sequence_no
                 LIMIT ?2",
            )
            .map_err(to_storage_err)?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt
            .query_map(params![document_id, limit], row_to_raw)
            .map_err(to_storage_err)?;
        collect_records(rows)
    }
}

type RawRow = (String, u32, String, String, String);

fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn collect_records(
    rows: impl Iterator<Item = rusqlite::Result<RawRow>>,
) -> PassageResult<Vec<ChunkRecord>> {
    let mut records = Vec::new();
    for row in rows {
        let (document_id, sequence_no, text, embedding, signature) =
            row.map_err(to_storage_err)?;
        records.push(ChunkRecord {
            document_id,
            sequence_no,
            text,
            embedding: decode_embedding(&embedding)?,
            signature,
        });
    }
    Ok(records)
}

/// Smallest string lexicographically greater than every string starting
/// with `prefix`. `None` for the empty prefix (which matches everything).
fn prefix_upper_bound(prefix: &str) -> Option<String> {
    let last = prefix.chars().next_back()?;
    let mut upper: String = prefix[..prefix.len() - last.len_utf8()].to_string();
    // Signature prefixes are '0'/'1'; bumping the final char is safe.
    upper.push(char::from_u32(last as u32 + 1)?);
    Some(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_bound_bumps_last_char() {
        assert_eq!(prefix_upper_bound("1101").as_deref(), Some("1102"));
        assert_eq!(prefix_upper_bound("0").as_deref(), Some("1"));
        assert_eq!(prefix_upper_bound(""), None);
    }
}
