//! Exact cosine re-scoring of the approximate candidate set.
//!
//! This stage is exact: whatever recall the probe stage achieved, the
//! scores and ordering produced here are correct for the candidates it
//! was given.

use passage_core::chunk::ChunkRecord;
use passage_core::errors::IndexError;

/// A candidate with its exact cosine score against the query.
#[derive(Debug, Clone)]
pub struct RankedChunk {
    pub record: ChunkRecord,
    pub score: f64,
}

/// Cosine similarity, defined as 0.0 when either magnitude is zero.
///
/// Callers must pass equal-length vectors; [`rank`] enforces that.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        0.0
    } else {
        dot / (mag_a * mag_b)
    }
}

/// Score every candidate against `query` and sort best-first.
///
/// The sort is stable and no tie-break beyond input order is imposed, so
/// equal-scored candidates keep their incoming order. A candidate whose
/// stored embedding disagrees with the query dimension is a fatal
/// precondition violation, not a silent skip.
pub fn rank(
    query: &[f64],
    candidates: Vec<ChunkRecord>,
) -> Result<Vec<RankedChunk>, IndexError> {
    let mut ranked = Vec::with_capacity(candidates.len());
    for record in candidates {
        if record.embedding.len() != query.len() {
            return Err(IndexError::DimensionMismatch {
                expected: query.len(),
                actual: record.embedding.len(),
            });
        }
        let score = cosine(query, &record.embedding);
        ranked.push(RankedChunk { record, score });
    }

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seq: u32, embedding: Vec<f64>) -> ChunkRecord {
        ChunkRecord {
            document_id: "doc".to_string(),
            sequence_no: seq,
            text: format!("chunk {seq}"),
            embedding,
            signature: "0000000000000000".to_string(),
        }
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn identical_vectors_score_one() {
        let v = [0.3, -0.4, 0.5];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_scores_zero_without_dividing() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn scale_invariance() {
        let a = [0.2, 0.9, -0.1];
        let b = [0.4, 1.8, -0.2];
        assert!((cosine(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rank_orders_scores_non_increasing() {
        let query = vec![1.0, 0.0, 0.0];
        let ranked = rank(
            &query,
            vec![
                record(0, vec![0.0, 1.0, 0.0]),
                record(1, vec![1.0, 0.1, 0.0]),
                record(2, vec![1.0, 0.0, 0.0]),
                record(3, vec![-1.0, 0.0, 0.0]),
            ],
        )
        .unwrap();

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranked[0].record.sequence_no, 2);
        assert_eq!(ranked.last().unwrap().record.sequence_no, 3);
    }

    #[test]
    fn ties_keep_input_order() {
        let query = vec![1.0, 0.0];
        let ranked = rank(
            &query,
            vec![
                record(5, vec![0.0, 1.0]),
                record(9, vec![0.0, 2.0]),
                record(1, vec![0.0, 3.0]),
            ],
        )
        .unwrap();
        let seqs: Vec<u32> = ranked.iter().map(|r| r.record.sequence_no).collect();
        assert_eq!(seqs, vec![5, 9, 1]);
    }

    #[test]
    fn mismatched_candidate_dimension_is_fatal() {
        let err = rank(&[1.0, 0.0], vec![record(0, vec![1.0, 0.0, 0.0])]).unwrap_err();
        assert!(matches!(
            err,
            IndexError::DimensionMismatch { expected: 2, actual: 3 }
        ));
    }
}
