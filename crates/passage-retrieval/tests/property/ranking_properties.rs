//! Property tests: cosine bounds and ranking order invariants.

use proptest::prelude::*;

use passage_core::chunk::ChunkRecord;
use passage_retrieval::{cosine, rank};

fn record(seq: u32, embedding: Vec<f64>) -> ChunkRecord {
    ChunkRecord {
        document_id: "doc".to_string(),
        sequence_no: seq,
        text: String::new(),
        embedding,
        signature: "0000000000000000".to_string(),
    }
}

proptest! {
    #[test]
    fn prop_cosine_is_bounded_and_symmetric(
        a in prop::collection::vec(-100.0f64..100.0, 8),
        b in prop::collection::vec(-100.0f64..100.0, 8)
    ) {
        let ab = cosine(&a, &b);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&ab));
        prop_assert!((ab - cosine(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn prop_rank_scores_are_non_increasing(
        embeddings in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 6), 0..20),
        query in prop::collection::vec(-10.0f64..10.0, 6)
    ) {
        let candidates = embeddings
            .into_iter()
            .enumerate()
            .map(|(i, e)| record(i as u32, e))
            .collect();
        let ranked = rank(&query, candidates).unwrap();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prop_rank_preserves_the_candidate_set(
        embeddings in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 4), 0..12)
    ) {
        let query = vec![1.0, -0.5, 0.25, 0.0];
        let count = embeddings.len();
        let candidates: Vec<ChunkRecord> = embeddings
            .into_iter()
            .enumerate()
            .map(|(i, e)| record(i as u32, e))
            .collect();

        let ranked = rank(&query, candidates).unwrap();
        prop_assert_eq!(ranked.len(), count);

        let mut seqs: Vec<u32> = ranked.iter().map(|r| r.record.sequence_no).collect();
        seqs.sort_unstable();
        let expected: Vec<u32> = (0..count as u32).collect();
        prop_assert_eq!(seqs, expected);
    }
}
