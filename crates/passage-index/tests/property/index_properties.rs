//! Property tests: signature shape and determinism, probe set bounds.

use proptest::prelude::*;

use passage_core::config::IndexConfig;
use passage_index::{expand_probes, SignatureIndex};

fn hamming(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

proptest! {
    #[test]
    fn prop_signature_has_exactly_p_binary_chars(
        seed in 0u64..10_000,
        vector in prop::collection::vec(-10.0f64..10.0, 16)
    ) {
        let index = SignatureIndex::build(&IndexConfig { seed, dimensions: 16, planes: 16 });
        let sig = index.compute_signature(&vector).unwrap();
        prop_assert_eq!(sig.len(), 16);
        prop_assert!(sig.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn prop_signature_is_pure_in_the_vector(
        vector in prop::collection::vec(-1.0f64..1.0, 16)
    ) {
        let index = SignatureIndex::build(&IndexConfig { seed: 42, dimensions: 16, planes: 16 });
        prop_assert_eq!(
            index.compute_signature(&vector).unwrap(),
            index.compute_signature(&vector).unwrap()
        );
    }

    #[test]
    fn prop_rebuilt_index_agrees_across_instances(
        seed in 0u64..10_000,
        vector in prop::collection::vec(-1.0f64..1.0, 8)
    ) {
        let config = IndexConfig { seed, dimensions: 8, planes: 12 };
        let a = SignatureIndex::build(&config);
        let b = SignatureIndex::build(&config);
        prop_assert_eq!(
            a.compute_signature(&vector).unwrap(),
            b.compute_signature(&vector).unwrap()
        );
    }

    #[test]
    fn prop_wrong_dimension_always_fails(
        len in 0usize..32
    ) {
        prop_assume!(len != 16);
        let index = SignatureIndex::build(&IndexConfig { seed: 42, dimensions: 16, planes: 8 });
        prop_assert!(index.compute_signature(&vec![0.5; len]).is_err());
    }

    #[test]
    fn prop_probe_set_respects_bounds(
        signature in "[01]{16}",
        prefix_len in 1usize..=16,
        probe_count in 0usize..=12
    ) {
        let probes = expand_probes(&signature, prefix_len, probe_count).unwrap();
        let base = &signature[..prefix_len];

        prop_assert!(!probes.is_empty());
        prop_assert!(probes.len() <= probe_count + 1);
        for probe in &probes {
            prop_assert_eq!(probe.len(), prefix_len);
            prop_assert!(hamming(probe, base) <= 1);
        }
        prop_assert!(probes.contains(base));
    }

    #[test]
    fn prop_probe_expansion_is_deterministic(
        signature in "[01]{12}",
        prefix_len in 1usize..=12,
        probe_count in 0usize..=8
    ) {
        prop_assert_eq!(
            expand_probes(&signature, prefix_len, probe_count).unwrap(),
            expand_probes(&signature, prefix_len, probe_count).unwrap()
        );
    }
}
