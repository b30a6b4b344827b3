//! Multi-probe prefix expansion.
//!
//! Widens a signature prefix into a bounded set of nearby bucket keys:
//! the exact prefix plus single-bit-flip variants. Each variant differs
//! from the base in exactly one position, so the Hamming distance to the
//! base is at most 1 for every member of the set.

use std::collections::BTreeSet;

use passage_core::errors::IndexError;

/// Expand the first `prefix_len` bits of `signature` into the base prefix
/// plus up to `probe_count` single-bit-flip variants.
///
/// Flip positions cycle through `i % prefix_len` for i = 0..probe_count,
/// each flip restarting from the original base (never cumulative). The
/// result is a set: at least 1 member, at most `probe_count + 1`, and for
/// fixed inputs always the same set.
pub fn expand_probes(
    signature: &str,
    prefix_len: usize,
    probe_count: usize,
) -> Result<BTreeSet<String>, IndexError> {
    if prefix_len == 0 || prefix_len > signature.len() {
        return Err(IndexError::InvalidProbeParameters {
            prefix_len,
            signature_len: signature.len(),
        });
    }

    let base = &signature[..prefix_len];
    let mut probes = BTreeSet::new();
    probes.insert(base.to_string());

    for i in 0..probe_count {
        if probes.len() >= probe_count + 1 {
            break;
        }
        let bit_index = i % prefix_len;
        let flipped: String = base
            .chars()
            .enumerate()
            .map(|(pos, bit)| match (pos == bit_index, bit) {
                (true, '0') => '1',
                (true, _) => '0',
                (false, _) => bit,
            })
            .collect();
        probes.insert(flipped);
    }

    Ok(probes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_prefix_is_always_present() {
        let probes = expand_probes("110100101101", 6, 4).unwrap();
        assert!(probes.contains("110100"));
    }

    #[test]
    fn expansion_matches_hand_computed_set() {
        // base 1101; flips at positions 0, 1, 2.
        let probes = expand_probes("11010010", 4, 3).unwrap();
        let expected: BTreeSet<String> =
            ["1101", "0101", "1001", "1111"].iter().map(|s| s.to_string()).collect();
        assert_eq!(probes, expected);
    }

    #[test]
    fn probe_count_larger_than_prefix_cycles_without_duplicates() {
        // prefix_len 2, probe_count 8: only 2 distinct single-flip variants
        // exist, so the set saturates at 3 members.
        let probes = expand_probes("10", 2, 8).unwrap();
        assert_eq!(probes.len(), 3);
    }

    #[test]
    fn zero_probe_count_returns_only_the_base() {
        let probes = expand_probes("1010", 3, 0).unwrap();
        assert_eq!(probes.len(), 1);
        assert!(probes.contains("101"));
    }

    #[test]
    fn zero_prefix_len_is_rejected() {
        assert!(matches!(
            expand_probes("1010", 0, 4),
            Err(IndexError::InvalidProbeParameters { prefix_len: 0, signature_len: 4 })
        ));
    }

    #[test]
    fn prefix_longer_than_signature_is_rejected() {
        assert!(matches!(
            expand_probes("1010", 5, 4),
            Err(IndexError::InvalidProbeParameters { prefix_len: 5, signature_len: 4 })
        ));
    }
}
