//! Hash functions for the membership filter
//!
//! Three independent string-mixing functions in the djb2/FNV family, each
//! with its own seed and multiplier so the same input lands on decorrelated
//! bit positions.

/// (seed, multiplier) pairs for the three mixing functions.
///
/// The first is classic djb2; the other two start from zero with different
/// prime multipliers. The pairs must stay pairwise distinct.
const MIXERS: [(u32, u32); 3] = [(5381, 33), (0, 31), (0, 37)];

/// Maximum number of hash functions a filter can use.
pub const MAX_HASHES: usize = MIXERS.len();

/// Mix the bytes of `item` into a 32-bit accumulator.
fn mix(item: &str, seed: u32, multiplier: u32) -> u32 {
    item.bytes().fold(seed, |acc, byte| {
        acc.wrapping_mul(multiplier).wrapping_add(u32::from(byte))
    })
}

/// Compute the bit positions probed for `item` in a filter of `bits` bits.
///
/// Uses the first `hash_count` mixing functions, each result reduced modulo
/// the bit-array length.
pub fn bit_positions(item: &str, hash_count: usize, bits: usize) -> Vec<usize> {
    MIXERS
        .iter()
        .take(hash_count)
        .map(|&(seed, multiplier)| mix(item, seed, multiplier) as usize % bits)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_deterministic() {
        let a = bit_positions("alice", 3, 10000);
        let b = bit_positions("alice", 3, 10000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_positions_within_bounds() {
        for item in ["", "a", "some longer input with spaces"] {
            for pos in bit_positions(item, 3, 97) {
                assert!(pos < 97);
            }
        }
    }

    #[test]
    fn test_mixers_decorrelate() {
        // The three functions should not all agree on a typical input.
        let positions = bit_positions("correlation-check", 3, 10000);
        assert!(
            positions.windows(2).any(|w| w[0] != w[1]),
            "all hash functions collided on the same bit: {:?}",
            positions
        );
    }

    #[test]
    fn test_hash_count_limits_positions() {
        assert_eq!(bit_positions("bob", 1, 10000).len(), 1);
        assert_eq!(bit_positions("bob", 3, 10000).len(), 3);
    }
}
