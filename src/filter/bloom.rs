//! Fixed-size bloom filter for probabilistic membership tests
//!
//! Supports insert and query only; items are never removed and the bit array
//! is never resized after construction. A negative answer is definitive, a
//! positive answer may be a false positive.

use bitvec::prelude::*;

use super::hashes::{MAX_HASHES, bit_positions};

/// Probabilistic set membership structure backed by a fixed bit array.
#[derive(Debug, Clone)]
pub struct MembershipFilter {
    bits: BitVec<u8, Lsb0>,
    hash_count: usize,
}

impl MembershipFilter {
    /// Create a filter with `bits` bits and `hash_count` hash functions.
    ///
    /// `bits` is clamped to at least 1 and `hash_count` to `[1, 3]` (only
    /// three mixing functions are defined).
    pub fn new(bits: usize, hash_count: usize) -> Self {
        let bits = bits.max(1);
        let hash_count = hash_count.clamp(1, MAX_HASHES);
        Self {
            bits: bitvec![u8, Lsb0; 0; bits],
            hash_count,
        }
    }

    /// Insert an item. Afterwards `might_contain` returns true for it, for
    /// the lifetime of the filter. Re-inserting is a no-op on final state.
    pub fn insert(&mut self, item: &str) {
        for pos in bit_positions(item, self.hash_count, self.bits.len()) {
            self.bits.set(pos, true);
        }
    }

    /// Test membership. `false` means the item was definitely never
    /// inserted; `true` means it probably was (false positives possible).
    pub fn might_contain(&self, item: &str) -> bool {
        bit_positions(item, self.hash_count, self.bits.len())
            .iter()
            .all(|&pos| self.bits[pos])
    }

    /// Reset every bit to false. Maintenance primitive only; the normal
    /// auth flow never clears a filter.
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Size of the bit array.
    pub fn size_bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash functions probed per item.
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }
}
