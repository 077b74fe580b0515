//! Password and answer digests
//!
//! djb2-style mixing rendered as a decimal string. This is NOT a
//! cryptographic hash: it is deterministic and collision-prone, and offers
//! no resistance to offline guessing. It is kept for compatibility with
//! existing database files; do not treat it as a security primitive.

/// Digest a plaintext into a printable decimal token.
///
/// Accumulator seeded at 5381, updated per byte as `acc = acc * 33 + byte`
/// with 64-bit wrapping arithmetic.
pub fn digest(input: &str) -> String {
    let acc = input.bytes().fold(5381u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(u64::from(byte))
    });
    acc.to_string()
}
