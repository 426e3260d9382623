//! Fixed djb2 hashing: key bytes to a 64-bit accumulator, accumulator to a
//! bucket index. There is exactly one hash function in this crate and it is
//! not pluggable; bucket placement must stay bit-exact so that layouts are
//! deterministic and testable.

/// Seed of the djb2 accumulator.
const DJB2_SEED: u64 = 5381;

/// Full djb2 accumulator over every byte of `key`.
///
/// `acc = acc * 33 + byte` with wrapping u64 arithmetic, starting from 5381.
/// The empty string hashes to the bare seed. Multi-byte characters are run
/// through byte by byte, so the result matches the classic C routine on any
/// UTF-8 input.
#[inline]
pub fn djb2(key: &str) -> u64 {
    let mut acc = DJB2_SEED;
    for &byte in key.as_bytes() {
        // (acc << 5) + acc is acc * 33; both wrap like unsigned C arithmetic.
        acc = (acc << 5).wrapping_add(acc).wrapping_add(u64::from(byte));
    }
    acc
}

/// Bucket index for `key` in a table with `buckets` buckets.
///
/// Deterministic and always in `[0, buckets)`. `buckets` must be at least 1;
/// passing 0 panics (division by zero), which table constructors rule out up
/// front.
#[inline]
pub fn bucket_index(key: &str, buckets: usize) -> usize {
    debug_assert!(buckets > 0, "bucket count must be at least 1");
    (djb2(key) % buckets as u64) as usize
}
