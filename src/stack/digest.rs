//! Rolling-hash digests over the stack's contents and bookkeeping.
//!
//! The primitive is a DJB-style rolling hash driven by each element's numeric
//! value as an iteration count, not by its bit pattern. Negative and zero
//! values therefore hash to the bare seed. This keys the digest to element
//! magnitude and is kept as-is; the digests are a debugging aid, not a
//! cryptographic guarantee, and collisions are acceptable.

use super::Element;

/// Hash seed of the DJB family.
const SEED: u64 = 5381;

/// One rolling hash over `value` rounds of `h = h * 33 + i`.
///
/// Values at or below zero contribute no rounds and hash to the seed.
#[allow(clippy::cast_sign_loss)] // i counts up from zero
pub(crate) fn rolling_hash(value: Element) -> u64 {
    let mut hash = SEED;
    let mut i: Element = 0;
    while i < value {
        hash = (hash << 5).wrapping_add(hash).wrapping_add(i as u64);
        i += 1;
    }
    hash
}

/// Digest over the live elements: the wrapping sum of each element's hash.
pub(crate) fn content_digest(live: &[Element]) -> u64 {
    live.iter()
        .fold(0u64, |acc, &value| acc.wrapping_add(rolling_hash(value)))
}

/// Digest over the bookkeeping: hashes the element sum plus length plus
/// capacity, so an overwrite of either counter shows up even when the
/// elements themselves are intact.
pub(crate) fn struct_digest(live: &[Element], len: i64, cap: i64) -> u64 {
    let sum = live
        .iter()
        .fold(0i64, |acc, &value| acc.wrapping_add(value));
    rolling_hash(sum.wrapping_add(len).wrapping_add(cap))
}
