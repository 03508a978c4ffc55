//! Unbiased bounded integers from the operating system CSPRNG.
//!
//! Reducing a random integer with `% range` skews the result towards low
//! values whenever the sampled space is not a multiple of `range`. This
//! module removes the skew with rejection sampling:
//!
//! 1. `range = max_exclusive - min`
//! 2. `bytes = ceil(log2(range) / 8)`
//! 3. `space = 256^bytes`
//! 4. `cutoff = space - (space % range)`
//! 5. draw `bytes` random bytes as a big-endian integer `v`; redraw while
//!    `v >= cutoff`, then return `min + v % range`.
//!
//! The rejection probability is always below one half, so the loop ends
//! after very few iterations in practice.

use crate::os::sys_random;

/// Returns a uniformly distributed integer in `[min, max_exclusive)` drawn
/// from the operating system CSPRNG.
///
/// # Panics
/// Panics if `min >= max_exclusive`.
pub fn next(min: u64, max_exclusive: u64) -> u64 {
    next_with(sys_random, min, max_exclusive)
}

/// Same as [`next`], but reads random bytes from `fill`.
///
/// `fill` must overwrite the whole slice it is given. The live path passes
/// the OS source; tests pass scripted bytes to observe the rejection step.
///
/// # Panics
/// Panics if `min >= max_exclusive`.
pub fn next_with<F>(mut fill: F, min: u64, max_exclusive: u64) -> u64
where
    F: FnMut(&mut [u8]),
{
    assert!(
        min < max_exclusive,
        "empty range [{min}, {max_exclusive})"
    );

    let range = u128::from(max_exclusive - min);
    let bytes = bytes_needed(max_exclusive - min);

    // 256^bytes fits in u128 for every u64 range.
    let space = 1u128 << (8 * bytes);
    let cutoff = space - space % range;

    let mut buf = [0u8; 8];
    loop {
        fill(&mut buf[..bytes]);

        let value = buf[..bytes]
            .iter()
            .fold(0u128, |acc, &byte| (acc << 8) | u128::from(byte));

        if value < cutoff {
            return min + (value % range) as u64;
        }

        log::trace!("rejected sample above cutoff {cutoff} for range {range}");
    }
}

/// Minimum number of bytes able to represent `range` distinct values.
///
/// `ceil(log2(range))` is the bit length of `range - 1`.
fn bytes_needed(range: u64) -> usize {
    let bits = u64::BITS - (range - 1).leading_zeros();
    bits.div_ceil(8) as usize
}
