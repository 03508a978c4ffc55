//! Deterministic stream derived from a seed string.
//!
//! ```text
//! state_0 = SHA-256(seed)
//! state_i = SHA-256(state_{i-1})
//! value_i = be_u32(state_i[0..4]) / 2^32
//! ```
//!
//! Indices are mapped with `floor(value * bound)` and no rejection step.
//! For bounds that do not divide 2^32 this is slightly biased. The bias is
//! part of the `seeded-sha256-v1` contract: removing it would change the
//! output of every seed already published.

use crate::hash::{DIGEST_LEN, sha256};

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Restartable hash-chain stream.
///
/// Two streams built from the same seed yield the same sequence. A stream
/// cannot be rewound; build a new one to replay from the start.
#[derive(Clone)]
pub struct SeededStream {
    state: [u8; DIGEST_LEN],
}

impl SeededStream {
    pub fn new(seed: &str) -> Self {
        Self {
            state: sha256(seed.as_bytes()),
        }
    }

    /// Advances the chain and returns a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = sha256(&self.state);

        let word = u32::from_be_bytes([self.state[0], self.state[1], self.state[2], self.state[3]]);
        f64::from(word) / TWO_POW_32
    }

    /// Advances the chain and returns an index in `[0, bound)`.
    pub fn next_below(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64).floor() as usize
    }
}

impl std::fmt::Debug for SeededStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededStream").finish_non_exhaustive()
    }
}
