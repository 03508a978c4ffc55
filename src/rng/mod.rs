//! Random number generation module
//!
//! The draw engine consumes randomness through one narrow capability,
//! [`RandomSource`], which hands out indices below a bound. Exactly two
//! implementations exist:
//!
//! - [`SecureRandom`]
//!   Live mode. Every index comes from the operating system CSPRNG through
//!   [`bounded::next`], which uses rejection sampling so that no index is
//!   more likely than another.
//!
//! - [`SeededStream`]
//!   Replay mode. A SHA-256 hash chain derived from a caller-supplied seed
//!   string. Identical seeds produce identical streams on every machine.
//!   This path exists for verification and testing only; it is never used
//!   to run a live contest.
//!
//! Which one backs a draw is decided by the presence of a seed and is
//! recorded as an [`Algorithm`] label. Labels are a permanent compatibility
//! contract: a certificate issued under a label must replay under that
//! label forever.

pub mod bounded;
mod seed;
mod seeded;

use serde::{Deserialize, Serialize};

pub use seed::{AUTO_SEED_LABEL, SEED_BYTES, generate_seed};
pub use seeded::SeededStream;

/// A source of uniformly chosen indices.
///
/// Implementations are consumed by the sampler; the sampler itself never
/// knows which one it is driving.
pub trait RandomSource {
    /// Returns an index in `[0, bound)`.
    ///
    /// `bound` is always at least 1 when called from the sampler.
    fn index_below(&mut self, bound: usize) -> usize;
}

/// Live entropy: operating system CSPRNG with rejection sampling.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn index_below(&mut self, bound: usize) -> usize {
        bounded::next(0, bound as u64) as usize
    }
}

impl RandomSource for SeededStream {
    fn index_below(&mut self, bound: usize) -> usize {
        self.next_below(bound)
    }
}

/// Identifies the random source that produced a draw.
///
/// The serialized form is the label returned by [`Algorithm::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Operating system CSPRNG with rejection sampling. Not replayable.
    #[serde(rename = "crypto-random")]
    CryptoRandom,

    /// SHA-256 hash chain over the seed, indices mapped with
    /// `floor(value * bound)`.
    #[serde(rename = "seeded-sha256-v1")]
    SeededSha256V1,
}

impl Algorithm {
    /// Every label this crate has ever issued.
    pub const ALL: [Algorithm; 2] = [Algorithm::CryptoRandom, Algorithm::SeededSha256V1];

    /// The stable label recorded in results and certificates.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::CryptoRandom => "crypto-random",
            Algorithm::SeededSha256V1 => "seeded-sha256-v1",
        }
    }

    /// Parses a label previously produced by [`Algorithm::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.label() == label)
    }

    /// Whether results under this label can be replayed from their seed.
    pub const fn is_replayable(self) -> bool {
        matches!(self, Algorithm::SeededSha256V1)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
