use crate::hash::to_hex;
use crate::os::sys_random;

/// Number of OS random bytes behind a generated seed.
pub const SEED_BYTES: usize = 32;

/// Seed label recorded for live draws, which have no replayable seed.
pub const AUTO_SEED_LABEL: &str = "auto-generated";

/// Returns a fresh seed: 64 lowercase hex characters from 32 OS random
/// bytes.
///
/// Intended for callers who want a replayable seed logged alongside a
/// contest. Passing it to a draw selects the seeded path.
pub fn generate_seed() -> String {
    let mut bytes = [0u8; SEED_BYTES];
    sys_random(&mut bytes);

    let seed = to_hex(&bytes);
    bytes.fill(0);

    seed
}
