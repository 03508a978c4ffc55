//! Replay verification of seeded draws.
//!
//! A seeded draw is verified by running it again from the same seed and
//! comparing winner ids element by element, in order. A mismatch is an
//! ordinary outcome and yields `false`, never an error.
//!
//! Verification is meaningless for live draws: they have no seed, and
//! replaying them with any string only tests that string.

use crate::certificate::verify_certificate;
use crate::draw::{DrawResult, Participant, select_winners};

/// Returns `true` iff `claimed` is exactly the seeded draw of
/// `(participants, number_of_winners, allow_duplicates, seed)`.
///
/// Invalid draw parameters and length mismatches yield `false`.
pub fn verify(
    participants: &[Participant],
    number_of_winners: usize,
    allow_duplicates: bool,
    seed: &str,
    claimed: &[Participant],
) -> bool {
    let claimed_ids: Vec<&str> = claimed.iter().map(|winner| winner.id.as_str()).collect();
    verify_ids(participants, number_of_winners, allow_duplicates, seed, &claimed_ids)
}

/// Same as [`verify`] for callers that only hold the published winner ids.
pub fn verify_ids(
    participants: &[Participant],
    number_of_winners: usize,
    allow_duplicates: bool,
    seed: &str,
    claimed_ids: &[&str],
) -> bool {
    let replayed = match select_winners(participants, number_of_winners, allow_duplicates, Some(seed)) {
        Ok(winners) => winners,
        Err(err) => {
            log::debug!("verification replay refused: {err}");
            return false;
        }
    };

    let matches = replayed.len() == claimed_ids.len()
        && replayed
            .iter()
            .zip(claimed_ids)
            .all(|(winner, claimed)| winner.id == *claimed);

    if !matches {
        log::debug!(
            "verification mismatch: replayed {} winners, claimed {}",
            replayed.len(),
            claimed_ids.len()
        );
    }

    matches
}

/// Checks a whole published result against the participants it was drawn
/// from.
///
/// Returns `true` only if the result was produced by a replayable
/// algorithm, its certificate hash matches its fields, and its winners
/// replay exactly from its seed. Live results always return `false`.
pub fn verify_result(
    result: &DrawResult,
    participants: &[Participant],
    number_of_winners: usize,
    allow_duplicates: bool,
) -> bool {
    if !result.algorithm.is_replayable() {
        log::debug!("result {} is not replayable ({})", result.draw_id, result.algorithm);
        return false;
    }

    if !verify_certificate(result) {
        log::debug!("result {} certificate hash does not match", result.draw_id);
        return false;
    }

    verify_ids(
        participants,
        number_of_winners,
        allow_duplicates,
        &result.seed,
        &result.winner_ids(),
    )
}
