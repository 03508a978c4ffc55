//! Draw orchestration.
//!
//! [`select_winners`] validates a draw, picks the random source from the
//! presence of a seed, and runs the sampler. [`execute`] wraps it into a
//! certified [`DrawResult`].
//!
//! Nothing here holds state between calls. Each draw clones its own working
//! copy of the participants, so any number of draws may run on separate
//! threads at once.

use chrono::{DateTime, Utc};

use super::error::DrawError;
use super::model::{DrawRequest, DrawResult, Participant};
use super::sampler::{sample_with_replacement, shuffle_take};
use crate::certificate::certificate_hash;
use crate::rng::{AUTO_SEED_LABEL, Algorithm, RandomSource, SecureRandom, SeededStream};

/// Checks a draw's preconditions.
///
/// Checks run in a fixed order, so a request violating several of them
/// always reports the first: empty list, then zero winners, then too many
/// unique winners.
pub fn validate(
    participant_count: usize,
    number_of_winners: usize,
    allow_duplicates: bool,
) -> Result<(), DrawError> {
    if participant_count == 0 {
        return Err(DrawError::EmptyParticipants);
    }

    if number_of_winners < 1 {
        return Err(DrawError::InvalidWinnerCount);
    }

    if !allow_duplicates && number_of_winners > participant_count {
        return Err(DrawError::WinnersExceedParticipants {
            requested: number_of_winners,
            available: participant_count,
        });
    }

    Ok(())
}

/// The algorithm a draw with or without `seed` runs under.
pub fn algorithm_for(seed: Option<&str>) -> Algorithm {
    match seed {
        Some(_) => Algorithm::SeededSha256V1,
        None => Algorithm::CryptoRandom,
    }
}

/// Selects `number_of_winners` participants.
///
/// Without a seed the operating system CSPRNG drives the draw and the
/// result is unpredictable. With a seed the draw is replayable: identical
/// arguments always produce the identical winner sequence.
///
/// Winners are returned in selection order.
///
/// # Errors
///
/// Returns a [`DrawError`] if the preconditions checked by [`validate`]
/// fail. No randomness is consumed in that case.
pub fn select_winners(
    participants: &[Participant],
    number_of_winners: usize,
    allow_duplicates: bool,
    seed: Option<&str>,
) -> Result<Vec<Participant>, DrawError> {
    if let Err(err) = validate(participants.len(), number_of_winners, allow_duplicates) {
        log::debug!("draw rejected: {err}");
        return Err(err);
    }

    let winners = match seed {
        Some(seed) => sample(
            participants,
            number_of_winners,
            allow_duplicates,
            &mut SeededStream::new(seed),
        ),
        None => sample(
            participants,
            number_of_winners,
            allow_duplicates,
            &mut SecureRandom,
        ),
    };

    log::debug!(
        "draw completed: algorithm={} participants={} winners={} duplicates={}",
        algorithm_for(seed),
        participants.len(),
        winners.len(),
        allow_duplicates,
    );

    Ok(winners)
}

fn sample<R: RandomSource>(
    participants: &[Participant],
    number_of_winners: usize,
    allow_duplicates: bool,
    source: &mut R,
) -> Vec<Participant> {
    if allow_duplicates {
        sample_with_replacement(participants, number_of_winners, source)
    } else {
        shuffle_take(participants, number_of_winners, source)
    }
}

/// Runs `request` and builds a certified result stamped with the current
/// time.
///
/// # Errors
///
/// See [`select_winners`].
pub fn execute(request: &DrawRequest, draw_id: &str) -> Result<DrawResult, DrawError> {
    execute_at(request, draw_id, Utc::now())
}

/// Runs `request` and builds a certified result stamped with `timestamp`.
///
/// The seed is recorded verbatim when present. Live draws record
/// [`AUTO_SEED_LABEL`] instead because no replayable seed exists.
///
/// # Errors
///
/// See [`select_winners`].
pub fn execute_at(
    request: &DrawRequest,
    draw_id: &str,
    timestamp: DateTime<Utc>,
) -> Result<DrawResult, DrawError> {
    let seed = request.seed.as_deref();

    let winners = select_winners(
        &request.participants,
        request.number_of_winners,
        request.allow_duplicates,
        seed,
    )?;

    let algorithm = algorithm_for(seed);
    let seed_label = seed.unwrap_or(AUTO_SEED_LABEL).to_owned();

    let ids: Vec<&str> = winners.iter().map(|winner| winner.id.as_str()).collect();
    let certificate_hash = certificate_hash(draw_id, &ids, &timestamp, algorithm, &seed_label);

    Ok(DrawResult {
        draw_id: draw_id.to_owned(),
        winners,
        timestamp,
        algorithm,
        seed: seed_label,
        certificate_hash,
    })
}
