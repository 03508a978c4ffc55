use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::draw::DrawResult;
use crate::hash::{sha256, to_hex};
use crate::rng::Algorithm;

/// Field order of this struct is the canonical field order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Payload<'a> {
    draw_id: &'a str,
    winners: &'a [&'a str],
    timestamp: String,
    algorithm: &'static str,
    seed: &'a str,
}

/// Returns the canonical serialization of a draw result.
pub fn canonical_payload(
    draw_id: &str,
    winner_ids: &[&str],
    timestamp: &DateTime<Utc>,
    algorithm: Algorithm,
    seed: &str,
) -> String {
    let payload = Payload {
        draw_id,
        winners: winner_ids,
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        algorithm: algorithm.label(),
        seed,
    };

    // Only strings and a string array: serialization cannot fail.
    serde_json::to_string(&payload).expect("certificate payload is plain JSON")
}

/// Returns the certificate hash: 64 lowercase hex characters.
pub fn certificate_hash(
    draw_id: &str,
    winner_ids: &[&str],
    timestamp: &DateTime<Utc>,
    algorithm: Algorithm,
    seed: &str,
) -> String {
    let payload = canonical_payload(draw_id, winner_ids, timestamp, algorithm, seed);
    to_hex(&sha256(payload.as_bytes()))
}

/// Recomputes the certificate hash from the result's own fields.
///
/// Returns `false` if any committed field was changed after the result was
/// built. This says nothing about whether the draw itself was fair.
pub fn verify_certificate(result: &DrawResult) -> bool {
    let expected = certificate_hash(
        &result.draw_id,
        &result.winner_ids(),
        &result.timestamp,
        result.algorithm,
        &result.seed,
    );

    expected == result.certificate_hash
}
