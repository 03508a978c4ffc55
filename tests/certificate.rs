use chrono::{DateTime, TimeZone, Utc};
use fairdraw::certificate::{canonical_payload, certificate_hash, verify_certificate};
use fairdraw::draw::{DrawRequest, Participant, execute_at};
use fairdraw::rng::Algorithm;

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

fn sample_result() -> fairdraw::draw::DrawResult {
    let pool: Vec<Participant> = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|id| Participant::new(id, id))
        .collect();
    let request = DrawRequest::new(pool, 2).with_seed("test-seed-12345");

    execute_at(&request, "draw-1", noon()).unwrap()
}

#[test]
fn canonical_payload_has_fixed_field_order() {
    let payload = canonical_payload(
        "draw-1",
        &["B", "D"],
        &noon(),
        Algorithm::SeededSha256V1,
        "test-seed-12345",
    );

    assert_eq!(
        payload,
        r#"{"drawId":"draw-1","winners":["B","D"],"timestamp":"2024-01-01T12:00:00.000Z","algorithm":"seeded-sha256-v1","seed":"test-seed-12345"}"#
    );
}

#[test]
fn certificate_hash_golden_vectors() {
    assert_eq!(
        certificate_hash(
            "draw-1",
            &["B", "D"],
            &noon(),
            Algorithm::SeededSha256V1,
            "test-seed-12345"
        ),
        "ae913b64795e3ed2a29c4360f1ed415f7bf3bef61c92cf14aa33486de8dda1eb"
    );

    assert_eq!(
        certificate_hash(
            "draw-1",
            &["E"],
            &noon(),
            Algorithm::CryptoRandom,
            "auto-generated"
        ),
        "7d491464676b1b4df2e54cc2f93c56254ba48b10a295bd9880606bee674f63ae"
    );
}

#[test]
fn payload_escapes_separators_in_fields() {
    let joined = canonical_payload("d", &["a\",\"b"], &noon(), Algorithm::CryptoRandom, "s");
    let split = canonical_payload("d", &["a", "b"], &noon(), Algorithm::CryptoRandom, "s");

    assert_ne!(joined, split);
    assert!(joined.contains(r#"["a\",\"b"]"#));
}

#[test]
fn winner_order_changes_hash() {
    let forward = certificate_hash("d", &["A", "B"], &noon(), Algorithm::CryptoRandom, "s");
    let reversed = certificate_hash("d", &["B", "A"], &noon(), Algorithm::CryptoRandom, "s");

    assert_ne!(forward, reversed);
}

#[test]
fn untouched_result_verifies() {
    assert!(verify_certificate(&sample_result()));
}

#[test]
fn tampered_fields_are_detected() {
    let original = sample_result();

    let mut swapped = original.clone();
    swapped.winners.swap(0, 1);
    assert!(!verify_certificate(&swapped));

    let mut renamed = original.clone();
    renamed.draw_id = "draw-2".into();
    assert!(!verify_certificate(&renamed));

    let mut reseeded = original.clone();
    reseeded.seed = "other".into();
    assert!(!verify_certificate(&reseeded));

    let mut relabeled = original.clone();
    relabeled.algorithm = Algorithm::CryptoRandom;
    assert!(!verify_certificate(&relabeled));

    let mut restamped = original;
    restamped.timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 1).unwrap();
    assert!(!verify_certificate(&restamped));
}

#[test]
fn result_json_round_trip_keeps_certificate_valid() {
    let result = sample_result();

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""algorithm":"seeded-sha256-v1""#));
    assert!(json.contains(r#""certificateHash":"ae913b64"#));

    let restored: fairdraw::draw::DrawResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
    assert!(verify_certificate(&restored));
}
