//! Tamper-evident commitment to a draw result.
//!
//! A certificate hash is SHA-256 over a canonical serialization of five
//! fields: draw id, winner ids in order, timestamp, algorithm label and
//! seed label. Anyone holding those fields can recompute it and confirm
//! that nothing was altered after publication.
//!
//! The hash is not a proof of fairness. For seeded draws that role belongs
//! to [`crate::verify`], which replays the draw from its seed.
//!
//! ## Canonical form
//!
//! Compact JSON with a fixed field order:
//!
//! ```text
//! {"drawId":"…","winners":["…",…],"timestamp":"2024-01-01T00:00:00.000Z","algorithm":"…","seed":"…"}
//! ```
//!
//! Timestamps are UTC, RFC 3339, millisecond precision, `Z` suffix. JSON
//! string escaping keeps every field unambiguous whatever characters ids
//! or seeds contain.

mod core;

pub use self::core::{canonical_payload, certificate_hash, verify_certificate};
