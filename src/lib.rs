//! Verifiable winner selection for contests and giveaways
//!
//! This crate draws one or more winners from a list of participants so that
//! the outcome is unbiased, unpredictable in live mode, reproducible in
//! seeded mode, and committed to by a certificate hash that third parties
//! can recompute.
//!
//! # Module overview
//!
//! - `os`
//!   Access to the operating system CSPRNG. Private; the only
//!   platform-specific code in the crate.
//!
//! - `hash`
//!   SHA-256 and hex rendering, shared by the seeded stream and the
//!   certificate.
//!
//! - `rng`
//!   The random sources behind a draw: unbiased bounded integers from the
//!   OS (`rng::bounded`), the seeded hash-chain stream, seed generation,
//!   and the `Algorithm` labels that record which source was used.
//!
//! - `draw`
//!   Participants, requests and results; the Fisher-Yates and
//!   with-replacement samplers; validation and orchestration.
//!
//! - `certificate`
//!   Canonical serialization of a result and its SHA-256 commitment.
//!
//! - `verify`
//!   Replay of seeded draws against claimed winners.
//!
//! # Design goals
//!
//! - No modulo bias on the live path
//! - Bit-for-bit reproducibility on the seeded path, on any machine
//! - No shared mutable state; draws are safe to run concurrently
//! - No I/O beyond reading OS entropy
//!
//! User accounts, payments, participant import, storage and certificate
//! rendering are the caller's concern.
//!
//! # Example
//!
//! ```
//! use fairdraw::draw::{self, DrawRequest, Participant};
//! use fairdraw::verify::verify_result;
//!
//! let participants: Vec<Participant> = ["A", "B", "C", "D", "E"]
//!     .into_iter()
//!     .map(|id| Participant::new(id, id))
//!     .collect();
//!
//! let request = DrawRequest::new(participants.clone(), 2).with_seed("test-seed-12345");
//! let result = draw::execute(&request, "draw-1").unwrap();
//!
//! assert_eq!(result.winners.len(), 2);
//! assert!(verify_result(&result, &participants, 2, false));
//! ```

mod os;

pub mod certificate;
pub mod draw;
pub mod hash;
pub mod rng;
pub mod verify;
