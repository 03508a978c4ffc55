//! Winner selection.
//!
//! - [`model`]
//!   Participants, requests and results.
//!
//! - [`sampler`]
//!   Fisher-Yates shuffle for unique winners and independent sampling
//!   when duplicates are allowed, generic over the random source.
//!
//! - [`engine`]
//!   Validation, source selection and result assembly.
//!
//! The engine is stateless: every function takes explicit inputs and
//! returns owned outputs. Persistence, notification and rendering of
//! results belong to the caller.

pub mod engine;
mod error;
pub mod model;
pub mod sampler;

pub use engine::{execute, execute_at, select_winners, validate};
pub use error::DrawError;
pub use model::{DrawRequest, DrawResult, Participant, ParticipantSource};
