use thiserror::Error;

/// Reasons a draw is refused.
///
/// Every variant is detected before any randomness is consumed and signals
/// caller misuse, so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The participant list is empty.
    #[error("no participants to draw from")]
    EmptyParticipants,

    /// Zero winners were requested.
    #[error("number of winners must be at least 1")]
    InvalidWinnerCount,

    /// More unique winners were requested than there are participants.
    #[error("cannot draw {requested} unique winners from {available} participants")]
    WinnersExceedParticipants { requested: usize, available: usize },
}
