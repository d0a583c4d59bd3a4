//! Error types for environment operations.

use thiserror::Error;

/// Errors that can occur when stepping an episode.
///
/// Both variants signal a driver bug, never a game outcome: losing a round
/// is a reward, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// No episode has been started yet.
    #[error("no active episode; call reset first")]
    NotReset,
    /// The current episode has already terminated.
    #[error("episode already terminated; call reset to start a new one")]
    EpisodeOver,
}

/// Rejected integer-to-action conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid action index {index}; the action space is 0 (stick) and 1 (hit)")]
pub struct ActionError {
    /// The index that was rejected.
    pub index: u8,
}
