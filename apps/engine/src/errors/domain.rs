//! Domain-level error type used across the engine boundary.
//!
//! Every failure in this engine is a deterministic caller/input error:
//! there are no transient kinds and nothing is retried. Violations are
//! raised at the point of input, never clamped or defaulted.

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Central error type for frame construction, bonus assignment, score
/// queries, and game sequencing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    /// A raw throw is out of range, or a frame's throw combination
    /// violates the pins-per-frame ceiling.
    #[error("invalid throw: {0}")]
    InvalidThrow(String),
    /// A bonus throw is out of range.
    #[error("invalid bonus: {0}")]
    InvalidBonus(String),
    /// A score was requested for a frame that does not exist or is still
    /// waiting on bonus throws.
    #[error("frame not scored: {0}")]
    FrameNotScored(String),
    /// A frame was appended after the tenth frame.
    #[error("game complete: {0}")]
    GameComplete(String),
}

impl GameError {
    pub fn invalid_throw(detail: impl Into<String>) -> Self {
        Self::InvalidThrow(detail.into())
    }

    pub fn invalid_bonus(detail: impl Into<String>) -> Self {
        Self::InvalidBonus(detail.into())
    }

    pub fn frame_not_scored(detail: impl Into<String>) -> Self {
        Self::FrameNotScored(detail.into())
    }

    pub fn game_complete(detail: impl Into<String>) -> Self {
        Self::GameComplete(detail.into())
    }

    /// Machine-distinguishable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::InvalidThrow(_) => ErrorCode::InvalidThrow,
            GameError::InvalidBonus(_) => ErrorCode::InvalidBonus,
            GameError::FrameNotScored(_) => ErrorCode::FrameNotScored,
            GameError::GameComplete(_) => ErrorCode::GameComplete,
        }
    }
}
