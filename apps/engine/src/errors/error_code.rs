//! Error codes for the scoring engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a caller
//! may match on across the engine boundary.

use core::fmt;

/// Centralized error codes for the scoring engine.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string. Callers
/// distinguish failures by code; the accompanying detail text is for
/// humans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A raw throw is out of range or an illegal pin combination
    InvalidThrow,
    /// A bonus throw is out of range
    InvalidBonus,
    /// A score was requested for a missing or not-yet-scorable frame
    FrameNotScored,
    /// A frame was appended after the game ended
    GameComplete,
}

impl ErrorCode {
    /// Canonical string form of the code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidThrow => "INVALID_THROW",
            ErrorCode::InvalidBonus => "INVALID_BONUS",
            ErrorCode::FrameNotScored => "FRAME_NOT_SCORED",
            ErrorCode::GameComplete => "GAME_COMPLETE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
