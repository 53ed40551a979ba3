//! Domain layer: pure scoring logic types and helpers.

pub mod frame;
pub mod game;
pub mod rules;
pub mod snapshot;

#[cfg(test)]
mod tests_frame;

// Re-exports for ergonomics
pub use frame::{Frame, FrameKind};
pub use game::{FrameAppended, Game};
pub use rules::{is_valid_throw, FRAMES_PER_GAME, PIN_COUNT};
pub use snapshot::{FrameSnapshot, GameSnapshot};
