//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::frame::FrameKind;
use crate::domain::game::Game;

/// Public facts about a single bowled frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// 1-based frame number.
    pub frame_no: u8,
    pub kind: FrameKind,
    /// Base throws, implied throws included.
    pub throws: Vec<u8>,
    /// Bonus throws borrowed so far.
    pub bonus: Vec<u8>,
    /// This frame's own score, once finalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u16>,
    /// Running total through this frame, while the scorable prefix
    /// reaches it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative: Option<u16>,
}

/// Top-level snapshot of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub frames: Vec<FrameSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u16>,
    pub complete: bool,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let cumulative = game.cumulative_scores();
        let frames = game
            .frames()
            .iter()
            .enumerate()
            .map(|(i, frame)| FrameSnapshot {
                frame_no: (i + 1) as u8,
                kind: frame.kind(),
                throws: frame.base_throws(),
                bonus: frame.bonus().to_vec(),
                score: frame.cached_score(),
                cumulative: cumulative.get(i).copied(),
            })
            .collect();
        Self {
            frames,
            total: game.total_score(),
            complete: game.is_complete(),
        }
    }
}

impl Game {
    /// Serializable read model of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
