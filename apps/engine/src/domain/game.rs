//! Game container: the frame sequence, bonus redistribution, and
//! cumulative scoring.

use crate::domain::frame::{Frame, FrameKind};
use crate::domain::rules::FRAMES_PER_GAME;
use crate::errors::domain::GameError;

/// Result of appending a frame, describing what scoring changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAppended {
    /// 1-based number of the frame just bowled.
    pub frame_no: u8,
    /// 1-based numbers of frames finalized by this append. Scoring a new
    /// frame can retroactively finalize up to two earlier ones.
    pub newly_scored: Vec<u8>,
    /// Running total over all scored frames, if any frame is scored yet.
    pub total: Option<u16>,
    /// Whether the tenth frame has now been bowled.
    pub game_complete: bool,
}

/// One bowler's game: frames in bowl order plus the cumulative totals of
/// the scorable prefix. Frames are appended, never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct Game {
    frames: Vec<Frame>,
    /// `cumulative[i]` is the sum of frame scores up to and including
    /// frame `i`. Shorter than `frames` while trailing frames wait on
    /// bonus throws.
    cumulative: Vec<u16>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(FRAMES_PER_GAME),
            cumulative: Vec::with_capacity(FRAMES_PER_GAME),
        }
    }

    /// Bowl an open frame.
    pub fn open(&mut self, first: u8, second: u8) -> Result<FrameAppended, GameError> {
        self.append(Frame::open(first, second)?)
    }

    /// Bowl a spare; the second throw is implied.
    pub fn spare(&mut self, first: u8) -> Result<FrameAppended, GameError> {
        self.append(Frame::spare(first)?)
    }

    /// Bowl a strike.
    pub fn strike(&mut self) -> Result<FrameAppended, GameError> {
        self.append(Frame::strike())
    }

    /// Bowl the terminal tenth frame.
    pub fn bowl_tenth(
        &mut self,
        first: u8,
        second: u8,
        third: Option<u8>,
    ) -> Result<FrameAppended, GameError> {
        self.append(Frame::tenth(first, second, third)?)
    }

    fn append(&mut self, frame: Frame) -> Result<FrameAppended, GameError> {
        if self.is_complete() {
            return Err(GameError::game_complete(
                "the tenth frame has been bowled; no frame may follow it",
            ));
        }
        if self.frames.len() >= FRAMES_PER_GAME {
            return Err(GameError::game_complete(format!(
                "{FRAMES_PER_GAME} frames have been bowled; no frame may follow"
            )));
        }
        let scored_before = self.cumulative.len();
        self.frames.push(frame);
        self.rescore()?;
        let scored_after = self.cumulative.len();
        Ok(FrameAppended {
            frame_no: self.frames.len() as u8,
            newly_scored: ((scored_before + 1)..=scored_after)
                .map(|n| n as u8)
                .collect(),
            total: self.total_score(),
            game_complete: self.is_complete(),
        })
    }

    /// Opening states with no scorable information at all: a lone strike
    /// or spare, or two strikes and nothing else. Scoring is not
    /// attempted until more frames exist.
    fn cannot_score_yet(&self) -> bool {
        match self.frames.as_slice() {
            [only] => matches!(only.kind(), FrameKind::Strike | FrameKind::Spare),
            [first, second] => {
                first.kind() == FrameKind::Strike && second.kind() == FrameKind::Strike
            }
            _ => false,
        }
    }

    /// Redistribute bonus throws and rebuild the cumulative totals.
    ///
    /// Runs after every append. The rebuild is always from scratch: a new
    /// frame's throws can retroactively complete the bonuses of the one
    /// or two frames before it.
    fn rescore(&mut self) -> Result<(), GameError> {
        self.cumulative.clear();
        if self.cannot_score_yet() {
            return Ok(());
        }

        for i in 0..self.frames.len() {
            if self.frames[i].cached_score().is_some() {
                continue;
            }
            let required = self.frames[i].bonus_required();
            if required == 0 {
                continue;
            }
            // The next frame always lends its throws; the frame after
            // that only lends to a strike. Missing neighbors contribute
            // nothing, leaving the bonus incomplete.
            let mut borrowed: Vec<u8> = Vec::with_capacity(3);
            if let Some(next) = self.frames.get(i + 1) {
                borrowed.extend(next.base_throws());
            }
            if self.frames[i].kind() == FrameKind::Strike {
                if let Some(after_next) = self.frames.get(i + 2) {
                    borrowed.extend(after_next.base_throws());
                }
            }
            borrowed.truncate(required);
            self.frames[i].assign_bonus(&borrowed)?;
        }

        let mut running: u16 = 0;
        for frame in &mut self.frames {
            if !frame.is_scorable() {
                break;
            }
            running += frame.score()?;
            self.cumulative.push(running);
        }
        Ok(())
    }

    /// Score of a single frame, 1-indexed; the frame's own points, not
    /// the cumulative total.
    pub fn score_of_frame(&self, frame_no: usize) -> Result<u16, GameError> {
        if frame_no == 0 || frame_no > self.frames.len() {
            return Err(GameError::frame_not_scored(format!(
                "frame {frame_no} has not been bowled ({} bowled so far)",
                self.frames.len()
            )));
        }
        self.frames[frame_no - 1].cached_score().ok_or_else(|| {
            GameError::frame_not_scored(format!("frame {frame_no} is waiting on bonus throws"))
        })
    }

    /// Total over all scored frames; `None` while no frame is scorable.
    pub fn total_score(&self) -> Option<u16> {
        self.cumulative.last().copied()
    }

    /// Cumulative totals of the scorable prefix, one entry per scored
    /// frame.
    pub fn cumulative_scores(&self) -> &[u16] {
        &self.cumulative
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frames_bowled(&self) -> usize {
        self.frames.len()
    }

    /// True once the tenth frame has been bowled.
    pub fn is_complete(&self) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.kind() == FrameKind::Tenth)
    }
}
