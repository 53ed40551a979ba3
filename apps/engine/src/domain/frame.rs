//! Frame variants, their legality rules, and per-frame cached scoring.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{is_valid_throw, PIN_COUNT};
use crate::errors::domain::GameError;

/// The four frame kinds of a ten-pin game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// Both throws bowled, pins left standing.
    Open,
    /// All pins down across two throws; borrows one throw.
    Spare,
    /// All pins down on the first throw; borrows two throws.
    Strike,
    /// Terminal frame holding all of its own throws; never borrows.
    Tenth,
}

impl FrameKind {
    /// Number of throws this kind borrows from subsequent frames to
    /// complete its score. The game reads this constant when
    /// distributing bonuses.
    pub const fn bonus_throws(self) -> usize {
        match self {
            FrameKind::Open => 0,
            FrameKind::Spare => 1,
            FrameKind::Strike => 2,
            FrameKind::Tenth => 0,
        }
    }
}

/// Base throws, one shape per frame kind. Implied throws (the spare's
/// second, the strike's ten) are derived, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Throws {
    Open { first: u8, second: u8 },
    Spare { first: u8 },
    Strike,
    Tenth { first: u8, second: u8, third: Option<u8> },
}

/// One bowled frame: validated base throws, bonus throws borrowed from
/// subsequent frames, and a score that is finalized at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    throws: Throws,
    /// Bonus throws assigned so far (at most the kind's requirement).
    bonus: Vec<u8>,
    /// Finalized score; `None` until the required bonus throws are known.
    score: Option<u16>,
}

fn check_throw(pins: u8) -> Result<(), GameError> {
    if !is_valid_throw(pins) {
        return Err(GameError::invalid_throw(format!(
            "throw of {pins} pins is outside 0..={PIN_COUNT}"
        )));
    }
    Ok(())
}

impl Frame {
    /// An open frame: two throws leaving at least one pin standing.
    pub fn open(first: u8, second: u8) -> Result<Self, GameError> {
        check_throw(first)?;
        check_throw(second)?;
        if first + second >= PIN_COUNT {
            return Err(GameError::invalid_throw(format!(
                "open frame throws {first} and {second} knock down a full rack; \
                 that combination is a spare or strike"
            )));
        }
        Ok(Self::from_throws(Throws::Open { first, second }))
    }

    /// A spare: the second throw is implied (`10 - first`).
    pub fn spare(first: u8) -> Result<Self, GameError> {
        check_throw(first)?;
        if first >= PIN_COUNT {
            return Err(GameError::invalid_throw(format!(
                "spare first throw of {first} leaves no pins for the second; \
                 a full first rack is a strike"
            )));
        }
        Ok(Self::from_throws(Throws::Spare { first }))
    }

    /// A strike: the single throw of ten is implied.
    pub fn strike() -> Self {
        Self::from_throws(Throws::Strike)
    }

    /// The terminal tenth frame. A third throw is earned by (and only by)
    /// downing all ten pins within the first two throws.
    pub fn tenth(first: u8, second: u8, third: Option<u8>) -> Result<Self, GameError> {
        check_throw(first)?;
        check_throw(second)?;
        if let Some(third) = third {
            check_throw(third)?;
        }
        if first < PIN_COUNT {
            // Second throw works on the same rack as the first.
            if first + second > PIN_COUNT {
                return Err(GameError::invalid_throw(format!(
                    "tenth frame throws {first} and {second} exceed one rack of {PIN_COUNT} pins"
                )));
            }
            if first + second == PIN_COUNT && third.is_none() {
                return Err(GameError::invalid_throw(
                    "tenth frame spare earns a third throw, but none was bowled",
                ));
            }
            if first + second < PIN_COUNT && third.is_some() {
                return Err(GameError::invalid_throw(
                    "tenth frame left pins standing; a third throw is not earned",
                ));
            }
        } else {
            // First-throw strike: the second throw gets a fresh rack.
            let Some(third) = third else {
                return Err(GameError::invalid_throw(
                    "tenth frame strike earns a third throw, but none was bowled",
                ));
            };
            if second < PIN_COUNT && second + third > PIN_COUNT {
                return Err(GameError::invalid_throw(format!(
                    "tenth frame throws {second} and {third} exceed one rack of {PIN_COUNT} pins"
                )));
            }
        }
        Ok(Self::from_throws(Throws::Tenth {
            first,
            second,
            third,
        }))
    }

    fn from_throws(throws: Throws) -> Self {
        Self {
            throws,
            bonus: Vec::with_capacity(2),
            score: None,
        }
    }

    pub fn kind(&self) -> FrameKind {
        match self.throws {
            Throws::Open { .. } => FrameKind::Open,
            Throws::Spare { .. } => FrameKind::Spare,
            Throws::Strike => FrameKind::Strike,
            Throws::Tenth { .. } => FrameKind::Tenth,
        }
    }

    /// The pins knocked down on this frame's own throws, implied throws
    /// included. These are what earlier frames borrow as bonuses.
    pub fn base_throws(&self) -> Vec<u8> {
        match self.throws {
            Throws::Open { first, second } => vec![first, second],
            Throws::Spare { first } => vec![first, PIN_COUNT - first],
            Throws::Strike => vec![PIN_COUNT],
            Throws::Tenth {
                first,
                second,
                third,
            } => {
                let mut throws = vec![first, second];
                throws.extend(third);
                throws
            }
        }
    }

    /// Bonus throws assigned so far.
    pub fn bonus(&self) -> &[u8] {
        &self.bonus
    }

    pub fn bonus_required(&self) -> usize {
        self.kind().bonus_throws()
    }

    /// Attach bonus throws borrowed from subsequent frames.
    ///
    /// Validates every supplied value, keeps at most the required count,
    /// and overwrites any previous incomplete assignment. Once the frame
    /// is scored, further assignments are ignored.
    pub fn assign_bonus(&mut self, throws: &[u8]) -> Result<(), GameError> {
        if self.score.is_some() {
            return Ok(());
        }
        for &pins in throws {
            if !is_valid_throw(pins) {
                return Err(GameError::invalid_bonus(format!(
                    "bonus throw of {pins} pins is outside 0..={PIN_COUNT}"
                )));
            }
        }
        let take = throws.len().min(self.bonus_required());
        self.bonus.clear();
        self.bonus.extend_from_slice(&throws[..take]);
        Ok(())
    }

    /// True iff the required bonus count (possibly zero) has been supplied.
    pub fn is_scorable(&self) -> bool {
        self.score.is_some() || self.bonus.len() == self.bonus_required()
    }

    /// Compute and cache this frame's own score.
    ///
    /// The first successful call finalizes the value; every later call
    /// returns the cached score no matter what was assigned in between.
    pub fn score(&mut self) -> Result<u16, GameError> {
        if let Some(value) = self.score {
            return Ok(value);
        }
        if !self.is_scorable() {
            let missing = self.bonus_required() - self.bonus.len();
            return Err(GameError::frame_not_scored(format!(
                "frame is waiting on {missing} bonus throw(s)"
            )));
        }
        let value = match self.throws {
            Throws::Open { first, second } => u16::from(first) + u16::from(second),
            Throws::Spare { .. } => u16::from(PIN_COUNT) + u16::from(self.bonus[0]),
            Throws::Strike => {
                u16::from(PIN_COUNT) + u16::from(self.bonus[0]) + u16::from(self.bonus[1])
            }
            Throws::Tenth {
                first,
                second,
                third,
            } => u16::from(first) + u16::from(second) + u16::from(third.unwrap_or(0)),
        };
        self.score = Some(value);
        Ok(value)
    }

    /// The finalized score, if any.
    pub fn cached_score(&self) -> Option<u16> {
        self.score
    }
}
