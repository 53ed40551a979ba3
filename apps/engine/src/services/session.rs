//! Async game session: one task owns a `Game` and every call flows
//! through a single command queue.
//!
//! The core engine is synchronous and holds no synchronization
//! primitives; concurrent mutation of one game is undefined. This
//! wrapper provides the required queuing: all commands, mutating or not,
//! are applied one at a time by the owning task, so callers on any
//! number of handles never observe a partially applied append.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::domain::game::{FrameAppended, Game};
use crate::domain::snapshot::GameSnapshot;
use crate::errors::domain::GameError;

type AppendReply = oneshot::Sender<Result<FrameAppended, GameError>>;

enum Command {
    Open {
        first: u8,
        second: u8,
        reply: AppendReply,
    },
    Spare {
        first: u8,
        reply: AppendReply,
    },
    Strike {
        reply: AppendReply,
    },
    BowlTenth {
        first: u8,
        second: u8,
        third: Option<u8>,
        reply: AppendReply,
    },
    ScoreOfFrame {
        frame_no: usize,
        reply: oneshot::Sender<Result<u16, GameError>>,
    },
    TotalScore {
        reply: oneshot::Sender<Option<u16>>,
    },
    Snapshot {
        reply: oneshot::Sender<GameSnapshot>,
    },
    IsComplete {
        reply: oneshot::Sender<bool>,
    },
}

/// Cloneable handle to a spawned game session. The session task lives
/// until every handle is dropped.
#[derive(Clone)]
pub struct GameSession {
    tx: mpsc::Sender<Command>,
}

impl GameSession {
    /// Spawn a task owning a fresh game. Must be called within a tokio
    /// runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(run(rx));
        Self { tx }
    }

    pub async fn open(&self, first: u8, second: u8) -> Result<FrameAppended, GameError> {
        let (reply, rx) = oneshot::channel();
        self.request(
            Command::Open {
                first,
                second,
                reply,
            },
            rx,
        )
        .await
    }

    pub async fn spare(&self, first: u8) -> Result<FrameAppended, GameError> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::Spare { first, reply }, rx).await
    }

    pub async fn strike(&self) -> Result<FrameAppended, GameError> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::Strike { reply }, rx).await
    }

    pub async fn bowl_tenth(
        &self,
        first: u8,
        second: u8,
        third: Option<u8>,
    ) -> Result<FrameAppended, GameError> {
        let (reply, rx) = oneshot::channel();
        self.request(
            Command::BowlTenth {
                first,
                second,
                third,
                reply,
            },
            rx,
        )
        .await
    }

    pub async fn score_of_frame(&self, frame_no: usize) -> Result<u16, GameError> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::ScoreOfFrame { frame_no, reply }, rx)
            .await
    }

    pub async fn total_score(&self) -> Option<u16> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::TotalScore { reply }, rx).await
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        let (reply, rx) = oneshot::channel();
        self.request(Command::Snapshot { reply }, rx).await
    }

    pub async fn is_complete(&self) -> bool {
        let (reply, rx) = oneshot::channel();
        self.request(Command::IsComplete { reply }, rx).await
    }

    async fn request<T>(&self, command: Command, rx: oneshot::Receiver<T>) -> T {
        // The task only exits once every handle is dropped, so both ends
        // of this exchange outlive the call.
        self.tx
            .send(command)
            .await
            .expect("game session task stopped while handles were alive");
        rx.await.expect("game session dropped a reply")
    }
}

async fn run(mut rx: mpsc::Receiver<Command>) {
    let mut game = Game::new();
    while let Some(command) = rx.recv().await {
        match command {
            Command::Open {
                first,
                second,
                reply,
            } => {
                let result = game.open(first, second);
                log_append("open", &result);
                reply.send(result).ok();
            }
            Command::Spare { first, reply } => {
                let result = game.spare(first);
                log_append("spare", &result);
                reply.send(result).ok();
            }
            Command::Strike { reply } => {
                let result = game.strike();
                log_append("strike", &result);
                reply.send(result).ok();
            }
            Command::BowlTenth {
                first,
                second,
                third,
                reply,
            } => {
                let result = game.bowl_tenth(first, second, third);
                log_append("tenth", &result);
                reply.send(result).ok();
            }
            Command::ScoreOfFrame { frame_no, reply } => {
                reply.send(game.score_of_frame(frame_no)).ok();
            }
            Command::TotalScore { reply } => {
                reply.send(game.total_score()).ok();
            }
            Command::Snapshot { reply } => {
                reply.send(game.snapshot()).ok();
            }
            Command::IsComplete { reply } => {
                reply.send(game.is_complete()).ok();
            }
        }
    }
    debug!("game session closed");
}

fn log_append(frame_kind: &str, result: &Result<FrameAppended, GameError>) {
    match result {
        Ok(appended) => info!(
            frame_kind,
            frame_no = appended.frame_no,
            newly_scored = ?appended.newly_scored,
            total = ?appended.total,
            complete = appended.game_complete,
            "frame appended"
        ),
        Err(err) => debug!(frame_kind, code = %err.code(), error = %err, "frame rejected"),
    }
}
