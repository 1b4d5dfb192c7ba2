use serde::Serialize;

use crate::grid::Coordinate;
use crate::speed::SpeedLevel;

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    Wall,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFull,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board_size: i32,
    /// Head first
    pub body: Vec<Coordinate>,
    pub food: Coordinate,
    pub score: u32,
    pub high_score: u32,
    pub status: Status,
    pub level: SpeedLevel,
}

/// Notifications queued by the engine for its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A tick completed and the board changed.
    Ticked(Snapshot),
    StatusChanged(Snapshot),
    Ate { score: u32 },
    GameOver {
        score: u32,
        reason: EndReason,
        new_high_score: bool,
    },
    /// The high score was beaten and should be written to storage.
    PersistHighScore(u32),
}
