use serde::{Deserialize, Serialize};

/// Direction the snake can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector (dx, dy) with y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if turning from `self` to `other` would be a 180-degree turn.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Outcome of a direction change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionRequest {
    pub accepted: bool,
    /// Pending direction after the request, unchanged on rejection.
    pub pending: Option<Direction>,
}

/// Checks `requested` against the direction of the last executed tick.
///
/// Only `committed` gates legality. A string of key presses between two ticks
/// can therefore never be chained into a reversal: each one is judged against
/// the neck, and the last accepted one wins.
pub fn request_direction(
    committed: Direction,
    pending: Option<Direction>,
    requested: Direction,
) -> DirectionRequest {
    if committed.is_opposite(requested) {
        DirectionRequest {
            accepted: false,
            pending,
        }
    } else {
        DirectionRequest {
            accepted: true,
            pending: Some(requested),
        }
    }
}
