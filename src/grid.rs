use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Default width and height of the board, in cells.
pub const DEFAULT_BOARD_SIZE: i32 = 20;

/// A cell on the board. Signed so that a step off the top or left edge is
/// still representable and can be judged out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Square playing field. The size is fixed once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells on the board.
    pub fn area(&self) -> usize {
        let side = self.size.max(0) as usize;
        side * side
    }

    pub fn in_bounds(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.size && c.y >= 0 && c.y < self.size
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size.max(0);
        (0..size).flat_map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
