use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::direction::Direction;
use crate::grid::{Coordinate, Grid, DEFAULT_BOARD_SIZE};
use crate::speed::SpeedLevel;

/// Problems found in a [`GameConfig`] before a game is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 2, got {0}")]
    BoardTooSmall(i32),
    #[error("initial snake body must contain at least one segment")]
    EmptyBody,
    #[error("segment {index} at ({x}, {y}) is outside the board")]
    SegmentOutOfBounds { index: usize, x: i32, y: i32 },
    #[error("segment {index} overlaps an earlier segment")]
    OverlappingSegments { index: usize },
    #[error("segment {index} is not adjacent to the previous segment")]
    DisconnectedBody { index: usize },
    #[error("snake fills the whole board")]
    NoRoomForFood,
    #[error("initial food at ({x}, {y}) is outside the board")]
    FoodOutOfBounds { x: i32, y: i32 },
    #[error("initial food at ({x}, {y}) is on the snake")]
    FoodOnSnake { x: i32, y: i32 },
}

/// Construction-time parameters of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square board
    pub board_size: i32,
    /// Starting body, head first
    pub initial_body: Vec<Coordinate>,
    pub initial_direction: Direction,
    /// Starting food; a random free cell when unset
    pub initial_food: Option<Coordinate>,
    pub level: SpeedLevel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            initial_body: vec![
                Coordinate::new(8, 8),
                Coordinate::new(7, 8),
                Coordinate::new(6, 8),
            ],
            initial_direction: Direction::Right,
            initial_food: Some(Coordinate::new(15, 8)),
            level: SpeedLevel::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size, keeping the
    /// default snake and letting the first food be placed at random.
    pub fn new(board_size: i32) -> Self {
        Self {
            board_size,
            initial_food: None,
            ..Default::default()
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.board_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.initial_body.is_empty() {
            return Err(ConfigError::EmptyBody);
        }

        let grid = self.grid();
        let mut seen = HashSet::with_capacity(self.initial_body.len());
        for (index, &segment) in self.initial_body.iter().enumerate() {
            if !grid.in_bounds(segment) {
                return Err(ConfigError::SegmentOutOfBounds {
                    index,
                    x: segment.x,
                    y: segment.y,
                });
            }
            if !seen.insert(segment) {
                return Err(ConfigError::OverlappingSegments { index });
            }
            if index > 0 {
                let prev = self.initial_body[index - 1];
                if (prev.x - segment.x).abs() + (prev.y - segment.y).abs() != 1 {
                    return Err(ConfigError::DisconnectedBody { index });
                }
            }
        }
        if self.initial_body.len() >= grid.area() {
            return Err(ConfigError::NoRoomForFood);
        }

        if let Some(food) = self.initial_food {
            if !grid.in_bounds(food) {
                return Err(ConfigError::FoodOutOfBounds {
                    x: food.x,
                    y: food.y,
                });
            }
            if seen.contains(&food) {
                return Err(ConfigError::FoodOnSnake {
                    x: food.x,
                    y: food.y,
                });
            }
        }

        Ok(())
    }
}
