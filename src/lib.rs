//! Gridsnake - deterministic simulation core for a grid-based snake game.
//!
//! The core advances the snake one cell per tick, judges wall and self
//! collisions, places food and keeps score. Rendering, input, audio and
//! high-score storage live outside and talk to it through [`GameEngine`],
//! the [`Scheduler`] it is handed, and the [`GameEvent`]s it queues.
//! A crossterm front-end is provided in [`terminal`].

pub mod config;
pub mod direction;
pub mod events;
pub mod food;
pub mod game;
pub mod grid;
pub mod highscore;
pub mod scheduler;
pub mod snake;
pub mod speed;
pub mod terminal;

pub use config::{ConfigError, GameConfig};
pub use direction::{request_direction, Direction, DirectionRequest};
pub use events::{EndReason, GameEvent, Snapshot, Status};
pub use game::{GameEngine, TickOutcome};
pub use grid::{Coordinate, Grid};
pub use highscore::{HighScoreStore, MemoryHighScore};
pub use scheduler::{ManualScheduler, PollTimer, Scheduler, SchedulerCall};
pub use snake::Snake;
pub use speed::{level_to_interval_ms, SpeedLevel};
