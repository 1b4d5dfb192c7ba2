use std::mem;

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::{ConfigError, GameConfig};
use crate::direction::{request_direction, Direction};
use crate::events::{EndReason, GameEvent, Snapshot, Status};
use crate::food;
use crate::grid::{Coordinate, Grid};
use crate::scheduler::Scheduler;
use crate::snake::Snake;
use crate::speed::SpeedLevel;

/// What a call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Skipped,
    Moved { ate_food: bool },
    Ended(EndReason),
}

/// Owns one game: board, snake, food, score, lifecycle and tick cadence.
///
/// All mutation happens synchronously inside the methods below. Ticks are
/// requested through the injected scheduler and delivered by whoever owns the
/// clock; notifications for collaborators pile up until
/// [`drain_events`](Self::drain_events) is called.
pub struct GameEngine<S, R = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    initial_snake: Snake,
    snake: Snake,
    food: Coordinate,
    committed: Direction,
    pending: Option<Direction>,
    score: u32,
    high_score: u32,
    status: Status,
    level: SpeedLevel,
    scheduler: S,
    rng: R,
    events: Vec<GameEvent>,
}

impl<S: Scheduler> GameEngine<S, ThreadRng> {
    pub fn new(config: GameConfig, high_score: u32, scheduler: S) -> Result<Self, ConfigError> {
        Self::with_rng(config, high_score, scheduler, rand::thread_rng())
    }
}

impl<S: Scheduler, R: Rng> GameEngine<S, R> {
    /// Builds an idle game from a validated config.
    pub fn with_rng(
        config: GameConfig,
        high_score: u32,
        scheduler: S,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = config.grid();
        let initial_snake = Snake::from_segments(config.initial_body.iter().copied())
            .ok_or(ConfigError::EmptyBody)?;
        let food = match config.initial_food {
            Some(food) => food,
            None => food::place(&mut rng, &grid, &initial_snake)
                .ok_or(ConfigError::NoRoomForFood)?,
        };

        Ok(Self {
            grid,
            snake: initial_snake.clone(),
            initial_snake,
            food,
            committed: config.initial_direction,
            pending: Some(config.initial_direction),
            score: 0,
            high_score,
            status: Status::Idle,
            level: config.level,
            scheduler,
            rng,
            events: Vec::new(),
            config,
        })
    }

    pub fn start(&mut self) {
        match self.status {
            Status::Idle | Status::Paused => {
                self.scheduler.arm(self.level.interval());
                self.set_status(Status::Running);
            }
            Status::Running | Status::GameOver => {}
        }
    }

    pub fn pause(&mut self) {
        if self.status == Status::Running {
            self.scheduler.disarm();
            self.set_status(Status::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.status == Status::Paused {
            self.scheduler.arm(self.level.interval());
            self.set_status(Status::Running);
        }
    }

    /// Single-key control: starts an idle game, otherwise flips pause.
    pub fn toggle_pause(&mut self) {
        match self.status {
            Status::Idle => self.start(),
            Status::Running => self.pause(),
            Status::Paused => self.resume(),
            Status::GameOver => {}
        }
    }

    /// Queues a turn for the next tick. Returns whether it was accepted; a
    /// reversal of the last executed move, or any request while the game is
    /// not running, is ignored.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let request = request_direction(self.committed, self.pending, requested);
        self.pending = request.pending;
        request.accepted
    }

    /// Changes speed. A running game is re-armed at the new interval; nothing
    /// else moves.
    pub fn set_level(&mut self, level: SpeedLevel) {
        if level == self.level {
            return;
        }
        debug!("[Game] level {} -> {}", self.level.get(), level.get());
        self.level = level;
        if self.status == Status::Running {
            self.scheduler.disarm();
            self.scheduler.arm(level.interval());
        }
    }

    /// Advances the game by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != Status::Running {
            return TickOutcome::Skipped;
        }

        let direction = self.pending.unwrap_or(self.committed);
        let candidate = self.snake.next_head(direction);

        if !self.grid.in_bounds(candidate) {
            self.game_over(EndReason::Wall);
            return TickOutcome::Ended(EndReason::Wall);
        }
        if self.snake.would_collide_with_self(candidate) {
            self.game_over(EndReason::SelfCollision);
            return TickOutcome::Ended(EndReason::SelfCollision);
        }

        let ate_food = candidate == self.food;
        self.snake = self.snake.commit_move(candidate, ate_food);
        self.committed = direction;
        self.pending = None;

        if ate_food {
            self.score += 1;
            debug!("[Game] ate food at ({}, {}), score {}", candidate.x, candidate.y, self.score);
            self.events.push(GameEvent::Ate { score: self.score });

            match food::place(&mut self.rng, &self.grid, &self.snake) {
                Some(next) => self.food = next,
                None => {
                    self.events.push(GameEvent::Ticked(self.snapshot()));
                    self.game_over(EndReason::BoardFull);
                    return TickOutcome::Ended(EndReason::BoardFull);
                }
            }
        }

        self.events.push(GameEvent::Ticked(self.snapshot()));
        TickOutcome::Moved { ate_food }
    }

    /// Ends a running or paused game and settles the high score.
    pub fn game_over(&mut self, reason: EndReason) {
        if !matches!(self.status, Status::Running | Status::Paused) {
            return;
        }
        self.scheduler.disarm();

        let beaten = self.score > self.high_score;
        if beaten {
            info!("[Game] new high score {} (was {})", self.score, self.high_score);
            self.high_score = self.score;
        }
        self.set_status(Status::GameOver);
        if beaten {
            self.events.push(GameEvent::PersistHighScore(self.score));
        }

        let new_high_score = self.score == self.high_score && self.score > 0;
        info!("[Game] game over ({:?}), score {}", reason, self.score);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            reason,
            new_high_score,
        });
    }

    /// Puts the initial snake, food and direction back and returns to Idle.
    /// The high score and speed level carry over.
    pub fn reset(&mut self) {
        self.scheduler.disarm();
        self.snake = self.initial_snake.clone();
        let placed = match self.config.initial_food {
            Some(food) => Some(food),
            None => food::place(&mut self.rng, &self.grid, &self.snake),
        };
        // a validated config always leaves room for food
        if let Some(food) = placed {
            self.food = food;
        }
        self.committed = self.config.initial_direction;
        self.pending = Some(self.config.initial_direction);
        self.score = 0;
        self.set_status(Status::Idle);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_size: self.grid.size(),
            body: self.snake.segments().collect(),
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            status: self.status,
            level: self.level,
        }
    }

    /// Takes every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> SpeedLevel {
        self.level
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coordinate {
        self.food
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn committed_direction(&self) -> Direction {
        self.committed
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Replaces the food item. Meant for drivers that script a board; cells
    /// outside the grid or on the snake are refused.
    pub fn set_food(&mut self, food: Coordinate) -> bool {
        if !self.grid.in_bounds(food) || self.snake.contains(food) {
            return false;
        }
        self.food = food;
        true
    }

    fn set_status(&mut self, status: Status) {
        if self.status == status {
            return;
        }
        debug!("[Game] {:?} -> {:?}", self.status, status);
        self.status = status;
        self.events.push(GameEvent::StatusChanged(self.snapshot()));
    }
}
