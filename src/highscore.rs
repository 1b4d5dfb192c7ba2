/// Storage for the best score across games.
///
/// The engine never calls this itself. A driver loads once at startup and
/// saves whenever it drains a
/// [`GameEvent::PersistHighScore`](crate::GameEvent::PersistHighScore).
/// Saving is best-effort.
pub trait HighScoreStore {
    fn load(&self) -> u32;
    fn save(&mut self, score: u32);
}

/// Keeps the high score for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryHighScore {
    best: u32,
    saves: usize,
}

impl MemoryHighScore {
    pub fn new(best: u32) -> Self {
        Self { best, saves: 0 }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) {
        self.best = score;
        self.saves += 1;
    }
}
