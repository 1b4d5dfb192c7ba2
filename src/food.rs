use rand::seq::IteratorRandom;
use rand::Rng;

use crate::grid::{Coordinate, Grid};
use crate::snake::Snake;

/// Picks a random free cell for the next food item.
///
/// Samples uniformly until it misses the snake. After `grid.area()` misses it
/// falls back to choosing among the free cells directly, so a crowded board
/// cannot stall a tick. Returns `None` when the snake covers every cell.
pub fn place<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, snake: &Snake) -> Option<Coordinate> {
    if snake.len() >= grid.area() {
        return None;
    }

    for _ in 0..grid.area() {
        let candidate = Coordinate::new(
            rng.gen_range(0..grid.size()),
            rng.gen_range(0..grid.size()),
        );
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }

    grid.cells().filter(|&c| !snake.contains(c)).choose(rng)
}
