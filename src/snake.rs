use std::collections::VecDeque;

use crate::direction::Direction;
use crate::grid::Coordinate;

/// Snake body, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
}

impl Snake {
    /// Builds a snake from its segments, head first. Returns `None` for an
    /// empty body.
    pub fn from_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let body: VecDeque<Coordinate> = segments.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Coordinate {
        // never empty: see from_segments and commit_move
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.body.contains(&c)
    }

    /// Where the head would go. Bounds and body checks are up to the caller.
    pub fn next_head(&self, direction: Direction) -> Coordinate {
        self.head().step(direction)
    }

    /// Whether `candidate` lands on the body as it is now, tail included.
    pub fn would_collide_with_self(&self, candidate: Coordinate) -> bool {
        self.contains(candidate)
    }

    /// Moves the head onto `candidate`. The tail is dropped unless the snake
    /// just ate, which grows it by one.
    pub fn commit_move(&self, candidate: Coordinate, ate_food: bool) -> Snake {
        let mut body = self.body.clone();
        body.push_front(candidate);
        if !ate_food {
            body.pop_back();
        }
        Snake { body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(cells.iter().map(|&c| Coordinate::from(c))).unwrap()
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn test_next_head() {
        let s = snake(&[(8, 8), (7, 8), (6, 8)]);
        assert_eq!(s.next_head(Direction::Right), Coordinate::new(9, 8));
        assert_eq!(s.next_head(Direction::Up), Coordinate::new(8, 7));
        // no bounds check here
        let edge = snake(&[(0, 0)]);
        assert_eq!(edge.next_head(Direction::Left), Coordinate::new(-1, 0));
    }

    #[test]
    fn test_snake_movement() {
        let s = snake(&[(8, 8), (7, 8), (6, 8)]);

        let moved = s.commit_move(Coordinate::new(9, 8), false);
        assert_eq!(moved, snake(&[(9, 8), (8, 8), (7, 8)]));

        let grown = s.commit_move(Coordinate::new(9, 8), true);
        assert_eq!(grown, snake(&[(9, 8), (8, 8), (7, 8), (6, 8)]));

        // the original is left alone
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_collision_includes_tail() {
        let s = snake(&[(5, 5), (4, 5), (4, 6), (5, 6)]);

        assert!(s.would_collide_with_self(Coordinate::new(4, 5)));
        // the tail is about to move away, but still counts
        assert!(s.would_collide_with_self(Coordinate::new(5, 6)));
        assert!(!s.would_collide_with_self(Coordinate::new(6, 5)));
    }
}
