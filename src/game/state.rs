use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A position on the board, in board units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Position one cell away in `direction`
    pub fn stepped(&self, direction: Direction, unit: i32) -> Self {
        let (dx, dy) = direction.velocity(unit);
        self.moved_by(dx, dy)
    }
}

/// The snake on the board
///
/// Segments are stored head first. The body is never empty: it is built from
/// a head and only loses its tail after a new head has been pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// A single-segment snake
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build a snake from head-first segments, or None if `segments` is empty
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub(crate) fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Drop the tail; a single-segment snake has nothing to drop.
    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionType {
    /// Head left the board
    OutOfBounds,
    /// Head ran into the snake's own body
    SelfCollision,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(200, 200);
        assert_eq!(pos.stepped(Direction::Right, 20), Position::new(220, 200));
        assert_eq!(pos.stepped(Direction::Left, 20), Position::new(180, 200));
        assert_eq!(pos.stepped(Direction::Down, 20), Position::new(200, 220));
        assert_eq!(pos.stepped(Direction::Up, 20), Position::new(200, 180));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(200, 200));
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());

        assert!(Snake::from_segments(Vec::new()).is_none());

        let snake = Snake::from_segments([
            Position::new(200, 200),
            Position::new(220, 200),
            Position::new(220, 180),
        ])
        .unwrap();
        assert_eq!(snake.head(), Position::new(200, 200));
        assert_eq!(snake.segments().last(), Some(&Position::new(220, 180)));
    }

    #[test]
    fn test_push_and_pop() {
        let mut snake = Snake::new(Position::new(200, 200));
        snake.push_head(Position::new(220, 200));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(220, 200));

        assert_eq!(snake.pop_tail(), Some(Position::new(200, 200)));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_occupies() {
        let snake =
            Snake::from_segments([Position::new(40, 0), Position::new(20, 0)]).unwrap();
        assert!(snake.occupies(Position::new(40, 0)));
        assert!(snake.occupies(Position::new(20, 0)));
        assert!(!snake.occupies(Position::new(0, 0)));
    }
}
