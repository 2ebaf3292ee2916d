use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// True for Left and Right
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when `other` moves along the other axis, which is the only kind
    /// of turn the snake accepts.
    pub fn is_turn_to(&self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    /// Velocity (dx, dy) for one tick on a board with the given cell size
    pub fn velocity(&self, unit: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -unit),
            Direction::Down => (0, unit),
            Direction::Left => (-unit, 0),
            Direction::Right => (unit, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_only_change_axis() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let expected = current.is_horizontal() != requested.is_horizontal();
                assert_eq!(current.is_turn_to(requested), expected);
            }
            assert!(!current.is_turn_to(current));
        }
    }

    #[test]
    fn test_velocity_scales_with_unit() {
        assert_eq!(Direction::Up.velocity(20), (0, -20));
        assert_eq!(Direction::Down.velocity(20), (0, 20));
        assert_eq!(Direction::Left.velocity(20), (-20, 0));
        assert_eq!(Direction::Right.velocity(1), (1, 0));
    }
}
