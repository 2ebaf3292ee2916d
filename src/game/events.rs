use serde::Serialize;

use super::config::Difficulty;
use super::direction::Direction;
use super::state::{CollisionType, Position};

/// Named events queued by the engine for collaborators to consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new session began
    Started { difficulty: Difficulty },
    /// A turn was accepted
    DirectionChanged { direction: Direction },
    /// The head landed on the food
    FoodEaten { score: u32, at: Position },
    /// The score passed the previous high score
    NewHighScore { high_score: u32 },
    /// The head hit a wall or the body
    GameOver { cause: CollisionType, score: u32 },
    /// A tick finished mutating state and a frame should be drawn
    Render,
    /// The session was halted without a game over
    Stopped,
}
