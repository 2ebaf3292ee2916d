//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Side effects are expressed as queued [`GameEvent`]s that the session layer dispatches.

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod events;
pub mod state;

// Re-export commonly used types
pub use config::{Difficulty, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use error::ConfigError;
pub use events::GameEvent;
pub use state::{CollisionType, GameStatus, Position, Snake};
