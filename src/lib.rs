//! Snake Arcade - a terminal Snake game
//!
//! This library provides:
//! - Core game logic: the tick-driven engine (game module)
//! - Session driver with the tick timer, controls and event listeners (session module)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod session;
