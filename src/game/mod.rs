//! Core game logic for Snake
//!
//! Everything in here is pure simulation: no I/O, no timers, no
//! rendering dependencies. The engine is driven entirely by the host
//! calling `tick`, `set_direction`, and `restart`.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::GameEngine;
pub use state::{Position, RunState, Snake, Snapshot};
