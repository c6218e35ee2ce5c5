//! Classic Snake for the terminal
//!
//! The game logic lives in [`game`] as a pure simulation with no I/O or
//! timing of its own. [`app`] hosts it behind a ratatui terminal,
//! driven by tokio timers and the crossterm event stream.

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
