//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A host drives it by calling [`Game::tick`] at its own cadence and feeding
//! [`Command`]s through [`Game::handle_input`].

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub(crate) mod food;
pub mod position;
pub mod snake;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::GameConfig;
pub use engine::{Game, GameOverCause, GameStatus, TickOutcome};
pub use error::ConfigError;
pub use position::Position;
pub use snake::{CollisionType, Snake};
