//! Grid Snake - a deterministic, tick-based snake engine
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Keyboard input mapping (input module)
//! - TUI rendering of the engine's observable state (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
