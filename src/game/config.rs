use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{action::Direction, error::ConfigError, position::Position, snake::Snake};

/// Largest accepted grid edge
pub const MAX_GRID_SIZE: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of the square grid
    pub grid_size: usize,
    /// Number of segments the snake spawns with
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub food_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            food_score: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Check the construction preconditions
    ///
    /// The spawn body must fit on the grid and leave at least one free cell
    /// for food, and the score of a completely filled grid must fit in a `u32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        let fits = self.initial_snake_length <= self.spawn_head_x() + 1
            && self.initial_snake_length < self.grid_size * self.grid_size;
        if !fits {
            return Err(ConfigError::SnakeDoesNotFit {
                length: self.initial_snake_length,
                grid_size: self.grid_size,
            });
        }

        // A round eats at most one food per cell
        let cells = (self.grid_size * self.grid_size) as u64;
        if u64::from(self.food_score) * cells > u64::from(u32::MAX) {
            return Err(ConfigError::ScoreOverflow {
                food_score: self.food_score,
                grid_size: self.grid_size,
            });
        }

        Ok(())
    }

    /// The snake every round starts with: centred, heading right
    pub fn spawn_snake(&self) -> Snake {
        let center = self.spawn_head_x() as i32;
        Snake::new(
            Position::new(center, center),
            Direction::Right,
            self.initial_snake_length,
        )
    }

    fn spawn_head_x(&self) -> usize {
        self.grid_size / 2
    }
}
