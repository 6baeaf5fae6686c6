use thiserror::Error;

/// Construction-time precondition violations
///
/// These are the only errors the engine reports; once a [`Game`](super::Game)
/// exists every operation on it is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    EmptyGrid,

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    #[error("initial snake length must be at least 1")]
    EmptySnake,

    #[error("a food score of {food_score} can overflow the total score on a {grid_size}x{grid_size} grid")]
    ScoreOverflow { food_score: u32, grid_size: usize },

    #[error("a snake of length {length} does not fit on a {grid_size}x{grid_size} grid")]
    SnakeDoesNotFit { length: usize, grid_size: usize },
}
