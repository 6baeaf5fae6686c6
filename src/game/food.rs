//! Food placement on cells the snake does not occupy

use rand::{Rng, seq::IteratorRandom};

use super::{position::Position, snake::Snake};

/// Uniform draws tried before falling back to enumerating free cells
pub(crate) const FOOD_SAMPLE_ATTEMPTS: usize = 32;

/// Pick a uniformly random free cell, or `None` when the snake fills the grid
///
/// `grid_size` must already be validated against `MAX_GRID_SIZE`.
///
/// Rejection sampling is fast while the snake is short; once it keeps hitting
/// the body the free cells are enumerated instead, so placement always
/// terminates.
pub(crate) fn place_food<R: Rng + ?Sized>(snake: &Snake, grid_size: usize, rng: &mut R) -> Option<Position> {
    if grid_size == 0 {
        return None;
    }

    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let x = rng.gen_range(0..grid_size) as i32;
        let y = rng.gen_range(0..grid_size) as i32;
        let pos = Position::new(x, y);

        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    free_cells(snake, grid_size).choose(rng)
}

/// Every in-grid cell not covered by the snake, row by row
pub(crate) fn free_cells(snake: &Snake, grid_size: usize) -> impl Iterator<Item = Position> + '_ {
    let size = grid_size as i32;
    (0..size)
        .flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
        .filter(move |&pos| !snake.occupies(pos))
}
