//! Food placement - a uniformly random cell not covered by the snake
//!
//! Placement first tries rejection sampling, which is fast while the board is
//! mostly empty. After [`SAMPLE_ATTEMPTS`] rejected draws it enumerates the
//! free cells and picks one by index, so a crowded board still terminates.
//! Both paths are uniform over the free cells.

use crate::board::Board;
use crate::rng::RandomSource;
use crate::snake::Snake;
use crate::types::Point;

/// Rejected draws before falling back to enumerating free cells
pub const SAMPLE_ATTEMPTS: usize = 64;

/// Pick a free cell, or `None` when the snake covers the whole board.
pub fn place_food<R: RandomSource + ?Sized>(
    board: &Board,
    snake: &Snake,
    rng: &mut R,
) -> Option<Point> {
    let free = board.area().saturating_sub(snake.len());
    if free == 0 {
        return None;
    }

    for _ in 0..SAMPLE_ATTEMPTS {
        let candidate = Point::new(
            rng.below(board.width() as u32) as i32,
            rng.below(board.height() as u32) as i32,
        );
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let pick = rng.below(free as u32) as usize;
    board.cells().filter(|&p| !snake.occupies(p)).nth(pick)
}
