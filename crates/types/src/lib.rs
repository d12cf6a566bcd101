//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input decoding, terminal rendering).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 15 rows (indexed 0-14)
//! - **Start position**: the board centre, (10, 7)
//!
//! Coordinates grow right (x) and down (y), so `Up` decreases y.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Interval between two game steps |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Point, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p.step(Direction::Up), Point::new(3, 3));
//! assert_eq!(p.step(Direction::Right), Point::new(4, 4));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert!(!Direction::Left.is_opposite(Direction::Up));
//!
//! assert_eq!(BOARD_WIDTH, 20);
//! assert_eq!(BOARD_HEIGHT, 15);
//! ```

/// Default board width in cells (20 columns)
pub const BOARD_WIDTH: i32 = 20;

/// Default board height in cells (15 rows)
pub const BOARD_HEIGHT: i32 = 15;

/// Default interval between game steps in milliseconds
pub const TICK_MS: u64 = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_defaults() {
        assert_eq!(BOARD_WIDTH, 20);
        assert_eq!(BOARD_HEIGHT, 15);
        assert_eq!(TICK_MS, 200);
    }

    #[test]
    fn opposite_pairs_are_symmetric() {
        for d in Direction::ALL {
            assert!(d.is_opposite(d.opposite()));
            assert!(d.opposite().is_opposite(d));
            assert!(!d.is_opposite(d));
        }
    }

    #[test]
    fn step_moves_exactly_one_cell() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Direction::Up), Point::new(5, 4));
        assert_eq!(p.step(Direction::Down), Point::new(5, 6));
        assert_eq!(p.step(Direction::Left), Point::new(4, 5));
        assert_eq!(p.step(Direction::Right), Point::new(6, 5));
    }
}

/// A cell coordinate on the board.
///
/// Coordinates are signed so that a step off the left or top edge is
/// representable (and rejected by bounds checking) instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Heading of the snake
///
/// Only the opposite relation is meaningful: Up⇄Down and Left⇄Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell offset `(dx, dy)` for one step in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Check whether `other` points straight back along this direction
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Convert to lowercase string (used in log lines)
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A decoded keyboard event delivered to the control loop
///
/// Undecodable input never becomes an event; it is dropped by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Arrow key: request a new heading
    Direction(Direction),
    /// `q` / `Q`: end the session
    Quit,
}
