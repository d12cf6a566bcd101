//! Board module - fixed grid geometry
//!
//! The board only knows its dimensions; occupancy lives in the snake.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom)

use crate::types::{Point, BOARD_HEIGHT, BOARD_WIDTH};

/// Immutable board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    /// Create a board of `width` x `height` cells.
    ///
    /// Dimensions below 1 are raised to 1 so the board always has a cell for
    /// the snake to start on.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Starting cell for a new snake
    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    #[inline(always)]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Iterate every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_edges() {
        let board = Board::new(20, 15);

        assert!(board.in_bounds(Point::new(0, 0)));
        assert!(board.in_bounds(Point::new(19, 14)));
        assert!(!board.in_bounds(Point::new(-1, 0)));
        assert!(!board.in_bounds(Point::new(0, -1)));
        assert!(!board.in_bounds(Point::new(20, 0)));
        assert!(!board.in_bounds(Point::new(0, 15)));
    }

    #[test]
    fn test_center() {
        assert_eq!(Board::new(20, 15).center(), Point::new(10, 7));
        assert_eq!(Board::new(1, 1).center(), Point::new(0, 0));
    }

    #[test]
    fn test_cells_row_major() {
        let board = Board::new(3, 2);
        let cells: Vec<Point> = board.cells().collect();

        assert_eq!(cells.len(), board.area());
        assert_eq!(cells[0], Point::new(0, 0));
        assert_eq!(cells[2], Point::new(2, 0));
        assert_eq!(cells[3], Point::new(0, 1));
    }

    #[test]
    fn test_degenerate_dimensions_clamped() {
        let board = Board::new(0, -4);
        assert_eq!(board.width(), 1);
        assert_eq!(board.height(), 1);
        assert_eq!(board.area(), 1);
    }
}
