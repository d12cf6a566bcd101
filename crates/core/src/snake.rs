//! Snake module - ordered body segments and current heading

use std::collections::VecDeque;

use crate::types::{Direction, Point};

/// The snake body, head first.
///
/// The body is never empty: constructors take the head separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    heading: Direction,
}

impl Snake {
    /// A single-segment snake
    pub fn new(head: Point, heading: Direction) -> Self {
        Self::from_segments(head, [], heading)
    }

    /// Build a snake from its head and the remaining segments (neck to tail).
    pub fn from_segments(
        head: Point,
        tail: impl IntoIterator<Item = Point>,
        heading: Direction,
    ) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        body.extend(tail);
        Self { body, heading }
    }

    pub fn head(&self) -> Point {
        // The body always holds at least the head.
        self.body[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Only the game applies heading changes, after routing them.
    pub(crate) fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the body has no segments
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Prepend `new_head`; the tail is dropped unless the snake grows.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Linear membership test over every segment, tail included
    pub fn occupies(&self, p: Point) -> bool {
        self.body.iter().any(|&seg| seg == p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_long() -> Snake {
        Snake::from_segments(
            Point::new(5, 5),
            [Point::new(4, 5), Point::new(3, 5)],
            Direction::Right,
        )
    }

    #[test]
    fn test_new_snake_has_one_segment() {
        let snake = Snake::new(Point::new(10, 7), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(10, 7));
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = three_long();
        snake.advance(Point::new(6, 5), false);

        let body: Vec<Point> = snake.segments().collect();
        assert_eq!(
            body,
            vec![Point::new(6, 5), Point::new(5, 5), Point::new(4, 5)]
        );
    }

    #[test]
    fn test_advance_with_growth() {
        let mut snake = three_long();
        snake.advance(Point::new(6, 5), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Point::new(6, 5));
        assert!(snake.occupies(Point::new(3, 5)));
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake = three_long();
        assert!(snake.occupies(Point::new(5, 5)));
        assert!(snake.occupies(Point::new(3, 5)));
        assert!(!snake.occupies(Point::new(6, 5)));
    }
}
