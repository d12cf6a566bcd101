//! Food placement tests with seeded and scripted random sources

use std::collections::VecDeque;

use tui_snake::core::{place_food, Board, Game, RandomSource, SimpleRng, Snake};
use tui_snake::types::{Direction, Point};

/// Replays a fixed list of draws, then repeats the last one.
struct Scripted {
    draws: VecDeque<u32>,
    last: u32,
}

impl Scripted {
    fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            last: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn below(&mut self, n: u32) -> u32 {
        if let Some(v) = self.draws.pop_front() {
            self.last = v;
        }
        self.last % n.max(1)
    }
}

fn snake_row(len: i32) -> Snake {
    // Head at (len-1, 0), tail at (0, 0).
    Snake::from_segments(
        Point::new(len - 1, 0),
        (0..len - 1).rev().map(|x| Point::new(x, 0)),
        Direction::Right,
    )
}

#[test]
fn test_first_free_draw_is_accepted() {
    let board = Board::new(5, 5);
    let snake = snake_row(3);

    // (1,0) is on the snake and is rejected; (4,2) is free.
    let mut rng = Scripted::new(&[1, 0, 4, 2]);
    assert_eq!(place_food(&board, &snake, &mut rng), Some(Point::new(4, 2)));
}

#[test]
fn test_seeded_placement_is_reproducible() {
    let board = Board::new(20, 15);
    let snake = snake_row(6);

    let a = place_food(&board, &snake, &mut SimpleRng::new(31337));
    let b = place_food(&board, &snake, &mut SimpleRng::new(31337));
    assert_eq!(a, b);
}

#[test]
fn test_placement_never_hits_snake_on_crowded_board() {
    // 4x2 board with a 7-long snake: exactly one free cell, (3,1).
    let board = Board::new(4, 2);
    let snake = Snake::from_segments(
        Point::new(2, 1),
        [
            Point::new(1, 1),
            Point::new(0, 1),
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
        ],
        Direction::Left,
    );

    for seed in 0..50 {
        let food = place_food(&board, &snake, &mut SimpleRng::new(seed));
        assert_eq!(food, Some(Point::new(3, 1)), "seed {}", seed);
    }
}

#[test]
fn test_every_new_game_places_food_off_the_snake() {
    for seed in 0..200 {
        let game = Game::with_seed(Board::new(20, 15), seed);
        let food = game.food().expect("food on an empty board");
        assert!(game.board().in_bounds(food));
        assert!(!game.snake().occupies(food));
    }
}

#[test]
fn test_placement_reaches_every_free_cell() {
    let board = Board::new(3, 3);
    let snake = Snake::new(board.center(), Direction::Right);
    let mut rng = SimpleRng::new(5);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..500 {
        seen.insert(place_food(&board, &snake, &mut rng).unwrap());
    }

    assert_eq!(seen.len(), 8);
    assert!(!seen.contains(&Point::new(1, 1)));
}
