//! Game state module - the snake game state machine
//!
//! This module ties together the board, the snake, food placement and the
//! heading router. [`Game::step`] advances the game by exactly one cell and is
//! the only place the snake moves, grows or dies.

use crate::board::Board;
use crate::food::place_food;
use crate::rng::{RandomSource, SimpleRng};
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::steer::route;
use crate::types::{Direction, Point};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverCause {
    /// The head left the board
    Wall,
    /// The head ran into the body (the tail cell counts)
    SelfCollision,
    /// The snake covers every cell; there is nowhere left for food
    BoardFull,
}

impl GameOverCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverCause::Wall => "wall",
            GameOverCause::SelfCollision => "self_collision",
            GameOverCause::BoardFull => "board_full",
        }
    }
}

/// Lifecycle of a game. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    GameOver(GameOverCause),
}

/// What a single [`Game::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one cell at constant length
    Moved,
    /// Moved onto the food, grew by one and scored
    Ate,
    /// This step ended the game
    Over(GameOverCause),
    /// The game was already over; nothing changed
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    board: Board,
    snake: Snake,
    food: Option<Point>,
    score: u32,
    status: Status,
    rng: R,
}

impl Game<SimpleRng> {
    /// New game on `board` using the built-in generator seeded with `seed`
    pub fn with_seed(board: Board, seed: u32) -> Self {
        Self::new(board, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Start a game: one-segment snake at the board centre heading right,
    /// food on a random free cell.
    pub fn new(board: Board, rng: R) -> Self {
        let snake = Snake::new(board.center(), Direction::Right);
        let mut game = Self {
            board,
            snake,
            food: None,
            score: 0,
            status: Status::Running,
            rng,
        };
        game.respawn_food();
        game
    }

    /// Assemble a game from explicit parts.
    ///
    /// Used to set up scenarios (a given body, a given food cell). The caller
    /// is responsible for the parts being consistent: the snake inside the
    /// board and the food off the snake.
    pub fn from_parts(board: Board, snake: Snake, food: Option<Point>, rng: R) -> Self {
        Self {
            board,
            snake,
            food,
            score: 0,
            status: Status::Running,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn game_over(&self) -> bool {
        matches!(self.status, Status::GameOver(_))
    }

    /// Apply a heading request from the player.
    ///
    /// Ignored once the game is over and when it would reverse the snake.
    /// Returns whether the heading was taken.
    pub fn handle_direction(&mut self, requested: Direction) -> bool {
        if self.game_over() {
            return false;
        }
        match route(self.snake.heading(), requested) {
            Some(heading) => {
                self.snake.set_heading(heading);
                true
            }
            None => false,
        }
    }

    /// Advance the game by one cell in the current heading.
    pub fn step(&mut self) -> StepOutcome {
        if self.game_over() {
            return StepOutcome::Idle;
        }

        let new_head = self.snake.head().step(self.snake.heading());

        if !self.board.in_bounds(new_head) {
            return self.finish(GameOverCause::Wall);
        }

        // Checked before the tail moves: the cell it is about to vacate still counts.
        if self.snake.occupies(new_head) {
            return self.finish(GameOverCause::SelfCollision);
        }

        if self.food == Some(new_head) {
            self.snake.advance(new_head, true);
            self.score += 1;
            if !self.respawn_food() {
                return self.finish(GameOverCause::BoardFull);
            }
            StepOutcome::Ate
        } else {
            self.snake.advance(new_head, false);
            StepOutcome::Moved
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.body.clear();
        out.body.extend(self.snake.segments());
        out.heading = self.snake.heading();
        out.food = self.food;
        out.score = self.score;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Place new food; ends the game when the board is full.
    fn respawn_food(&mut self) -> bool {
        self.food = place_food(&self.board, &self.snake, &mut self.rng);
        if self.food.is_none() {
            self.status = Status::GameOver(GameOverCause::BoardFull);
        }
        self.food.is_some()
    }

    fn finish(&mut self, cause: GameOverCause) -> StepOutcome {
        self.status = Status::GameOver(cause);
        StepOutcome::Over(cause)
    }
}

impl Default for Game<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(Board::default(), 1)
    }
}
