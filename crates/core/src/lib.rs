//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can be driven by any loop (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`board`]: fixed grid geometry and bounds checking
//! - [`snake`]: ordered body segments and heading
//! - [`food`]: uniform placement on a free cell
//! - [`steer`]: no-reverse rule for heading requests
//! - [`game_state`]: the step function, collisions, score and game over
//! - [`rng`]: seedable random source
//! - [`snapshot`]: read-only copy handed to renderers
//!
//! # Game Rules
//!
//! - The snake starts with one segment at the board centre, heading right
//! - Every step moves the head one cell; the tail follows unless food was eaten
//! - Eating scores one point and places new food on a free cell
//! - Leaving the board or touching any body cell (tail included) ends the game
//! - A heading request that points straight back is ignored
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Board, Game, StepOutcome};
//! use tui_snake_types::{Direction, Point};
//!
//! let mut game = Game::with_seed(Board::new(20, 15), 12345);
//! assert_eq!(game.snake().head(), Point::new(10, 7));
//!
//! game.handle_direction(Direction::Down);
//! let outcome = game.step();
//! assert!(matches!(outcome, StepOutcome::Moved | StepOutcome::Ate));
//! assert_eq!(game.snake().head(), Point::new(10, 8));
//! ```

pub mod board;
pub mod food;
pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod steer;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use food::place_food;
pub use game_state::{Game, GameOverCause, Status, StepOutcome};
pub use rng::{RandomSource, SimpleRng};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use steer::route;
