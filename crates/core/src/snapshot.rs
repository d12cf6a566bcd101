use crate::game_state::{GameOverCause, Status};
use crate::types::{Direction, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only view of a game, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    /// Segments head first
    pub body: Vec<Point>,
    pub heading: Direction,
    pub food: Option<Point>,
    pub score: u32,
    pub status: Status,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = BOARD_WIDTH;
        self.height = BOARD_HEIGHT;
        self.body.clear();
        self.heading = Direction::Right;
        self.food = None;
        self.score = 0;
        self.status = Status::Running;
    }

    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn game_over(&self) -> bool {
        matches!(self.status, Status::GameOver(_))
    }

    pub fn cause(&self) -> Option<GameOverCause> {
        match self.status {
            Status::GameOver(cause) => Some(cause),
            Status::Running => None,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            body: Vec::new(),
            heading: Direction::Right,
            food: None,
            score: 0,
            status: Status::Running,
        }
    }
}
