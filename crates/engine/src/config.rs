//! Session configuration from environment variables.
//!
//! - `SNAKE_WIDTH` / `SNAKE_HEIGHT`: board size (default 20 x 15)
//! - `SNAKE_TICK_MS`: step interval (default 200)
//! - `SNAKE_SEED`: fixed RNG seed; unset means a clock-derived seed
//! - `SNAKE_LOG_PATH`: write a log file here; unset means no logging
//!
//! Missing, empty or unparseable values fall back to the default.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: i32,
    pub height: i32,
    pub tick_ms: u64,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<i64>().ok());

        let width = parsed("SNAKE_WIDTH")
            .filter(|&w| (1..=i64::from(u16::MAX) - 2).contains(&w))
            .map_or(defaults.width, |w| w as i32);
        let height = parsed("SNAKE_HEIGHT")
            .filter(|&h| (1..=i64::from(u16::MAX) - 4).contains(&h))
            .map_or(defaults.height, |h| h as i32);
        let tick_ms = parsed("SNAKE_TICK_MS")
            .filter(|&t| t >= 1)
            .map_or(defaults.tick_ms, |t| t as u64);
        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse::<u32>().ok());
        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            width,
            height,
            tick_ms,
            seed,
            log_path,
        }
    }

    pub fn board(&self) -> Board {
        Board::new(self.width, self.height)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
