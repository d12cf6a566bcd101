//! Engine module - runs a game session.
//!
//! Merges the timer and the keyboard into one serialized stream of game
//! updates ([`run_session`]) and reads its settings from the environment
//! ([`SessionConfig`]). Rendering stays behind the [`Present`] trait so the
//! loop can be driven headless in tests.

pub mod config;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::SessionConfig;
pub use session::{run_session, Present, SessionExit};
