//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any terminal library. It
//! decodes the raw bytes a terminal in raw mode delivers into
//! [`crate::types::InputEvent`]s and runs the blocking reader thread that feeds
//! them to the control loop.

pub mod decode;
pub mod reader;

pub use tui_snake_types as types;

pub use decode::InputDecoder;
pub use reader::{read_loop, spawn_reader, READ_CHUNK};
