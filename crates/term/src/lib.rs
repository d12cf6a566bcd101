//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. Snapshots are rendered into a
//! framebuffer by the pure [`GameView`], and [`TerminalRenderer`] flushes that
//! framebuffer to the real terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep glyph layout testable without a terminal
//! - Only rewrite what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{status_line, AnchorY, GameView, Viewport, BODY_GLYPH, FOOD_GLYPH, HEAD_GLYPH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
