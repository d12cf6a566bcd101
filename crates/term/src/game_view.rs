//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the bordered board, a score line, a status line.
//! The block is centred horizontally and anchored vertically per [`AnchorY`].

use crate::core::{GameOverCause, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const HEAD_GLYPH: char = '●';
pub const BODY_GLYPH: char = '○';
pub const FOOD_GLYPH: char = '◆';

const HELP_LINE: &str = "Use arrow keys to move, Q to quit";
const GAME_OVER_LINE: &str = "Game Over! Press Q to quit...";
const BOARD_FULL_LINE: &str = "You filled the board! Press Q to quit...";

/// Rows below the board frame: score and status.
const TEXT_ROWS: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders snake frames.
#[derive(Debug, Clone)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

/// The line shown under the score.
pub fn status_line(snap: &GameSnapshot) -> &'static str {
    match snap.cause() {
        None => HELP_LINE,
        Some(GameOverCause::BoardFull) => BOARD_FULL_LINE,
        Some(_) => GAME_OVER_LINE,
    }
}

/// Left column for a text row: aligned with the frame, shifted left when the
/// line would otherwise run past the viewport edge.
fn text_x(frame_x: u16, viewport_w: u16, line: &str) -> u16 {
    let line_w = u16::try_from(line.chars().count()).unwrap_or(u16::MAX);
    frame_x.min(viewport_w.saturating_sub(line_w))
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board_w = snap.width.max(0) as u16;
        let board_h = snap.height.max(0) as u16;
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + TEXT_ROWS) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        let body = CellStyle::fg(Rgb::new(80, 200, 120));
        let head = CellStyle::fg(Rgb::new(140, 255, 170)).with_bold();
        let food = CellStyle::fg(Rgb::new(240, 80, 80)).with_bold();
        let dead = CellStyle::fg(Rgb::new(150, 150, 150));

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Board cell (x, y) lives at (start_x + 1 + x, start_y + 1 + y).
        let put = |fb: &mut FrameBuffer, x: i32, y: i32, ch: char, style: CellStyle| {
            if x < 0 || y < 0 || x >= snap.width || y >= snap.height {
                return;
            }
            fb.put_char(start_x + 1 + x as u16, start_y + 1 + y as u16, ch, style);
        };

        if let Some(p) = snap.food {
            put(fb, p.x, p.y, FOOD_GLYPH, food);
        }

        let over = snap.game_over();
        // Tail first so the head wins if segments ever overlap on screen.
        for (i, seg) in snap.body.iter().enumerate().rev() {
            let (ch, style) = if i == 0 {
                (HEAD_GLYPH, if over { dead.with_bold() } else { head })
            } else {
                (BODY_GLYPH, if over { dead } else { body })
            };
            put(fb, seg.x, seg.y, ch, style);
        }

        let text_y = start_y.saturating_add(frame_h);
        let score = format!("Score: {}", snap.score);
        let score_x = text_x(start_x, viewport.width, &score);
        fb.put_str(score_x, text_y, &score, CellStyle::default().with_bold());

        let status = status_line(snap);
        let status_style = if over { food } else { CellStyle::default() };
        let status_x = text_x(start_x, viewport.width, status);
        fb.put_str(status_x, text_y.saturating_add(1), status, status_style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '╔', style);
        fb.put_char(right, y, '╗', style);
        fb.put_char(x, bottom, '╚', style);
        fb.put_char(right, bottom, '╝', style);

        for cx in x + 1..right {
            fb.put_char(cx, y, '═', style);
            fb.put_char(cx, bottom, '═', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '║', style);
            fb.put_char(right, cy, '║', style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::types::Point;

    #[test]
    fn status_line_follows_cause() {
        let mut snap = GameSnapshot::default();
        assert_eq!(status_line(&snap), HELP_LINE);

        snap.status = Status::GameOver(GameOverCause::Wall);
        assert_eq!(status_line(&snap), GAME_OVER_LINE);

        snap.status = Status::GameOver(GameOverCause::BoardFull);
        assert_eq!(status_line(&snap), BOARD_FULL_LINE);
    }

    #[test]
    fn head_drawn_over_body() {
        let mut snap = GameSnapshot::default();
        snap.width = 4;
        snap.height = 1;
        snap.body = vec![Point::new(1, 0), Point::new(0, 0)];

        let fb = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&snap, Viewport::new(6, 5));

        assert_eq!(fb.row_text(1), "║○●  ║");
    }
}
