//! Terminal Snake runner (default binary).
//!
//! Raw keyboard bytes are read on a background thread and decoded into
//! events; the session loop merges them with a fixed-rate tick and renders a
//! framebuffer after every step.

use std::io;

use anyhow::Result;
use log::info;
use tokio::sync::mpsc;

use tui_snake::core::{Game, GameSnapshot};
use tui_snake::engine::{run_session, Present, SessionConfig, SessionExit};
use tui_snake::input::spawn_reader;
use tui_snake::logging;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Terminal output: view + framebuffer + renderer.
struct Screen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl Screen {
    fn new() -> Self {
        Self {
            term: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }
}

impl Present for Screen {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.term.draw(&self.fb)
    }
}

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    logging::init(&config)?;

    let mut screen = Screen::new();
    screen.term.enter()?;

    let result = run(&config, &mut screen);

    // Always try to restore terminal state.
    let _ = screen.term.exit();

    let exit = result?;
    info!("[Main] session ended: {:?}", exit);
    Ok(())
}

fn run(config: &SessionConfig, screen: &mut Screen) -> Result<SessionExit> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let seed = config.seed_or_clock();
    info!(
        "[Main] starting {}x{} board, tick {}ms, seed {}",
        config.width, config.height, config.tick_ms, seed
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    // Detached: a blocking terminal read cannot be interrupted, so the thread
    // ends with the process.
    let _reader = spawn_reader(io::stdin(), tx)?;

    let mut game = Game::with_seed(config.board(), seed);
    runtime.block_on(run_session(&mut game, &mut rx, config.tick(), screen))
}
