//! Tick/input scheduler.
//!
//! One control loop owns the [`Game`] and consumes two producers: the input
//! channel fed by the reader thread and a fixed-interval timer. `select!`
//! takes whichever is ready; when both are ready at once the branch is picked
//! at random, so neither source has priority. All game mutation happens here,
//! one event at a time.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info, trace};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::{Game, GameSnapshot, RandomSource, StepOutcome};
use crate::types::InputEvent;

/// Receives a snapshot after every step.
///
/// Errors end the session; they never feed back into the game.
pub trait Present {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()>;
}

/// Why [`run_session`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// The player pressed quit
    Quit,
    /// The input channel closed (end of input or reader failure)
    InputClosed,
}

/// Drive `game` until the player quits.
///
/// The current state is presented once up front. After that:
/// - a direction event goes to [`Game::handle_direction`] (no step, no frame)
/// - a tick runs one [`Game::step`] and presents one frame
/// - once the game is over, ticking stops and only quit is accepted
pub async fn run_session<R, P>(
    game: &mut Game<R>,
    input: &mut UnboundedReceiver<InputEvent>,
    tick: Duration,
    screen: &mut P,
) -> Result<SessionExit>
where
    R: RandomSource,
    P: Present + ?Sized,
{
    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);
    screen.present(&snap)?;

    if game.game_over() {
        info!("[Session] game already over at start ({:?})", game.status());
        return wait_for_quit(input).await;
    }

    let mut ticker = time::interval_at(Instant::now() + tick, tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            event = input.recv() => match event {
                Some(InputEvent::Quit) => {
                    info!("[Session] quit with score {}", game.score());
                    return Ok(SessionExit::Quit);
                }
                Some(InputEvent::Direction(dir)) => {
                    let accepted = game.handle_direction(dir);
                    trace!("[Session] heading {} accepted={}", dir.as_str(), accepted);
                }
                None => {
                    info!("[Session] input closed");
                    return Ok(SessionExit::InputClosed);
                }
            },
            _ = ticker.tick() => {
                let outcome = game.step();
                debug!(
                    "[Session] step {:?} head={:?} score={}",
                    outcome,
                    game.snake().head(),
                    game.score()
                );

                game.snapshot_into(&mut snap);
                screen.present(&snap)?;

                if let StepOutcome::Over(cause) = outcome {
                    info!(
                        "[Session] game over ({}) score={} length={}",
                        cause.as_str(),
                        game.score(),
                        game.snake().len()
                    );
                    return wait_for_quit(input).await;
                }
            }
        }
    }
}

/// After game over: drain input until quit, ignoring everything else.
async fn wait_for_quit(input: &mut UnboundedReceiver<InputEvent>) -> Result<SessionExit> {
    while let Some(event) = input.recv().await {
        if event == InputEvent::Quit {
            return Ok(SessionExit::Quit);
        }
        trace!("[Session] ignoring {:?} after game over", event);
    }
    Ok(SessionExit::InputClosed)
}
