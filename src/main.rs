//! Terminal Tetris runner (default binary).
//!
//! Owns one session at a time, feeds it key presses and gravity steps, and
//! redraws every tick through the framebuffer renderer.

mod config;
mod logging;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use mini_tetris::core::{GameSnapshot, Session, SimpleRng, StepOutcome};
use mini_tetris::input::{handle_key_event, should_quit, KeyAction};
use mini_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

use config::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref(), config.log_level)?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::logger().flush();
    result
}

fn new_session(config: &Config) -> Result<Session> {
    let seed = config.seed.unwrap_or_else(wall_clock_seed);
    let mut session = Session::new(SimpleRng::default())?;
    session.start(seed)?;
    Ok(session)
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = new_session(config)?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick = config.tick();
    let gravity = config.gravity();
    let mut last_tick = Instant::now();
    let mut last_gravity = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(KeyAction::Move(direction)) => {
                            report(session.apply(direction));
                        }
                        Some(KeyAction::Restart) if !session.is_running() => {
                            session = new_session(config)?;
                            last_gravity = Instant::now();
                        }
                        _ => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
        }

        if let Some(interval) = gravity {
            if session.is_running() && last_gravity.elapsed() >= interval {
                last_gravity = Instant::now();
                report(session.step_down());
            }
        }
    }
}

fn report(outcome: StepOutcome) {
    match outcome {
        StepOutcome::Locked { lines_cleared } if lines_cleared > 0 => {
            debug!("cleared {} line(s)", lines_cleared);
        }
        StepOutcome::GameOver { .. } => info!("game over"),
        _ => {}
    }
}
