//! Jump Dino entry point
//!
//! Runs the game in the terminal. An optional first argument names a file or
//! FIFO the pose detector writes signals to; `JUMP_DINO_TUNING` may point at
//! a JSON balance override. Logs go to stderr, so redirect it when raising
//! `RUST_LOG`.

use std::io;
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event};

use jump_dino::consts::MAX_FRAME_DT;
use jump_dino::platform::{FeedSource, KeyAction, KeyboardSource, map_key};
use jump_dino::renderer::TerminalRenderer;
use jump_dino::sim::{GameEvent, GameSession, TickInput};
use jump_dino::{SignalSource, Tuning};

/// ~60 fps frame pacing
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();
    log::info!("Jump Dino starting...");

    if let Err(e) = run() {
        log::error!("Fatal: {}", e);
        eprintln!("jump-dino: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let tuning = std::env::var_os("JUMP_DINO_TUNING")
        .map(|path| Tuning::load_or_default(Path::new(&path)))
        .unwrap_or_default();

    // Opening a FIFO blocks until the detector starts writing
    let mut feed = match std::env::args_os().nth(1) {
        Some(path) => Some(FeedSource::open(Path::new(&path))?),
        None => None,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut session = GameSession::new(seed, tuning);
    let mut keyboard = KeyboardSource::default();
    let mut renderer = TerminalRenderer::new()?;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let mut restart = false;

        // Input
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match map_key(&key) {
                    Some(KeyAction::Quit) => return renderer.restore(),
                    Some(KeyAction::Restart) => restart = true,
                    Some(KeyAction::Signal(signal)) => {
                        if session.is_game_over() && signal.is_jump() {
                            restart = true;
                        } else {
                            keyboard.press(signal);
                        }
                    }
                    None => {}
                },
                Event::Resize(cols, rows) => renderer.resize(cols, rows),
                _ => {}
            }
        }

        // Update
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
        last = now;

        let mut signal = keyboard.poll(dt);
        if let Some(feed) = feed.as_mut() {
            signal = signal.merge(feed.poll(dt));
        }

        let outcome = session.step(dt, &TickInput { signal, restart });
        for event in &outcome.events {
            match event {
                GameEvent::Collided { .. } => log::info!("Run over with score {}", outcome.score),
                GameEvent::Restarted => log::info!("Restarted"),
                _ => log::trace!("{:?}", event),
            }
        }

        // Render
        renderer.render(&session.snapshot())?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
