//! Terminal block-drop runner (default binary).
//!
//! Owns everything the simulation does not: the frame governor, key polling,
//! logging setup and the terminal itself.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use block_drop::core::{GameSession, GameSnapshot};
use block_drop::input::handle_key_event;
use block_drop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use block_drop::types::DEFAULT_FRAME_MS;

#[derive(Debug, Parser)]
#[command(name = "block-drop", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, help = "Seed for the first session (defaults to the system clock)")]
    seed: Option<u32>,

    #[arg(long, default_value_t = DEFAULT_FRAME_MS, help = "Milliseconds between frames")]
    frame_ms: u64,

    #[arg(long, help = "Write logs to this file (the terminal is taken by the game)")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();

    info!("Logging initialized at level: {}", level);
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let frame = Duration::from_millis(cli.frame_ms.max(1));
    let mut seed = cli.seed.unwrap_or_else(clock_seed);
    let mut session = GameSession::new(seed);
    info!(seed, frame_ms = cli.frame_ms, "starting");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    session.apply_action(handle_key_event(key));
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if session.quit_requested() {
            info!(
                locked_pieces = session.locked_pieces(),
                lines_cleared = session.lines_cleared(),
                "quitting"
            );
            return Ok(());
        }

        let elapsed = last_frame.elapsed();
        if elapsed < frame {
            continue;
        }
        last_frame = Instant::now();

        let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        session.tick(elapsed_ms);

        if session.finished() {
            seed = seed.wrapping_add(1);
            info!(seed, "back to menu");
            session = GameSession::new(seed);
        }

        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
