mod apple;
mod bombs;
mod command;
mod config;
mod consts;
mod game;
mod grid;
mod haus;
mod placement;
mod portal;
mod render;
mod snek;
mod sound;

use crate::command::Command;
use crate::config::Cli;
use crate::game::{Game, Phase};
use crate::placement::PlacementError;
use crate::sound::{AudioPlayer, TerminalBell};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::prelude::*;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("could not set up the board: {0}")]
    Placement(#[from] PlacementError),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // Set up logging before anything else
    WriteLogger::init(
        cli.log_level(),
        Config::default(),
        File::create(&cli.log_file)?,
    )
    .expect("Failed to initialize logger");

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let size = cli.grid_size();
    info!(
        "Starting portal-snek on a {}x{} grid, seed {}",
        size.width, size.height, seed
    );
    let mut game = Game::new(size, ChaCha8Rng::seed_from_u64(seed))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut bell = TerminalBell::new(io::stdout());
    let result = run(&mut terminal, &mut game, &mut bell);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Stopped: {}", e);
    }
    info!("Bye");
    result
}

/// Draw, drain input until the tick is due, tick, repeat.
fn run<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    game: &mut Game<R>,
    audio: &mut impl AudioPlayer,
) -> Result<(), AppError> {
    let mut last_tick = Instant::now();

    loop {
        let scene = game.scene();
        terminal.draw(|f| f.render_widget(&scene, f.area()))?;

        // Every key pressed before the deadline lands before the tick
        let tick_rate = game.settings().tick_delay();
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = Command::from_key_event(key) {
                    game.handle_command(command);
                }
            }
        }

        if game.phase() == Phase::Exit {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            game.update()?;
            for sound in game.take_sounds() {
                audio.play(sound);
            }
            last_tick = Instant::now();
        }
    }

    Ok(())
}
