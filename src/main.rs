use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod game;
mod input;
mod output;

use crate::game::quiz::definition::QuestionBank;
use crate::game::settings::Settings;
use crate::game::Game;
use crate::input::InputEvent;
use crate::output::terminal::TerminalOutput;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut settings = Settings::from_env()?;
    if let Some(source) = std::env::args_os().nth(1) {
        settings.source = PathBuf::from(source);
    }
    info!("Starting quiz with {:?}", settings);

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let bank = QuestionBank::open(&settings.source);
    let mut game = Game::new(settings, TerminalOutput::new());
    game.load(bank, &mut rng);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    while !game.is_over() {
        let line = match lines.next() {
            Some(line) => line.context("Could not read player input")?,
            None => break,
        };
        game.handle(InputEvent::interpret(&line, game.phase()));
    }

    Ok(())
}
