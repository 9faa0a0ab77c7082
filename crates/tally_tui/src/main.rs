//! Tally - terminal front end for two players sharing one keyboard.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod screen;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::TuiConfig;
use terminal::Tui;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = TuiConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    init_tracing(&config)?;
    info!(log_file = %config.log_file().display(), "Starting tally");

    let app = App::new(config.player_one(), config.player_two());

    let app = {
        let (mut terminal, _guard) = terminal::setup()?;
        run_app(&mut terminal, app)?
    };

    let session = app.session();
    info!(
        rounds = session.rounds_completed(),
        player_one = session.score().player_one(),
        player_two = session.score().player_two(),
        draws = session.score().draws(),
        "Exiting"
    );

    if cli.summary {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    }

    Ok(())
}

/// Sends logs to the configured file; the terminal belongs to the UI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App) -> Result<App> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(app)
}
