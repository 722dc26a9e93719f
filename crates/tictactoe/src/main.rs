//! tictactoe - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe::{
    ConsoleFrontend, GameConfig,
    cli::{Cli, Command},
    run_tui,
};
use tictactoe_engine::{GameEngine, Orchestrator};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command_or_default();
    let args = command.play_args().clone();

    let config = GameConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(args.first_name, args.second_name, cli.log_file);

    match command {
        Command::Tui(_) => run_tui(&config),
        Command::Console(_) => run_console(&config),
    }
}

/// Plays on stdin/stdout, logging to stderr.
fn run_console(config: &GameConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting console game");

    let engine = GameEngine::new(config.registry()?);
    let stdin = io::stdin();
    let frontend = ConsoleFrontend::new(stdin.lock(), io::stdout());
    Orchestrator::new(engine, frontend)
        .run()
        .context("Console game failed")?;

    Ok(())
}
