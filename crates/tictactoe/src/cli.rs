//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $TICTACTOE_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Where the terminal UI writes its log
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Front end to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full-screen terminal UI with keyboard and mouse
    Tui(PlayArgs),

    /// Line-oriented console game on stdin/stdout
    Console(PlayArgs),
}

/// Options shared by every front end.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Name of the first player
    #[arg(long)]
    pub first_name: Option<String>,

    /// Name of the second player
    #[arg(long)]
    pub second_name: Option<String>,
}

impl Cli {
    /// The chosen command, with the terminal UI as default.
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Tui(PlayArgs::default()))
    }
}

impl Command {
    /// The player options of this command.
    pub fn play_args(&self) -> &PlayArgs {
        match self {
            Command::Tui(args) | Command::Console(args) => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command_or_default(), Command::Tui(PlayArgs::default()));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_console_with_names() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "console",
            "--first-name",
            "Ada",
            "--second-name",
            "Grace",
            "--config",
            "game.toml",
        ])
        .unwrap();
        let command = cli.command_or_default();
        assert!(matches!(command, Command::Console(_)));
        assert_eq!(command.play_args().first_name.as_deref(), Some("Ada"));
        assert_eq!(command.play_args().second_name.as_deref(), Some("Grace"));
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "server"]).is_err());
    }
}
