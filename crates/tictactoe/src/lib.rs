//! Tic-tac-toe front ends: a full-screen terminal UI and a line console.
//!
//! Both front ends drive a [`tictactoe_engine::GameEngine`] through
//! [`tictactoe_engine::Orchestrator`]; this crate adds configuration,
//! status text and the terminal plumbing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod status;
pub mod tui;

pub use config::{CONFIG_ENV_VAR, ConfigError, GameConfig};
pub use console::ConsoleFrontend;
pub use tui::{TerminalFrontend, run_tui};
