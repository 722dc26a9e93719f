//! Tic-tac-toe game engine.
//!
//! Pure game logic with no terminal or file IO.
//!
//! # Architecture
//!
//! - **Cell / Board**: the grid and the move-legality rule
//! - **PlayerRegistry**: the two players and whose turn it is
//! - **rules**: win and draw detection over board snapshots
//! - **GameEngine**: the turn state machine; `attempt_move` is its only move entry point
//! - **Orchestrator**: feeds a front end's commands through the engine
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameOutcome, MoveOutcome};
//!
//! let mut engine = GameEngine::default();
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     engine.attempt_move(row, column).unwrap();
//! }
//! let result = engine.attempt_move(0, 2).unwrap();
//! assert!(matches!(result, MoveOutcome::Finished(GameOutcome::Won { .. })));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod collaborators;
mod engine;
mod orchestrator;
mod outcome;
mod players;
pub mod rules;
mod types;

pub use action::{MoveError, MoveOutcome, SetupError};
pub use board::{Board, BoardSnapshot, STANDARD_SIZE};
pub use cell::Cell;
pub use collaborators::{GameEvent, InputAdapter, InputCommand, Renderer};
pub use engine::{GameEngine, GameView};
pub use orchestrator::Orchestrator;
pub use outcome::{EngineState, GameOutcome, WinningLine};
pub use players::{DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, Player, PlayerRegistry};
pub use types::{Coordinate, Marker, MarkerValue, PlayerId};
