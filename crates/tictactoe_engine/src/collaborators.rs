//! Seams between the engine and whatever draws the game or reads input.
//!
//! The engine knows nothing about terminals, windows or events. Front ends
//! translate their raw input into [`InputCommand`]s and paint [`GameView`]s.

use super::action::{MoveError, MoveOutcome};
use super::engine::GameView;
use super::players::Player;
use super::types::Coordinate;
use serde::{Deserialize, Serialize};
use std::io;

/// A request coming from the player(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    /// Place the active player's marker.
    Move {
        /// Requested row (may be out of range; the engine validates).
        row: i32,
        /// Requested column.
        column: i32,
    },
    /// Abandon the current game and start over.
    NewGame,
    /// Rename both players.
    SetNames {
        /// New name for the first player.
        first: String,
        /// New name for the second player.
        second: String,
    },
    /// Stop playing.
    Quit,
}

/// What just happened, delivered alongside the view to be painted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The session opened; nothing has been played yet.
    Started,
    /// A move was applied.
    MoveApplied {
        /// Who moved.
        by: Player,
        /// Where.
        at: Coordinate,
        /// What the move led to.
        outcome: MoveOutcome,
    },
    /// A move was refused; the game state did not change.
    MoveRejected(MoveError),
    /// Player names changed.
    NamesChanged,
    /// The board was cleared for a new game.
    NewGame,
}

/// Source of player commands.
pub trait InputAdapter {
    /// Blocks until the next command is available.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn next_command(&mut self) -> io::Result<Option<InputCommand>>;
}

/// Presents the game to the players.
pub trait Renderer {
    /// Paints `view`; `event` says what changed since the last call.
    fn render(&mut self, view: &GameView, event: &GameEvent) -> io::Result<()>;
}
