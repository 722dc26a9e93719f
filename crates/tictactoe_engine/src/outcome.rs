//! Game outcomes and the engine's phase.

use super::players::Player;
use super::types::Coordinate;
use serde::{Deserialize, Serialize};

/// Ordered coordinates of a row, column or diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinningLine(Vec<Coordinate>);

impl WinningLine {
    /// Wraps an ordered list of coordinates.
    pub fn new(cells: Vec<Coordinate>) -> Self {
        Self(cells)
    }

    /// The coordinates, in enumeration order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.0
    }

    /// Returns true if the line passes through `at`.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.0.contains(&at)
    }
}

impl From<Vec<Coordinate>> for WinningLine {
    fn from(cells: Vec<Coordinate>) -> Self {
        Self(cells)
    }
}

/// Decided or undecided result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves are still expected.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winner.
        player: Player,
        /// The completed line, for highlighting.
        line: WinningLine,
    },
    /// Board full with no completed line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameOutcome::Won { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameOutcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won { player, .. } => write!(f, "{} wins", player.name()),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Phase of the engine's state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Waiting for the active player to move.
    AwaitingMove,
    /// Terminal: the outcome is always `Won` or `Draw`.
    Finished(GameOutcome),
}
