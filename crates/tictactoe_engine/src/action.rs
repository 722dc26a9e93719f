//! Move results and the errors a move or a setup can produce.
//!
//! Rejections are ordinary values. None of them is fatal: the engine stays in
//! a consistent state and the caller decides how to present the problem.

use super::outcome::GameOutcome;
use super::players::Player;
use super::types::{Coordinate, Marker};
use serde::{Deserialize, Serialize};

/// Result of a successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game goes on; carries the player whose turn it now is.
    Continued(Player),
    /// The move decided the game.
    Finished(GameOutcome),
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("Coordinate ({row}, {column}) is outside the board")]
    InvalidCoordinate {
        /// Requested row.
        row: i32,
        /// Requested column.
        column: i32,
    },

    /// The target cell already holds a marker.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Coordinate),

    /// The game has been decided; start a new one to keep playing.
    #[display("Game is already finished")]
    GameAlreadyFinished,
}

impl MoveError {
    /// True for rejections caused by the coordinate itself (out of bounds or occupied).
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            MoveError::InvalidCoordinate { .. } | MoveError::CellOccupied(_)
        )
    }
}

impl std::error::Error for MoveError {}

/// Error building players or a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Both players were given the same marker.
    #[display("Both players use the marker '{_0}'")]
    DuplicateMarker(Marker),

    /// The marker character cannot be drawn.
    #[display("Marker {_0:?} must be a single visible character")]
    InvalidMarker(char),

    /// A board needs at least one row and one column.
    #[display("Board dimensions {rows}x{columns} must both be at least 1")]
    EmptyBoard {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        columns: usize,
    },

    /// A grid's cell list does not match its dimensions.
    #[display("A {rows}x{columns} board cannot hold {found} cells")]
    CellCountMismatch {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        columns: usize,
        /// Cells actually present.
        found: usize,
    },

    /// A cell has a marker without an owner, or an owner without a marker.
    #[display("Cell marker and owner must be set together")]
    OwnerMismatch,
}

impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_grouping() {
        assert!(MoveError::InvalidCoordinate { row: -1, column: 0 }.is_invalid_move());
        assert!(MoveError::CellOccupied(Coordinate::new(1, 1)).is_invalid_move());
        assert!(!MoveError::GameAlreadyFinished.is_invalid_move());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied(Coordinate::new(1, 2)).to_string(),
            "Cell (1, 2) is already occupied"
        );
        assert_eq!(
            MoveError::InvalidCoordinate { row: 3, column: -1 }.to_string(),
            "Coordinate (3, -1) is outside the board"
        );
        assert_eq!(
            SetupError::DuplicateMarker(Marker::X).to_string(),
            "Both players use the marker 'X'"
        );
    }
}
