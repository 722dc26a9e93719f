//! Draw detection logic for tic-tac-toe.

use crate::board::BoardSnapshot;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &BoardSnapshot) -> bool {
    board.grid().flatten().all(|cell| !cell.is_empty())
}
