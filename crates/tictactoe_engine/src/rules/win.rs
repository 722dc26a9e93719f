//! Win detection logic for tic-tac-toe.

use crate::board::BoardSnapshot;
use crate::outcome::WinningLine;
use crate::types::{Coordinate, MarkerValue, PlayerId};
use tracing::instrument;

/// What the rules say about a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No completed line and at least one empty cell.
    InProgress,
    /// The owner of a completed line.
    Won {
        /// Owner of the line's cells.
        owner: PlayerId,
        /// The first completed line in enumeration order.
        line: WinningLine,
    },
    /// Every cell occupied, no completed line.
    Draw,
}

/// Enumerates every line that can win on a `rows x columns` board.
///
/// Order: rows top to bottom, columns left to right, then the descending
/// diagonal and the ascending diagonal. Diagonals exist only on square
/// boards, so an N x N board yields `2N + 2` lines.
#[instrument]
pub fn lines(rows: usize, columns: usize) -> Vec<WinningLine> {
    let mut lines: Vec<WinningLine> = Vec::with_capacity(rows + columns + 2);

    for row in 0..rows {
        lines.push((0..columns).map(|c| Coordinate::new(row, c)).collect::<Vec<_>>().into());
    }
    for column in 0..columns {
        lines.push((0..rows).map(|r| Coordinate::new(r, column)).collect::<Vec<_>>().into());
    }
    if rows == columns {
        let n = rows;
        lines.push((0..n).map(|i| Coordinate::new(i, i)).collect::<Vec<_>>().into());
        lines.push((0..n).map(|i| Coordinate::new(i, n - 1 - i)).collect::<Vec<_>>().into());
    }

    lines
}

/// Returns the owner if every cell of `line` carries the same marker.
///
/// A line with any empty cell never wins.
fn completed_by(board: &BoardSnapshot, line: &WinningLine) -> Option<PlayerId> {
    let (first, rest) = line.cells().split_first()?;
    let head = board.cell(*first)?;
    let MarkerValue::Placed(marker) = head.marker() else {
        return None;
    };
    let uniform = rest.iter().all(|at| {
        board
            .cell(*at)
            .is_some_and(|cell| cell.marker() == MarkerValue::Placed(marker))
    });
    if uniform { head.owner() } else { None }
}

fn verdict_from(board: &BoardSnapshot, candidates: impl IntoIterator<Item = WinningLine>) -> Verdict {
    for line in candidates {
        if let Some(owner) = completed_by(board, &line) {
            return Verdict::Won { owner, line };
        }
    }

    if board.empty_cells().next().is_some() {
        Verdict::InProgress
    } else {
        Verdict::Draw
    }
}

/// Evaluates the whole board.
///
/// The first completed line in [`lines`] order wins. Otherwise the game is
/// in progress while any cell is empty, and a draw once none is.
#[instrument(skip(board))]
pub fn evaluate(board: &BoardSnapshot) -> Verdict {
    verdict_from(board, lines(board.rows(), board.columns()))
}

/// Evaluates only the lines passing through the cell just played.
///
/// On any board reached by legal play this agrees with [`evaluate`]: a line
/// that does not contain the newest marker was already checked on an earlier
/// move.
#[instrument(skip(board))]
pub fn evaluate_through(board: &BoardSnapshot, last_move: Coordinate) -> Verdict {
    let through = lines(board.rows(), board.columns())
        .into_iter()
        .filter(|line| line.contains(last_move));
    verdict_from(board, through)
}
