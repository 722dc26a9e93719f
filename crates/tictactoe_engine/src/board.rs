//! The grid of cells and the move-legality rule.

use super::action::{MoveError, SetupError};
use super::cell::Cell;
use super::players::Player;
use super::types::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Side length of the standard board.
pub const STANDARD_SIZE: usize = 3;

/// A fixed-size grid of cells.
///
/// Dimensions are set at construction and never change. Cells go from empty
/// to occupied once per game; [`Board::reset`] is the only way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty 3x3 board.
    pub fn new() -> Self {
        Self {
            rows: STANDARD_SIZE,
            columns: STANDARD_SIZE,
            cells: vec![Cell::new(); STANDARD_SIZE * STANDARD_SIZE],
        }
    }

    /// Creates an empty board of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyBoard`] if either dimension is zero.
    #[instrument]
    pub fn with_size(rows: usize, columns: usize) -> Result<Self, SetupError> {
        if rows == 0 || columns == 0 {
            return Err(SetupError::EmptyBoard { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::new(); rows * columns],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at an in-bounds coordinate.
    pub fn cell(&self, at: Coordinate) -> Option<&Cell> {
        if at.row >= self.rows || at.column >= self.columns {
            return None;
        }
        self.cells.get(at.row * self.columns + at.column)
    }

    /// Validates a raw coordinate and classifies why it is not playable.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidCoordinate`] for negative or out-of-bounds values
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker
    pub fn check_move(&self, row: i32, column: i32) -> Result<Coordinate, MoveError> {
        let invalid = MoveError::InvalidCoordinate { row, column };
        let at = match (usize::try_from(row), usize::try_from(column)) {
            (Ok(r), Ok(c)) => Coordinate::new(r, c),
            _ => return Err(invalid),
        };
        match self.cell(at) {
            None => Err(invalid),
            Some(cell) if !cell.is_empty() => Err(MoveError::CellOccupied(at)),
            Some(_) => Ok(at),
        }
    }

    /// Returns true if `player` may place a marker at `(row, column)` now.
    pub fn is_move_legal(&self, row: i32, column: i32) -> bool {
        self.check_move(row, column).is_ok()
    }

    /// Places `player`'s marker, re-validating first.
    ///
    /// On error the board is left untouched.
    #[instrument(skip(self, player), fields(player = %player.id()))]
    pub fn try_apply_move(
        &mut self,
        row: i32,
        column: i32,
        player: &Player,
    ) -> Result<Coordinate, MoveError> {
        let at = self.check_move(row, column).inspect_err(|e| {
            warn!(error = %e, "Move rejected by board");
        })?;
        let index = at.row * self.columns + at.column;
        self.cells[index].occupy(player);
        debug!(%at, marker = %player.marker(), "Marker placed");
        Ok(at)
    }

    /// Places `player`'s marker if the move is legal; returns whether it was applied.
    pub fn apply_move(&mut self, row: i32, column: i32, player: &Player) -> bool {
        self.try_apply_move(row, column, player).is_ok()
    }

    /// Returns an owned, read-only copy of the grid.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.clone(),
        }
    }

    /// Replaces every cell with a fresh empty one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = vec![Cell::new(); self.rows * self.columns];
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| Coordinate::new(i / self.columns, i % self.columns))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable copy of a board's cells, for renderers and win detection.
///
/// Deserializing checks the same shape rules as [`Board::with_size`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct BoardSnapshot {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

/// Wire form of a snapshot before its shape is checked.
#[derive(Deserialize)]
struct RawSnapshot {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawSnapshot> for BoardSnapshot {
    type Error = SetupError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        let RawSnapshot {
            rows,
            columns,
            cells,
        } = raw;
        if rows == 0 || columns == 0 {
            return Err(SetupError::EmptyBoard { rows, columns });
        }
        let expected = rows.checked_mul(columns);
        if expected != Some(cells.len()) {
            return Err(SetupError::CellCountMismatch {
                rows,
                columns,
                found: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }
}

impl BoardSnapshot {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at a coordinate, or `None` if out of bounds.
    pub fn cell(&self, at: Coordinate) -> Option<&Cell> {
        if at.row >= self.rows || at.column >= self.columns {
            return None;
        }
        self.cells.get(at.row * self.columns + at.column)
    }

    /// Iterates over rows, top to bottom, as slices of cells.
    pub fn grid(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// Iterates over the coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| Coordinate::new(i / self.columns, i % self.columns))
    }

    /// Returns the mirror image across the main diagonal.
    pub fn transposed(&self) -> BoardSnapshot {
        let mut cells = Vec::with_capacity(self.cells.len());
        for column in 0..self.columns {
            for row in 0..self.rows {
                cells.push(self.cells[row * self.columns + column]);
            }
        }
        BoardSnapshot {
            rows: self.columns,
            columns: self.rows,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Marker, MarkerValue, PlayerId};

    fn first() -> Player {
        Player::new(PlayerId::First, "Player 1", Marker::O)
    }

    fn second() -> Player {
        Player::new(PlayerId::Second, "Player 2", Marker::X)
    }

    #[test]
    fn test_out_of_bounds_is_illegal() {
        let board = Board::new();
        for (row, column) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            assert!(!board.is_move_legal(row, column), "({row}, {column})");
            assert_eq!(
                board.check_move(row, column),
                Err(MoveError::InvalidCoordinate { row, column })
            );
        }
    }

    #[test]
    fn test_bounds_follow_dimensions() {
        let board = Board::with_size(2, 5).unwrap();
        assert!(board.is_move_legal(1, 4));
        assert!(!board.is_move_legal(2, 0));
        assert!(!board.is_move_legal(0, 5));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Board::with_size(0, 3),
            Err(SetupError::EmptyBoard { rows: 0, columns: 3 })
        );
    }

    #[test]
    fn test_apply_move_sets_marker_and_owner() {
        let mut board = Board::new();
        assert!(board.apply_move(1, 2, &second()));

        let cell = board.cell(Coordinate::new(1, 2)).unwrap();
        assert_eq!(cell.marker(), MarkerValue::Placed(Marker::X));
        assert_eq!(cell.owner(), Some(PlayerId::Second));
    }

    #[test]
    fn test_occupied_cell_never_overwritten() {
        let mut board = Board::new();
        assert!(board.apply_move(0, 0, &first()));
        let before = board.snapshot();

        assert!(!board.apply_move(0, 0, &second()));
        assert!(!board.apply_move(0, 0, &first()));
        assert_eq!(board.snapshot(), before);
        assert_eq!(
            board.check_move(0, 0),
            Err(MoveError::CellOccupied(Coordinate::new(0, 0)))
        );
    }

    #[test]
    fn test_reset_clears_marker_and_owner() {
        let mut board = Board::new();
        board.apply_move(0, 0, &first());
        board.apply_move(2, 2, &second());
        board.reset();

        assert_eq!(board.snapshot(), Board::new().snapshot());
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::new();
        let snapshot = board.snapshot();
        board.apply_move(1, 1, &first());

        assert!(snapshot.cell(Coordinate::new(1, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_grid_rows() {
        let mut board = Board::with_size(2, 3).unwrap();
        board.apply_move(1, 0, &first());
        let snapshot = board.snapshot();
        let rows: Vec<_> = snapshot.grid().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1][0].owner(), Some(PlayerId::First));
    }

    #[test]
    fn test_transposed_swaps_coordinates() {
        let mut board = Board::with_size(2, 3).unwrap();
        board.apply_move(0, 2, &first());
        let transposed = board.snapshot().transposed();

        assert_eq!(transposed.rows(), 3);
        assert_eq!(transposed.columns(), 2);
        assert_eq!(
            transposed.cell(Coordinate::new(2, 0)).unwrap().owner(),
            Some(PlayerId::First)
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        let players = [first(), second()];
        for (i, at) in board.empty_cells().into_iter().enumerate() {
            board.apply_move(at.row as i32, at.column as i32, &players[i % 2]);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_empty_cells_on_wide_board() {
        let mut board = Board::with_size(2, 3).unwrap();
        board.apply_move(0, 1, &first());
        board.apply_move(1, 2, &second());

        let expected = vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 2),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ];
        assert_eq!(board.empty_cells(), expected);
        assert_eq!(board.snapshot().empty_cells().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_snapshot_deserialize_checks_shape() {
        let mut board = Board::with_size(2, 2).unwrap();
        board.apply_move(1, 0, &first());
        let json = serde_json::to_string(&board.snapshot()).unwrap();
        assert_eq!(
            serde_json::from_str::<BoardSnapshot>(&json).unwrap(),
            board.snapshot()
        );

        let no_cells = serde_json::from_str::<BoardSnapshot>(r#"{"rows":3,"columns":3,"cells":[]}"#);
        assert!(no_cells.is_err());

        let zero_columns =
            serde_json::from_str::<BoardSnapshot>(r#"{"rows":1,"columns":0,"cells":[]}"#);
        assert!(zero_columns.is_err());

        let orphan_marker = serde_json::from_str::<BoardSnapshot>(
            r#"{"rows":1,"columns":1,"cells":[{"marker":{"Placed":"X"},"owner":null}]}"#,
        );
        assert!(orphan_marker.is_err());
    }

    #[test]
    fn test_shape_errors_describe_the_problem() {
        let err = BoardSnapshot::try_from(RawSnapshot {
            rows: 3,
            columns: 3,
            cells: vec![Cell::new(); 4],
        })
        .unwrap_err();
        assert_eq!(
            err,
            SetupError::CellCountMismatch {
                rows: 3,
                columns: 3,
                found: 4
            }
        );
        assert_eq!(err.to_string(), "A 3x3 board cannot hold 4 cells");
    }
}
