//! Core domain types for tic-tac-toe.

use crate::action::SetupError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identity of one of the two seats at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum PlayerId {
    /// The first-registered player (moves first).
    First,
    /// The second-registered player.
    Second,
}

impl PlayerId {
    /// Returns the other player.
    pub fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Index of this player in seat order (0 or 1).
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

/// The symbol a player places on the board.
///
/// Always a single visible character, so it can be drawn in one terminal
/// column and never looks like an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "char", into = "char")]
pub struct Marker(char);

impl Marker {
    /// Default marker for the first player.
    pub const O: Marker = Marker('O');
    /// Default marker for the second player.
    pub const X: Marker = Marker('X');

    /// Creates a marker from a character.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidMarker`] for whitespace or control characters.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, SetupError> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(SetupError::InvalidMarker(symbol));
        }
        Ok(Self(symbol))
    }

    /// Returns the marker character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Marker {
    type Error = SetupError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Marker::new(symbol)
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

/// Content of a cell: either nothing or a placed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarkerValue {
    /// No marker placed.
    #[default]
    Empty,
    /// A player's marker.
    Placed(Marker),
}

impl MarkerValue {
    /// Returns true if no marker is placed.
    pub fn is_empty(self) -> bool {
        matches!(self, MarkerValue::Empty)
    }

    /// Returns the placed marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            MarkerValue::Empty => None,
            MarkerValue::Placed(marker) => Some(marker),
        }
    }
}

/// Zero-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {column})")]
pub struct Coordinate {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub column: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Swaps row and column.
    pub fn transposed(self) -> Self {
        Self {
            row: self.column,
            column: self.row,
        }
    }
}
