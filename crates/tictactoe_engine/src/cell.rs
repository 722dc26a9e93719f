//! A single square of the board.

use super::action::SetupError;
use super::players::Player;
use super::types::{MarkerValue, PlayerId};
use serde::{Deserialize, Serialize};

/// Marker and owner of one board square.
///
/// The owner is present exactly when a marker is placed. Both change together
/// through [`Cell::occupy`], and only a board reset (which builds fresh cells)
/// empties a cell again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    marker: MarkerValue,
    owner: Option<PlayerId>,
}

#[derive(Deserialize)]
struct RawCell {
    marker: MarkerValue,
    owner: Option<PlayerId>,
}

impl TryFrom<RawCell> for Cell {
    type Error = SetupError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        if raw.marker.is_empty() != raw.owner.is_none() {
            return Err(SetupError::OwnerMismatch);
        }
        Ok(Self {
            marker: raw.marker,
            owner: raw.owner,
        })
    }
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the placed marker, or [`MarkerValue::Empty`].
    pub fn marker(&self) -> MarkerValue {
        self.marker
    }

    /// Returns the player who occupied this cell.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(&self) -> bool {
        self.marker.is_empty()
    }

    /// Marks the cell for `player`. Only the board calls this, after checking emptiness.
    pub(crate) fn occupy(&mut self, player: &Player) {
        debug_assert!(self.is_empty(), "occupied cells are never overwritten");
        self.marker = MarkerValue::Placed(*player.marker());
        self.owner = Some(*player.id());
    }
}
