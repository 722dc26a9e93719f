//! The two competitors and whose turn it is.

use super::action::SetupError;
use super::types::{Marker, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default display name of the first player.
pub const DEFAULT_FIRST_NAME: &str = "Player 1";
/// Default display name of the second player.
pub const DEFAULT_SECOND_NAME: &str = "Player 2";

/// A competitor: seat, display name and marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Seat of this player.
    id: PlayerId,
    /// Display name shown by front ends.
    name: String,
    /// Marker this player places.
    marker: Marker,
}

impl Player {
    /// Creates a player.
    pub fn new(id: PlayerId, name: impl Into<String>, marker: Marker) -> Self {
        Self {
            id,
            name: name.into(),
            marker,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

/// Exactly two players and the active turn.
///
/// Markers are fixed at construction. Names may change at any time without
/// affecting markers or turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: [Player; 2],
    active: PlayerId,
}

impl PlayerRegistry {
    /// Registers the two players; the first one moves first.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateMarker`] if both markers are equal.
    #[instrument(skip(first_name, second_name))]
    pub fn new(
        first_name: impl Into<String>,
        first_marker: Marker,
        second_name: impl Into<String>,
        second_marker: Marker,
    ) -> Result<Self, SetupError> {
        if first_marker == second_marker {
            return Err(SetupError::DuplicateMarker(first_marker));
        }
        Ok(Self {
            players: [
                Player::new(PlayerId::First, first_name, first_marker),
                Player::new(PlayerId::Second, second_name, second_marker),
            ],
            active: PlayerId::First,
        })
    }

    /// Returns the player whose move is expected.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Returns the player in the given seat.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Returns both players in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.active))]
    pub fn advance_turn(&mut self) {
        self.active = self.active.other();
        debug!(to = %self.active, "Turn advanced");
    }

    /// Gives the turn back to the first player.
    #[instrument(skip(self))]
    pub fn reset_turn(&mut self) {
        self.active = PlayerId::First;
    }

    /// Updates both display names.
    #[instrument(skip(self, first, second))]
    pub fn set_names(&mut self, first: impl Into<String>, second: impl Into<String>) {
        self.players[0].name = first.into();
        self.players[1].name = second.into();
        debug!(first = %self.players[0].name, second = %self.players[1].name, "Names updated");
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self {
            players: [
                Player::new(PlayerId::First, DEFAULT_FIRST_NAME, Marker::O),
                Player::new(PlayerId::Second, DEFAULT_SECOND_NAME, Marker::X),
            ],
            active: PlayerId::First,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_players() {
        let registry = PlayerRegistry::default();
        assert_eq!(registry.active_player().name(), "Player 1");
        assert_eq!(*registry.active_player().marker(), Marker::O);
        assert_eq!(*registry.player(PlayerId::Second).marker(), Marker::X);
    }

    #[test]
    fn test_duplicate_markers_rejected() {
        let result = PlayerRegistry::new("A", Marker::X, "B", Marker::X);
        assert_eq!(result, Err(SetupError::DuplicateMarker(Marker::X)));
    }

    #[test]
    fn test_advance_turn_always_toggles() {
        let mut registry = PlayerRegistry::default();
        registry.advance_turn();
        assert_eq!(*registry.active_player().id(), PlayerId::Second);
        registry.advance_turn();
        assert_eq!(*registry.active_player().id(), PlayerId::First);
    }

    #[test]
    fn test_set_names_keeps_markers_and_turn() {
        let mut registry = PlayerRegistry::default();
        registry.advance_turn();
        registry.set_names("Ada", "Grace");

        assert_eq!(registry.player(PlayerId::First).name(), "Ada");
        assert_eq!(registry.player(PlayerId::Second).name(), "Grace");
        assert_eq!(*registry.player(PlayerId::First).marker(), Marker::O);
        assert_eq!(*registry.active_player().id(), PlayerId::Second);
    }

    #[test]
    fn test_reset_turn() {
        let mut registry = PlayerRegistry::default();
        registry.advance_turn();
        registry.reset_turn();
        assert_eq!(*registry.active_player().id(), PlayerId::First);
    }
}
