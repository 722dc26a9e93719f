//! Turn-based state machine tying board, players and rules together.

use super::action::{MoveError, MoveOutcome, SetupError};
use super::board::{Board, BoardSnapshot};
use super::outcome::{EngineState, GameOutcome};
use super::players::{Player, PlayerRegistry};
use super::rules::{self, Verdict};
use super::types::Coordinate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Everything a renderer needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// The grid.
    board: BoardSnapshot,
    /// Both players in seat order.
    players: [Player; 2],
    /// Player whose move is expected (the last mover once the game is decided).
    active_player: Player,
    /// Current outcome.
    outcome: GameOutcome,
}

/// Tic-tac-toe game engine.
///
/// Sole owner of the board and the player registry. [`GameEngine::attempt_move`]
/// is the only way a move reaches the board.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: PlayerRegistry,
    state: EngineState,
}

impl GameEngine {
    /// Creates an engine with a standard 3x3 board.
    #[instrument(skip(players))]
    pub fn new(players: PlayerRegistry) -> Self {
        Self {
            board: Board::new(),
            players,
            state: EngineState::AwaitingMove,
        }
    }

    /// Creates an engine with a `rows x columns` board.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyBoard`] if either dimension is zero.
    #[instrument(skip(players))]
    pub fn with_board_size(
        players: PlayerRegistry,
        rows: usize,
        columns: usize,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            board: Board::with_size(rows, columns)?,
            players,
            state: EngineState::AwaitingMove,
        })
    }

    /// Plays the active player's marker at `(row, column)`.
    ///
    /// A rejected move changes nothing, including whose turn it is.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyFinished`] once the game is decided
    /// - [`MoveError::InvalidCoordinate`] for coordinates off the board
    /// - [`MoveError::CellOccupied`] if the cell is taken
    pub fn attempt_move(&mut self, row: i32, column: i32) -> Result<MoveOutcome, MoveError> {
        self.attempt_move_at(row, column).map(|(_, outcome)| outcome)
    }

    /// Same as [`GameEngine::attempt_move`], also returning the validated cell.
    #[instrument(skip(self), fields(player = %self.players.active_player()))]
    pub(crate) fn attempt_move_at(
        &mut self,
        row: i32,
        column: i32,
    ) -> Result<(Coordinate, MoveOutcome), MoveError> {
        if let EngineState::Finished(_) = self.state {
            warn!("Move attempted after the game finished");
            return Err(MoveError::GameAlreadyFinished);
        }

        let mover = self.players.active_player().clone();
        let at = self.board.try_apply_move(row, column, &mover)?;

        let outcome = match rules::evaluate(&self.board.snapshot()) {
            Verdict::Won { owner, line } => {
                let outcome = GameOutcome::Won {
                    player: self.players.player(owner).clone(),
                    line,
                };
                info!(winner = %mover, %at, "Game won");
                self.state = EngineState::Finished(outcome.clone());
                MoveOutcome::Finished(outcome)
            }
            Verdict::Draw => {
                info!(%at, "Game drawn");
                self.state = EngineState::Finished(GameOutcome::Draw);
                MoveOutcome::Finished(GameOutcome::Draw)
            }
            Verdict::InProgress => {
                self.players.advance_turn();
                let next = self.players.active_player().clone();
                debug!(%at, next = %next, "Move applied");
                MoveOutcome::Continued(next)
            }
        };
        Ok((at, outcome))
    }

    /// Clears the board and gives the first move back to the first player.
    ///
    /// Names and markers are kept.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        self.board.reset();
        self.players.reset_turn();
        self.state = EngineState::AwaitingMove;
        info!(first = %self.players.active_player(), "New game started");
    }

    /// Updates both display names.
    #[instrument(skip(self, first, second))]
    pub fn set_names(&mut self, first: impl Into<String>, second: impl Into<String>) {
        self.players.set_names(first, second);
        // A decided outcome carries a copy of the winner; keep its name current.
        if let EngineState::Finished(GameOutcome::Won { player, .. }) = &mut self.state {
            *player = self.players.player(*player.id()).clone();
        }
    }

    /// Returns the current outcome.
    pub fn current_outcome(&self) -> GameOutcome {
        match &self.state {
            EngineState::AwaitingMove => GameOutcome::InProgress,
            EngineState::Finished(outcome) => outcome.clone(),
        }
    }

    /// Returns the player whose move is expected.
    pub fn active_player(&self) -> &Player {
        self.players.active_player()
    }

    /// Returns both players in seat order.
    pub fn players(&self) -> &[Player; 2] {
        self.players.players()
    }

    /// Returns a read-only copy of the board.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Returns the state machine phase.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Bundles the read-only state for a renderer.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.snapshot(),
            players: self.players.players().clone(),
            active_player: self.players.active_player().clone(),
            outcome: self.current_outcome(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(PlayerRegistry::default())
    }
}
