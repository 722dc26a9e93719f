//! Status lines shown under the board.

use tictactoe_engine::{GameEvent, GameOutcome, GameView, MoveError, Player};

/// Shown when a move is refused.
pub const INVALID_MOVE: &str = "Invalid move. Try another square";

/// Shown when the board fills without a winner.
pub const DRAW: &str = "Game is a draw!";

/// Shown when a move arrives after the game is decided.
pub const GAME_OVER: &str = "The game is over. Start a new game to play again";

/// Whose turn it is and which marker they use.
pub fn turn_info(player: &Player) -> String {
    format!("{}'s turn. Your marker is: {}", player.name(), player.marker())
}

/// Announces the winner.
pub fn winner(player: &Player) -> String {
    format!("{} wins! The winner's marker is {}", player.name(), player.marker())
}

/// Describes the outcome as the players should see it.
pub fn outcome(view: &GameView) -> String {
    match view.outcome() {
        GameOutcome::InProgress => turn_info(view.active_player()),
        GameOutcome::Won { player, .. } => winner(player),
        GameOutcome::Draw => DRAW.to_string(),
    }
}

/// The status line for a render triggered by `event`.
pub fn headline(view: &GameView, event: &GameEvent) -> String {
    match event {
        GameEvent::MoveRejected(MoveError::GameAlreadyFinished) => GAME_OVER.to_string(),
        GameEvent::MoveRejected(_) => INVALID_MOVE.to_string(),
        _ => outcome(view),
    }
}
