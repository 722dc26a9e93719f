//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`BoardSnapshot`](crate::BoardSnapshot). Rules are
//! kept apart from board storage so the engine, tests and renderers can all
//! ask the same questions of any snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Verdict, evaluate, evaluate_through, lines};
