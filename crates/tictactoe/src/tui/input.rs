//! Keyboard and mouse translation for the terminal UI.

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use tictactoe_engine::{Coordinate, InputCommand};

/// What a key press means to the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the engine.
    Command(InputCommand),
    /// Move the cursor without touching the game.
    Cursor(Coordinate),
    /// Nothing to do.
    Ignore,
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode, rows: usize, columns: usize) -> Coordinate {
    let Coordinate { row, column } = cursor;
    match key {
        KeyCode::Right | KeyCode::Char('l') if column + 1 < columns => Coordinate::new(row, column + 1),
        KeyCode::Left | KeyCode::Char('h') if column > 0 => Coordinate::new(row, column - 1),
        KeyCode::Down | KeyCode::Char('j') if row + 1 < rows => Coordinate::new(row + 1, column),
        KeyCode::Up | KeyCode::Char('k') if row > 0 => Coordinate::new(row - 1, column),
        _ => cursor,
    }
}

/// Maps a key press to an action.
pub fn key_action(key: KeyCode, cursor: Coordinate, rows: usize, columns: usize) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Command(InputCommand::Quit),
        KeyCode::Char('r') => KeyAction::Command(InputCommand::NewGame),
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Command(InputCommand::Move {
            row: cursor.row as i32,
            column: cursor.column as i32,
        }),
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let index = c.to_digit(10).unwrap_or(1) as usize - 1;
            if index >= rows * columns {
                return KeyAction::Ignore;
            }
            KeyAction::Command(InputCommand::Move {
                row: (index / columns) as i32,
                column: (index % columns) as i32,
            })
        }
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h' | 'j' | 'k' | 'l') => {
            let next = move_cursor(cursor, key, rows, columns);
            if next == cursor {
                KeyAction::Ignore
            } else {
                KeyAction::Cursor(next)
            }
        }
        _ => KeyAction::Ignore,
    }
}

/// Finds the cell under a mouse click; gaps and borders hit nothing.
pub fn hit_test(cells: &[(Coordinate, Rect)], column: u16, row: u16) -> Option<Coordinate> {
    cells
        .iter()
        .find(|(_, area)| area.contains(Position::new(column, row)))
        .map(|(at, _)| *at)
}
