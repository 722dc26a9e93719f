//! Line-oriented front end: type a command, see the board.

use crate::status;
use std::io::{self, BufRead, Write};
use tictactoe_engine::{
    BoardSnapshot, GameEvent, GameView, InputAdapter, InputCommand, MarkerValue, Renderer,
    STANDARD_SIZE,
};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  <cell>            play a numbered cell (1-9 on the standard board)
  <row> <column>    play a zero-based row and column
  new               start a new game
  names <a> <b>     rename the players
  help              show this help
  quit              leave";

/// Console front end over any reader and writer.
#[derive(Debug)]
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
    /// Column count of the last rendered board, for numbered cells.
    columns: usize,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    /// Creates a console front end.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            columns: STANDARD_SIZE,
        }
    }

    /// Returns the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> InputAdapter for ConsoleFrontend<R, W> {
    fn next_command(&mut self) -> io::Result<Option<InputCommand>> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_command(&line, self.columns) {
                Some(command) => {
                    debug!(?command, "Parsed console command");
                    return Ok(Some(command));
                }
                None if line.trim().is_empty() => {}
                None => {
                    if !line.trim().eq_ignore_ascii_case("help") {
                        writeln!(self.output, "Unrecognized command: {}", line.trim())?;
                    }
                    writeln!(self.output, "{}", HELP)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Renderer for ConsoleFrontend<R, W> {
    #[instrument(skip_all)]
    fn render(&mut self, view: &GameView, event: &GameEvent) -> io::Result<()> {
        self.columns = view.board().columns();

        match event {
            GameEvent::Started => writeln!(self.output, "Tic-tac-toe. Type 'help' for commands.")?,
            GameEvent::NewGame => writeln!(self.output, "New game.")?,
            GameEvent::NamesChanged => {
                let [first, second] = view.players();
                writeln!(self.output, "Players: {} vs {}", first, second)?;
            }
            GameEvent::MoveApplied { by, at, .. } => {
                writeln!(self.output, "{} played {}", by.name(), at)?;
            }
            GameEvent::MoveRejected(reason) => {
                writeln!(self.output, "{} ({})", status::headline(view, event), reason)?;
                return Ok(());
            }
        }

        writeln!(self.output, "{}", format_board(view.board()))?;
        writeln!(self.output, "{}", status::headline(view, event))?;
        Ok(())
    }
}

/// Parses one input line; `None` means the line is not a command.
pub fn parse_command(line: &str, columns: usize) -> Option<InputCommand> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [word] if word.eq_ignore_ascii_case("quit") || word.eq_ignore_ascii_case("exit") => {
            Some(InputCommand::Quit)
        }
        [word] if word.eq_ignore_ascii_case("new") => Some(InputCommand::NewGame),
        [word, first, second] if word.eq_ignore_ascii_case("names") => {
            Some(InputCommand::SetNames {
                first: (*first).to_string(),
                second: (*second).to_string(),
            })
        }
        [cell] => {
            let index = cell.parse::<i32>().ok()?.checked_sub(1)?;
            let columns = i32::try_from(columns).ok()?;
            Some(InputCommand::Move {
                row: index.div_euclid(columns),
                column: index.rem_euclid(columns),
            })
        }
        [row, column] => Some(InputCommand::Move {
            row: row.parse().ok()?,
            column: column.parse().ok()?,
        }),
        _ => None,
    }
}

/// Formats the board as a human-readable grid; empty cells show their number.
pub fn format_board(board: &BoardSnapshot) -> String {
    let columns = board.columns();
    let rows: Vec<String> = board
        .grid()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| match cell.marker() {
                    MarkerValue::Placed(marker) => format!(" {} ", marker),
                    MarkerValue::Empty => format!(" {} ", r * columns + c + 1),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    let separator = vec!["---"; columns].join("+");
    rows.join(&format!("\n{}\n", separator))
}
