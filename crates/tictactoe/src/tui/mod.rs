//! Full-screen terminal front end.

mod input;
mod ui;

pub use input::{KeyAction, hit_test, key_action, move_cursor};
pub use ui::draw;

use crate::{config::GameConfig, status};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use tictactoe_engine::{
    Coordinate, GameEngine, GameEvent, GameView, InputAdapter, InputCommand, Orchestrator,
    Renderer,
};
use tracing::{debug, info, instrument, warn};

/// Runs the full-screen game until the player quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let engine = GameEngine::new(config.registry()?);
    let frontend = TerminalFrontend::enter().context("Failed to set up terminal")?;
    let mut orchestrator = Orchestrator::new(engine, frontend);
    orchestrator.run().context("Terminal UI failed")?;

    info!(outcome = %orchestrator.engine().current_outcome(), "TUI exited");
    Ok(())
}

/// Terminal UI that reads keys and clicks and paints the board.
///
/// Puts the terminal in raw mode on creation and restores it on drop.
pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cursor: Coordinate,
    view: Option<GameView>,
    status: String,
    /// Screen areas of the cells from the last draw, for mouse hit-testing.
    cells: Vec<(Coordinate, Rect)>,
}

impl TerminalFrontend {
    /// Switches the terminal to the alternate screen with mouse capture.
    #[instrument]
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        };
        let terminal = setup().inspect_err(|e| {
            warn!(error = %e, "Terminal setup failed, restoring");
            restore_terminal(&mut io::stdout());
        })?;
        info!("Terminal UI ready");
        Ok(Self {
            terminal,
            cursor: Coordinate::new(1, 1),
            view: None,
            status: String::new(),
            cells: Vec::new(),
        })
    }

    fn redraw(&mut self) -> io::Result<()> {
        let Some(view) = &self.view else {
            return Ok(());
        };
        let cursor = self.cursor;
        let status = &self.status;
        let mut cells = Vec::new();
        self.terminal
            .draw(|frame| cells = ui::draw(frame, view, cursor, status))?;
        self.cells = cells;
        Ok(())
    }

    fn dimensions(&self) -> (usize, usize) {
        self.view
            .as_ref()
            .map(|v| (v.board().rows(), v.board().columns()))
            .unwrap_or((tictactoe_engine::STANDARD_SIZE, tictactoe_engine::STANDARD_SIZE))
    }
}

impl InputAdapter for TerminalFrontend {
    fn next_command(&mut self) -> io::Result<Option<InputCommand>> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let (rows, columns) = self.dimensions();
                    match key_action(key.code, self.cursor, rows, columns) {
                        KeyAction::Command(command) => {
                            debug!(?command, "Key command");
                            return Ok(Some(command));
                        }
                        KeyAction::Cursor(next) => {
                            self.cursor = next;
                            self.redraw()?;
                        }
                        KeyAction::Ignore => {}
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(at) = hit_test(&self.cells, mouse.column, mouse.row) {
                        debug!(%at, "Cell clicked");
                        self.cursor = at;
                        return Ok(Some(InputCommand::Move {
                            row: at.row as i32,
                            column: at.column as i32,
                        }));
                    }
                }
                Event::Resize(_, _) => self.redraw()?,
                _ => {}
            }
        }
    }
}

impl Renderer for TerminalFrontend {
    fn render(&mut self, view: &GameView, event: &GameEvent) -> io::Result<()> {
        if matches!(event, GameEvent::NewGame) {
            self.cursor = Coordinate::new(1, 1);
        }
        self.status = status::headline(view, event);
        self.view = Some(view.clone());
        self.redraw()
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, ignoring errors.
fn restore_terminal(out: &mut impl Write) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore_terminal(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}
