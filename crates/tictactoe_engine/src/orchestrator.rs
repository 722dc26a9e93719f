//! Drives a game between the engine and a front end.

use super::collaborators::{GameEvent, InputAdapter, InputCommand, Renderer};
use super::engine::GameEngine;
use std::io;
use std::ops::ControlFlow;
use tracing::{debug, info, instrument, warn};

/// Pumps commands from a front end through the engine.
///
/// Each command is handled to completion (apply, evaluate, advance the
/// turn, render) before the next one is read.
#[derive(Debug)]
pub struct Orchestrator<F> {
    engine: GameEngine,
    frontend: F,
}

impl<F> Orchestrator<F>
where
    F: InputAdapter + Renderer,
{
    /// Creates an orchestrator.
    pub fn new(engine: GameEngine, frontend: F) -> Self {
        Self { engine, frontend }
    }

    /// Runs until the front end quits or runs out of input.
    ///
    /// # Errors
    ///
    /// Only IO errors from the front end end the loop early. Rejected moves
    /// are rendered and play continues.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        info!("Starting game orchestration");
        self.frontend.render(&self.engine.view(), &GameEvent::Started)?;

        while let Some(command) = self.frontend.next_command()? {
            if self.handle(command)?.is_break() {
                info!("Front end quit");
                return Ok(());
            }
        }

        info!("Input exhausted");
        Ok(())
    }

    /// Applies one command and renders its result.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: InputCommand) -> io::Result<ControlFlow<()>> {
        let event = match command {
            InputCommand::Quit => return Ok(ControlFlow::Break(())),
            InputCommand::Move { row, column } => {
                let by = self.engine.active_player().clone();
                match self.engine.attempt_move_at(row, column) {
                    Ok((at, outcome)) => {
                        debug!(%at, ?outcome, "Move applied");
                        GameEvent::MoveApplied { by, at, outcome }
                    }
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        GameEvent::MoveRejected(e)
                    }
                }
            }
            InputCommand::NewGame => {
                self.engine.start_new_game();
                GameEvent::NewGame
            }
            InputCommand::SetNames { first, second } => {
                self.engine.set_names(first, second);
                GameEvent::NamesChanged
            }
        };

        self.frontend.render(&self.engine.view(), &event)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the front end.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Takes the orchestrator apart.
    pub fn into_parts(self) -> (GameEngine, F) {
        (self.engine, self.frontend)
    }
}
