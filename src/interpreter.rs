//! Line-oriented command interpreter.
//!
//! Reads one command per line, runs it against the board to completion and
//! writes a human-readable result. No command error ends the session.

use std::io::{BufRead, Write};

use blackboard_core::Result;
use blackboard_designer::{Board, BoardCommand, BoardError, HELP_TEXT};

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Interpreter<W: Write> {
    board: Board,
    out: W,
    auto_draw: bool,
}

impl<W: Write> Interpreter<W> {
    pub fn new(board: Board, out: W) -> Self {
        Self {
            board,
            out,
            auto_draw: false,
        }
    }

    /// Draw the board after every successful mutation.
    pub fn with_auto_draw(mut self, auto_draw: bool) -> Self {
        self.auto_draw = auto_draw;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_parts(self) -> (Board, W) {
        (self.board, self.out)
    }

    /// Runs until `exit` or end of input.
    ///
    /// Command failures are printed and the loop continues; only I/O errors
    /// on the input or output stream end it early.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: &str) -> Result<()> {
        let mut lines = input.lines();
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                return Ok(());
            };
            if self.handle_line(&line?)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parses and executes a single command line.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match BoardCommand::parse(line) {
            Ok(Some(command)) => {
                tracing::debug!("Executing {:?}", command);
                self.execute(command)
            }
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                tracing::debug!("Rejected command line {:?}: {}", line, e);
                writeln!(self.out, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, command: BoardCommand) -> Result<Flow> {
        let mutated = match command {
            BoardCommand::Add(figure) => {
                let result = self.board.add_figure(figure);
                self.report(result.map(|id| format!("Shape {} added.", id)))?
            }
            BoardCommand::SelectId(id) => {
                let result = self.board.select_figure(id);
                let result = result.map(|fig| format!("Selected shape: {}", fig));
                self.report(result)?;
                false
            }
            BoardCommand::SelectAt { x, y } => {
                let result = self.board.select_at(x, y);
                let result = result.map(|fig| format!("Selected shape: {}", fig));
                self.report(result)?;
                false
            }
            BoardCommand::Deselect => {
                let result = self
                    .board
                    .deselect()
                    .map(|id| format!("Shape {} deselected.", id))
                    .ok_or(BoardError::NoSelection);
                self.report(result)?;
                false
            }
            BoardCommand::Remove => {
                let result = self.board.remove_selected();
                self.report(result.map(|fig| format!("Shape with ID {} removed.", fig.id())))?
            }
            BoardCommand::Undo => {
                let result = self.board.remove_last();
                self.report(result.map(|fig| format!("Shape with ID {} removed.", fig.id())))?
            }
            BoardCommand::Move { x, y } => {
                let result = self.board.move_selected(x, y);
                let result = result.map(|_| format!("Shape moved to ({}, {}).", x, y));
                self.report(result)?
            }
            BoardCommand::Paint(color) => {
                let result = self.board.paint_selected(&color);
                let result = result.map(|_| format!("Shape color changed to {}.", color));
                self.report(result)?
            }
            BoardCommand::Edit(params) => {
                let params: Vec<&str> = params.iter().map(String::as_str).collect();
                let result = self.board.edit_selected(&params);
                let result = result.map(|fig| format!("Shape parameters changed: {}", fig));
                self.report(result)?
            }
            BoardCommand::Draw => {
                write!(self.out, "{}", self.board.render())?;
                false
            }
            BoardCommand::List => {
                self.list()?;
                false
            }
            BoardCommand::Clear => {
                self.board.clear_all();
                writeln!(self.out, "Blackboard cleared.")?;
                true
            }
            BoardCommand::Save(path) => {
                match self.board.save_to_file(&path) {
                    Ok(count) => writeln!(self.out, "Saved {} shapes to {}.", count, path.display())?,
                    Err(e) => writeln!(self.out, "Failed to save {}: {}", path.display(), e)?,
                }
                false
            }
            BoardCommand::Load(path) => match self.board.load_from_file(&path) {
                Ok(count) => {
                    writeln!(self.out, "Loaded {} shapes from {}.", count, path.display())?;
                    true
                }
                Err(e) => {
                    writeln!(
                        self.out,
                        "Failed to load {}: {}. Blackboard cleared.",
                        path.display(),
                        e
                    )?;
                    false
                }
            },
            BoardCommand::Help => {
                writeln!(self.out, "{}", HELP_TEXT)?;
                false
            }
            BoardCommand::Exit => {
                writeln!(self.out, "Exiting the application. Goodbye!")?;
                return Ok(Flow::Exit);
            }
        };

        if mutated && self.auto_draw {
            write!(self.out, "{}", self.board.render())?;
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<()> {
        if self.board.is_empty() {
            writeln!(self.out, "No shapes on the board.")?;
            return Ok(());
        }
        writeln!(self.out, "Figures on the board:")?;
        for line in self.board.list_figures() {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// Prints the outcome; returns whether the operation succeeded.
    fn report(&mut self, result: std::result::Result<String, BoardError>) -> Result<bool> {
        match result {
            Ok(message) => {
                writeln!(self.out, "{}", message)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(false)
            }
        }
    }
}
