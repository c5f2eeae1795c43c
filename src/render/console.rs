//! Plain-text renderer for line-based terminals.

use super::Renderer;
use crate::error::{EnvError, EnvErrorKind};
use crate::games::tictactoe::GameState;
use std::io::Write;
use tracing::instrument;

/// Writes the board, player to move and status as text.
pub struct ConsoleRenderer<W> {
    output: W,
    clear_screen: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer over any writer. The screen is never cleared.
    pub fn new(output: W) -> Self {
        Self {
            output,
            clear_screen: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_frame(&mut self, state: &GameState) -> std::io::Result<()> {
        if self.clear_screen {
            // ANSI: clear screen, cursor home.
            write!(self.output, "\x1b[2J\x1b[H")?;
        }
        writeln!(self.output, "Tic Tac Toe")?;
        writeln!(self.output, "===========")?;
        writeln!(self.output)?;
        for line in state.board().display().lines() {
            writeln!(self.output, "  {}", line)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "Current player: {}", state.current_player())?;
        writeln!(self.output, "Game status: {}", state.status())?;
        writeln!(self.output)?;
        self.output.flush()
    }
}

impl ConsoleRenderer<std::io::Stdout> {
    /// Renderer on stdout that clears the screen between frames.
    pub fn stdout() -> Self {
        Self {
            output: std::io::stdout(),
            clear_screen: true,
        }
    }
}

impl ConsoleRenderer<std::io::Stderr> {
    /// Renderer on stderr that never clears, leaving stdout free for output.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    #[instrument(skip_all)]
    fn render(&mut self, state: &GameState) -> Result<(), EnvError> {
        self.write_frame(state)
            .map_err(|e| EnvError::new(EnvErrorKind::Render(e.to_string())))
    }
}
