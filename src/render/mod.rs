//! Renderer trait and implementations.

mod console;
mod terminal;

pub use console::ConsoleRenderer;
pub use terminal::TerminalRenderer;

use crate::error::EnvError;
use crate::games::tictactoe::GameState;

/// Presents a read-only snapshot of the game.
pub trait Renderer {
    /// Draws the grid, the player to move and the status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvErrorKind::Render`] if the output cannot be written.
    fn render(&mut self, state: &GameState) -> Result<(), EnvError>;
}
