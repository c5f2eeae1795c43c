//! Policy trait and implementations.

mod console;
mod first_legal;
mod keyboard;
mod random;

pub use console::ConsolePolicy;
pub use first_legal::FirstLegalPolicy;
pub use keyboard::{KeyboardPolicy, terminal_keys};
pub use random::RandomPolicy;

use crate::error::PolicyError;
use crate::games::tictactoe::GameState;

/// Something that picks moves.
///
/// Policies see a read-only view of the game and return a flat action index
/// (`row * 3 + col`). The environment validates the choice; a policy that
/// wants to re-prompt on bad input does so internally.
pub trait Policy {
    /// Chooses the next action for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::NoLegalActions`] when the board is full, or
    /// an input error for interactive policies.
    fn choose_action(&mut self, state: &GameState) -> Result<usize, PolicyError>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}
