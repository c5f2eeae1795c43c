//! Human player that gets input from the keyboard in full-screen mode.

use super::Policy;
use crate::error::PolicyError;
use crate::games::tictactoe::GameState;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::{debug, instrument};

/// Human player using single key presses.
///
/// Keys `1`-`9` select cells 0-8 in row-major order; `q` or `Esc` abort.
/// Presses on occupied cells are ignored.
pub struct KeyboardPolicy<K> {
    name: String,
    keys: K,
}

impl<K: Iterator<Item = KeyCode>> KeyboardPolicy<K> {
    /// Creates a keyboard policy over a stream of key codes.
    pub fn new(name: impl Into<String>, keys: K) -> Self {
        Self {
            name: name.into(),
            keys,
        }
    }
}

/// Key presses read from the terminal; ends on a read error.
pub fn terminal_keys() -> impl Iterator<Item = KeyCode> {
    std::iter::from_fn(|| {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key.code),
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read terminal event");
                    return None;
                }
            }
        }
    })
}

impl<K: Iterator<Item = KeyCode>> Policy for KeyboardPolicy<K> {
    #[instrument(skip_all, fields(policy = %self.name))]
    fn choose_action(&mut self, state: &GameState) -> Result<usize, PolicyError> {
        let legal = state.legal_actions();
        if legal.is_empty() {
            return Err(PolicyError::NoLegalActions);
        }

        for key in self.keys.by_ref() {
            match key {
                KeyCode::Char('q') | KeyCode::Esc => return Err(PolicyError::Aborted),
                KeyCode::Char(c) => {
                    if let Some(digit) = c.to_digit(10)
                        && (1..=9).contains(&digit)
                    {
                        let action = digit as usize - 1;
                        if legal.contains(&action) {
                            debug!(action, "Key accepted");
                            return Ok(action);
                        }
                        debug!(action, "Key targets occupied cell");
                    }
                }
                _ => {}
            }
        }

        Err(PolicyError::InputClosed)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
