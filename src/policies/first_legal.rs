//! Deterministic policy that always takes the lowest free cell.

use super::Policy;
use crate::error::PolicyError;
use crate::games::tictactoe::GameState;
use tracing::debug;

/// Picks the first available square in row-major order.
#[derive(Debug, Clone)]
pub struct FirstLegalPolicy {
    name: String,
}

impl FirstLegalPolicy {
    /// Creates a new first-legal policy.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Policy for FirstLegalPolicy {
    fn choose_action(&mut self, state: &GameState) -> Result<usize, PolicyError> {
        let action = state
            .legal_actions()
            .first()
            .copied()
            .ok_or(PolicyError::NoLegalActions)?;
        debug!(policy = %self.name, action, "Policy chose action");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
