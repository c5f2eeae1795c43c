//! Uniform random policy.

use super::Policy;
use crate::error::PolicyError;
use crate::games::tictactoe::GameState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the legal actions.
///
/// Stands in for a trained model: anything that maps a [`GameState`]
/// observation to an action can replace it.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    name: String,
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a policy seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible policy.
    #[instrument(skip(name))]
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_action(&mut self, state: &GameState) -> Result<usize, PolicyError> {
        let legal = state.legal_actions();
        let action = *legal
            .choose(&mut self.rng)
            .ok_or(PolicyError::NoLegalActions)?;
        debug!(policy = %self.name, action, options = legal.len(), "Policy chose action");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_legal_actions_are_chosen() {
        let mut policy = RandomPolicy::with_seed("random", 7);
        let mut state = GameState::new();
        while !state.is_terminated() {
            let action = policy.choose_action(&state).unwrap();
            assert!(state.legal_actions().contains(&action));
            assert!(state.make_move(action));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let state = GameState::new();
        let mut first = RandomPolicy::with_seed("a", 42);
        let mut second = RandomPolicy::with_seed("b", 42);
        for _ in 0..20 {
            assert_eq!(
                first.choose_action(&state).unwrap(),
                second.choose_action(&state).unwrap()
            );
        }
    }
}
