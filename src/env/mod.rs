//! Gym-style environment interface.
//!
//! An [`Environment`] is reset to a starting observation and then advanced
//! one action at a time with [`Environment::step`], which reports the next
//! observation, a reward, whether the episode is over, and an info payload.

mod tictactoe;

pub use tictactoe::TicTacToeEnv;

use crate::error::EnvError;
use crate::games::tictactoe::GameStatus;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Which side of the environment a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Role {
    /// Driven by the caller through [`Environment::step`].
    Primary,
    /// Answered automatically inside the same `step` call.
    Secondary,
}

/// Reinforcement-learning environment contract, in the style of OpenAI Gym.
pub trait Environment {
    /// Action accepted by [`step`](Environment::step).
    type Action;
    /// Observation returned after reset and every step.
    type Observation;
    /// Auxiliary data returned next to each observation.
    type Info;

    /// Resets to the initial state.
    fn reset(&mut self) -> (Self::Observation, Self::Info);

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// Fails if the action is illegal or a collaborator fails; the
    /// environment state is left as it was before the call.
    fn step(
        &mut self,
        action: Self::Action,
    ) -> Result<Transition<Self::Observation, Self::Info>, EnvError>;

    /// Presents the current state.
    ///
    /// # Errors
    ///
    /// Fails if the renderer cannot draw.
    fn render(&mut self) -> Result<(), EnvError>;
}

/// Outcome of one [`Environment::step`].
#[derive(Debug, Clone, PartialEq, Getters, new)]
pub struct Transition<O, I> {
    /// Observation after the step.
    observation: O,
    /// Reward for the primary role.
    reward: f32,
    /// Whether the episode has ended.
    done: bool,
    /// Auxiliary data.
    info: I,
}

impl<O, I> Transition<O, I> {
    /// Splits into `(observation, reward, done, info)`.
    pub fn into_parts(self) -> (O, f32, bool, I) {
        (self.observation, self.reward, self.done, self.info)
    }
}

/// Info payload returned by reset and step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct StepInfo {
    /// Legal action indices in ascending order.
    legal_actions: Vec<usize>,
    /// Status after the call.
    #[serde(rename = "game_status")]
    status: GameStatus,
}

/// Result of a complete episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct EpisodeSummary {
    /// Final status.
    status: GameStatus,
    /// Final reward for the primary role.
    reward: f32,
    /// Number of `step` calls made.
    steps: usize,
}
