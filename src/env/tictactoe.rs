//! Tic-tac-toe behind the Gym-style environment contract.

use super::{Environment, EpisodeSummary, Role, StepInfo, Transition};
use crate::error::{EnvError, EnvErrorKind, PolicyError};
use crate::games::tictactoe::{GameState, Observation, Player};
use crate::policies::Policy;
use crate::render::Renderer;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe environment with an automatic opponent.
///
/// The primary role plays as [`Player::A`] and moves first; its actions come
/// from the caller through [`Environment::step`]. The secondary role plays as
/// [`Player::B`] and is answered by the secondary policy inside the same
/// call, so one `step` may apply two moves. Reward and `done` always describe
/// the state after both.
///
/// Policies and renderer are borrowed; the caller owns them.
pub struct TicTacToeEnv<'a> {
    state: GameState,
    primary: &'a mut dyn Policy,
    secondary: &'a mut dyn Policy,
    renderer: &'a mut dyn Renderer,
}

impl<'a> TicTacToeEnv<'a> {
    /// Player controlled by the primary role.
    pub const PRIMARY_PLAYER: Player = Player::A;

    /// Creates an environment in its initial state.
    pub fn new(
        primary: &'a mut dyn Policy,
        secondary: &'a mut dyn Policy,
        renderer: &'a mut dyn Renderer,
    ) -> Self {
        Self {
            state: GameState::new(),
            primary,
            secondary,
            renderer,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn info(&self) -> StepInfo {
        StepInfo::new(self.state.legal_actions(), self.state.status())
    }

    /// Applies `action` for whoever is to move, failing on illegal input.
    fn apply(&mut self, role: Role, action: usize) -> Result<(), EnvError> {
        if let Some(reason) = self.state.illegal_reason(action) {
            warn!(%role, action, %reason, "Illegal action");
            return Err(EnvError::new(EnvErrorKind::IllegalAction {
                role,
                action,
                reason,
            }));
        }
        // Checked above; make_move cannot refuse a legal action.
        let applied = self.state.make_move(action);
        debug_assert!(applied);
        debug!(%role, action, status = %self.state.status(), "Action applied");
        Ok(())
    }

    /// Asks the policy behind `role` for its next action.
    fn consult(&mut self, role: Role) -> Result<usize, EnvError> {
        let policy = match role {
            Role::Primary => &mut *self.primary,
            Role::Secondary => &mut *self.secondary,
        };
        policy.choose_action(&self.state).map_err(|source| {
            let kind = match source {
                PolicyError::NoLegalActions => EnvErrorKind::NoLegalActions,
                source => EnvErrorKind::PolicyFailure { role, source },
            };
            EnvError::new(kind)
        })
    }

    fn two_ply(&mut self, action: usize) -> Result<(), EnvError> {
        self.apply(Role::Primary, action)?;
        if !self.state.is_terminated() {
            let reply = self.consult(Role::Secondary)?;
            self.apply(Role::Secondary, reply)?;
        }
        Ok(())
    }

    /// Plays one full episode driven by the primary policy.
    ///
    /// Resets, renders, then repeatedly asks the primary policy for an action,
    /// steps and renders until the game ends.
    ///
    /// # Errors
    ///
    /// Any policy failure, illegal action or render failure ends the episode
    /// and is returned; nothing is retried.
    #[instrument(
        skip(self),
        fields(primary = %self.primary.name(), secondary = %self.secondary.name())
    )]
    pub fn play_episode(&mut self) -> Result<EpisodeSummary, EnvError> {
        info!("Starting episode");
        self.reset();
        self.render()?;

        let mut steps = 0;
        let mut reward = 0.0;
        while !self.state.is_terminated() {
            // The secondary role always answers inside step, so the
            // primary is to move whenever the game is still running.
            debug_assert_eq!(self.state.current_player(), Self::PRIMARY_PLAYER);
            let action = self.consult(Role::Primary)?;
            let transition = self.step(action)?;
            reward = *transition.reward();
            steps += 1;
            self.render()?;
        }

        let summary = EpisodeSummary::new(self.state.status(), reward, steps);
        info!(status = %summary.status(), reward, steps, "Episode finished");
        Ok(summary)
    }
}

impl Environment for TicTacToeEnv<'_> {
    type Action = usize;
    type Observation = Observation;
    type Info = StepInfo;

    #[instrument(skip(self))]
    fn reset(&mut self) -> (Observation, StepInfo) {
        self.state.reset();
        (self.state.observation(), self.info())
    }

    /// Plays `action` for the primary role, then lets the secondary policy
    /// answer if the game is still running.
    ///
    /// On error the state is restored to what it was before the call, so a
    /// failing secondary policy never leaves a half-played turn.
    #[instrument(skip(self))]
    fn step(&mut self, action: usize) -> Result<Transition<Observation, StepInfo>, EnvError> {
        let snapshot = self.state.clone();
        if let Err(e) = self.two_ply(action) {
            self.state = snapshot;
            return Err(e);
        }

        Ok(Transition::new(
            self.state.observation(),
            self.state.reward(Self::PRIMARY_PLAYER),
            self.state.is_terminated(),
            self.info(),
        ))
    }

    fn render(&mut self) -> Result<(), EnvError> {
        self.renderer.render(&self.state)
    }
}
