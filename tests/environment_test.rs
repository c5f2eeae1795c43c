//! Tests for the Gym-style tic-tac-toe environment.

use std::collections::VecDeque;
use strictly_gym::{
    ConsoleRenderer, EnvError, EnvErrorKind, Environment, FirstLegalPolicy, GameState, GameStatus,
    IllegalReason, Policy, PolicyError, RandomPolicy, Renderer, Role, StepInfo, TicTacToeEnv,
};

/// Plays a fixed list of actions, then fails with `InputClosed`.
struct ScriptedPolicy {
    actions: VecDeque<usize>,
}

impl ScriptedPolicy {
    fn new(actions: &[usize]) -> Self {
        Self {
            actions: actions.iter().copied().collect(),
        }
    }
}

impl Policy for ScriptedPolicy {
    fn choose_action(&mut self, _state: &GameState) -> Result<usize, PolicyError> {
        self.actions.pop_front().ok_or(PolicyError::InputClosed)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Keeps a copy of every state it is shown.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<GameState>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, state: &GameState) -> Result<(), EnvError> {
        self.frames.push(state.clone());
        Ok(())
    }
}

#[test]
fn test_reset_starts_empty() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = FirstLegalPolicy::new("b");
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);

    let (observation, info) = env.reset();
    assert_eq!(observation, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(info.legal_actions(), &vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(info.status(), &GameStatus::InProgress);
}

#[test]
fn test_step_applies_both_plies() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = FirstLegalPolicy::new("b");
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
    env.reset();

    let (observation, reward, done, info) = env.step(0).unwrap().into_parts();
    // A on 0, first-legal reply on 1, A to move again.
    assert_eq!(observation[0], 1.0);
    assert_eq!(observation[1], -1.0);
    assert_eq!(observation[9], 1.0);
    assert_eq!(observation[..9].iter().filter(|v| **v != 0.0).count(), 2);
    assert_eq!(reward, 0.0);
    assert!(!done);
    assert_eq!(info.legal_actions().len(), 7);
}

#[test]
fn test_occupied_step_is_rejected_and_state_kept() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = FirstLegalPolicy::new("b");
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
    env.reset();
    env.step(4).unwrap();

    let before = env.state().clone();
    let err = env.step(4).unwrap_err();
    assert_eq!(
        err.kind(),
        &EnvErrorKind::IllegalAction {
            role: Role::Primary,
            action: 4,
            reason: IllegalReason::Occupied,
        }
    );
    assert_eq!(env.state(), &before);
}

#[test]
fn test_out_of_range_step_is_rejected() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = FirstLegalPolicy::new("b");
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
    env.reset();

    let err = env.step(9).unwrap_err();
    assert!(matches!(
        err.kind(),
        EnvErrorKind::IllegalAction {
            reason: IllegalReason::OutOfRange,
            ..
        }
    ));
    assert_eq!(env.state(), &GameState::new());
}

#[test]
fn test_secondary_failure_rolls_back_primary_move() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = ScriptedPolicy::new(&[]);
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
    env.reset();

    let err = env.step(4).unwrap_err();
    assert_eq!(
        err.kind(),
        &EnvErrorKind::PolicyFailure {
            role: Role::Secondary,
            source: PolicyError::InputClosed,
        }
    );
    assert_eq!(env.state(), &GameState::new());
}

#[test]
fn test_illegal_secondary_reply_is_attributed() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = ScriptedPolicy::new(&[4]);
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
    env.reset();

    let err = env.step(4).unwrap_err();
    assert!(matches!(
        err.kind(),
        EnvErrorKind::IllegalAction {
            role: Role::Secondary,
            action: 4,
            reason: IllegalReason::Occupied,
        }
    ));
    assert_eq!(env.state(), &GameState::new());
}

#[test]
fn test_primary_win_ends_without_reply() {
    let mut primary = FirstLegalPolicy::new("a");
    // B plays 3 and 4, leaving the top row open for A.
    let mut secondary = ScriptedPolicy::new(&[3, 4]);
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
    env.reset();

    assert!(!env.step(0).unwrap().done());
    assert!(!env.step(1).unwrap().done());
    let (_, reward, done, info) = env.step(2).unwrap().into_parts();
    assert!(done);
    assert_eq!(reward, 1.0);
    assert_eq!(info.status(), &GameStatus::PlayerAWon);

    let err = env.step(5).unwrap_err();
    assert!(matches!(
        err.kind(),
        EnvErrorKind::IllegalAction {
            reason: IllegalReason::GameOver,
            ..
        }
    ));
}

#[test]
fn test_secondary_win_gives_negative_reward() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = ScriptedPolicy::new(&[0, 1, 2]);
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
    env.reset();

    env.step(3).unwrap();
    env.step(4).unwrap();
    let (_, reward, done, info) = env.step(8).unwrap().into_parts();
    assert!(done);
    assert_eq!(reward, -1.0);
    assert_eq!(info.status(), &GameStatus::PlayerBWon);
}

#[test]
fn test_play_episode_renders_every_frame() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = FirstLegalPolicy::new("b");
    let mut renderer = RecordingRenderer::default();
    let summary = {
        let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
        env.play_episode().unwrap()
    };

    // First-legal against first-legal: A takes 0, 2, 4, 6 and wins on the diagonal.
    assert_eq!(summary.status(), &GameStatus::PlayerAWon);
    assert_eq!(summary.reward(), &1.0);
    assert_eq!(summary.steps(), &4);

    assert_eq!(renderer.frames.len(), 5);
    assert_eq!(renderer.frames[0], GameState::new());
    assert_eq!(renderer.frames[4].status(), GameStatus::PlayerAWon);
}

#[test]
fn test_play_episode_reports_primary_failure() {
    let mut primary = ScriptedPolicy::new(&[0]);
    let mut secondary = FirstLegalPolicy::new("b");
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);

    let err = env.play_episode().unwrap_err();
    assert_eq!(
        err.kind(),
        &EnvErrorKind::PolicyFailure {
            role: Role::Primary,
            source: PolicyError::InputClosed,
        }
    );
}

#[test]
fn test_random_episodes_always_terminate() {
    let mut primary = RandomPolicy::with_seed("a", 10);
    let mut secondary = RandomPolicy::with_seed("b", 11);
    let mut renderer = ConsoleRenderer::new(Vec::new());
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);

    for _ in 0..25 {
        let summary = env.play_episode().unwrap();
        assert!(summary.status().is_terminal());
        assert!(*summary.steps() >= 3 && *summary.steps() <= 5);
        let expected = match summary.status() {
            GameStatus::PlayerAWon => 1.0,
            GameStatus::PlayerBWon => -1.0,
            _ => 0.0,
        };
        assert_eq!(summary.reward(), &expected);
    }
}

#[test]
fn test_step_info_json_keys() {
    let info = StepInfo::new(vec![2, 5], GameStatus::InProgress);
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["legal_actions"], serde_json::json!([2, 5]));
    assert_eq!(value["game_status"], serde_json::json!("InProgress"));
}

/// Claims there is nothing to play, whatever the board.
struct ExhaustedPolicy;

impl Policy for ExhaustedPolicy {
    fn choose_action(&mut self, _state: &GameState) -> Result<usize, PolicyError> {
        Err(PolicyError::NoLegalActions)
    }

    fn name(&self) -> &str {
        "exhausted"
    }
}

#[test]
fn test_policy_without_moves_reports_no_legal_actions() {
    let mut primary = FirstLegalPolicy::new("a");
    let mut secondary = ExhaustedPolicy;
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);
    env.reset();

    let err = env.step(4).unwrap_err();
    assert_eq!(err.kind(), &EnvErrorKind::NoLegalActions);
    assert_eq!(env.state(), &GameState::new());
}

#[test]
fn test_episode_with_exhausted_primary_reports_no_legal_actions() {
    let mut primary = ExhaustedPolicy;
    let mut secondary = FirstLegalPolicy::new("b");
    let mut renderer = RecordingRenderer::default();
    let mut env = TicTacToeEnv::new(&mut primary, &mut secondary, &mut renderer);

    let err = env.play_episode().unwrap_err();
    assert_eq!(err.kind(), &EnvErrorKind::NoLegalActions);
}
