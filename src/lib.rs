//! Strictly Gym - tic-tac-toe as a reinforcement learning environment
//!
//! The engine is exposed through a Gym-style contract: `reset` returns the
//! first observation, `step(action)` returns `(observation, reward, done,
//! info)`, and `render` hands a read-only snapshot to a renderer.
//!
//! # Architecture
//!
//! - **Games**: board, rules and turn-tracking game state
//! - **Env**: the [`Environment`] trait and [`TicTacToeEnv`]
//! - **Policies**: pluggable move sources (console, keyboard, random, first-legal)
//! - **Render**: pluggable views (plain text, full-screen terminal)
//! - **Config**: TOML configuration for the binary
//!
//! # Example
//!
//! ```
//! use strictly_gym::{ConsoleRenderer, Environment, FirstLegalPolicy, TicTacToeEnv};
//!
//! # fn example() -> Result<(), strictly_gym::EnvError> {
//! let mut agent = FirstLegalPolicy::new("agent");
//! let mut opponent = FirstLegalPolicy::new("opponent");
//! let mut renderer = ConsoleRenderer::new(Vec::new());
//! let mut env = TicTacToeEnv::new(&mut agent, &mut opponent, &mut renderer);
//!
//! let (observation, info) = env.reset();
//! assert_eq!(observation[9], 1.0);
//! assert_eq!(info.legal_actions().len(), 9);
//!
//! let (_observation, reward, done, _info) = env.step(4)?.into_parts();
//! assert_eq!(reward, 0.0);
//! assert!(!done);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod env;
mod error;
mod games;
mod policies;
mod render;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PolicyKind, RendererKind};

// Crate-level exports - Environment
pub use env::{Environment, EpisodeSummary, Role, StepInfo, TicTacToeEnv, Transition};

// Crate-level exports - Errors
pub use error::{EnvError, EnvErrorKind, IllegalReason, PolicyError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, CELL_COUNT, Cell, GameState, GameStatus, OBSERVATION_LEN, Observation,
    Player, rules,
};

// Crate-level exports - Policies
pub use policies::{
    ConsolePolicy, FirstLegalPolicy, KeyboardPolicy, Policy, RandomPolicy, terminal_keys,
};

// Crate-level exports - Rendering
pub use render::{ConsoleRenderer, Renderer, TerminalRenderer};
