//! Tic-tac-toe engine: board, rules and turn-tracking game state.

mod board;
pub mod rules;
mod state;
mod types;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use state::{GameState, OBSERVATION_LEN, Observation};
pub use types::{Cell, GameStatus, Player};
