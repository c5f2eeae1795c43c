//! Turn and status tracking on top of the board.

use super::board::{BOARD_SIZE, Board, CELL_COUNT};
use super::rules;
use super::types::{GameStatus, Player};
use crate::error::IllegalReason;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Length of the observation vector: 9 cells plus the side to move.
pub const OBSERVATION_LEN: usize = CELL_COUNT + 1;

/// Numeric observation handed to policies.
pub type Observation = [f32; OBSERVATION_LEN];

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a new game with player A to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::A,
            status: GameStatus::InProgress,
        }
    }

    /// Returns to the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::A;
        self.status = GameStatus::InProgress;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Board state followed by the encoding of the player to move.
    pub fn observation(&self) -> Observation {
        let mut observation = [0.0; OBSERVATION_LEN];
        observation[..CELL_COUNT].copy_from_slice(&self.board.state());
        observation[CELL_COUNT] = self.current_player.to_numeric();
        observation
    }

    /// Indices of empty cells in ascending row-major order.
    pub fn legal_actions(&self) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&action| self.board.is_move_valid(action / BOARD_SIZE, action % BOARD_SIZE))
            .collect()
    }

    /// Classifies why `action` would be rejected, or `None` if it is legal.
    pub fn illegal_reason(&self, action: usize) -> Option<IllegalReason> {
        if self.is_terminated() {
            Some(IllegalReason::GameOver)
        } else if action >= CELL_COUNT {
            Some(IllegalReason::OutOfRange)
        } else if !self.board.is_move_valid(action / BOARD_SIZE, action % BOARD_SIZE) {
            Some(IllegalReason::Occupied)
        } else {
            None
        }
    }

    /// Plays `action` for the current player.
    ///
    /// Returns `false` and leaves the state untouched if the game is over or
    /// the board rejects the move. A move that ends the game keeps
    /// `current_player` on the player who made it.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, action: usize) -> bool {
        if self.is_terminated() {
            debug!("Move rejected, game is over");
            return false;
        }

        let row = action / BOARD_SIZE;
        let col = action % BOARD_SIZE;
        if !self.board.make_move(row, col, self.current_player) {
            return false;
        }

        self.update_status();
        if !self.is_terminated() {
            self.current_player = self.current_player.opponent();
        }
        debug!(status = %self.status, next = %self.current_player, "Move applied");
        true
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        self.status = match self.board.check_winner().player() {
            Some(Player::A) => GameStatus::PlayerAWon,
            Some(Player::B) => GameStatus::PlayerBWon,
            None if rules::is_draw(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminated(&self) -> bool {
        self.status.is_terminal()
    }

    /// Terminal reward for `player`: +1 win, -1 loss, 0 otherwise.
    pub fn reward(&self, player: Player) -> f32 {
        match self.status.winner() {
            Some(winner) if winner == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
