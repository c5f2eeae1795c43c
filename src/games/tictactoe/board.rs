//! 3x3 tic-tac-toe board.

use super::rules;
use super::types::{Cell, Player};
use crate::error::{EnvError, EnvErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks that the coordinates are on the board and the cell is empty.
    pub fn is_move_valid(&self, row: usize, col: usize) -> bool {
        in_bounds(row, col) && self.cells[row * BOARD_SIZE + col].is_empty()
    }

    /// Places `player`'s mark at (`row`, `col`).
    ///
    /// Returns `false` without touching the board if the move is not valid.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.is_move_valid(row, col) {
            debug!("Move rejected by board");
            return false;
        }
        self.cells[row * BOARD_SIZE + col] = player.into();
        true
    }

    /// Returns the first completed line's owner, or [`Cell::Empty`].
    pub fn check_winner(&self) -> Cell {
        rules::check_winner(self)
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Gets the cell at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`EnvErrorKind::InvalidCoordinate`] if either coordinate is
    /// outside `[0, 3)`.
    pub fn get_at(&self, row: usize, col: usize) -> Result<Cell, EnvError> {
        if !in_bounds(row, col) {
            return Err(EnvError::new(EnvErrorKind::InvalidCoordinate { row, col }));
        }
        Ok(self.cells[row * BOARD_SIZE + col])
    }

    /// Row-major numeric view of the board (+1 / -1 / 0).
    pub fn state(&self) -> [f32; CELL_COUNT] {
        self.cells.map(Cell::to_numeric)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                result.push(' ');
                result.push(self.cells[row * BOARD_SIZE + col].glyph());
                result.push(' ');
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n-----------\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn in_bounds(row: usize, col: usize) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}
