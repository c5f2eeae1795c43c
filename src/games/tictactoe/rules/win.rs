//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// The eight lines of three, in scan order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Scans rows, then columns, then the two diagonals and returns the
/// first non-empty cell value that fills a whole line, or
/// [`Cell::Empty`] if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Cell {
    let cells = board.cells();
    for [a, b, c] in LINES {
        let cell = cells[a];
        if !cell.is_empty() && cell == cells[b] && cell == cells[c] {
            return cell;
        }
    }

    Cell::Empty
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), Cell::Empty);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for col in 0..3 {
            assert!(board.make_move(0, col, Player::A));
        }
        assert_eq!(check_winner(&board), Cell::PlayerA);
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for row in 0..3 {
            assert!(board.make_move(row, 1, Player::B));
        }
        assert_eq!(check_winner(&board), Cell::PlayerB);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.make_move(0, 2, Player::B);
        board.make_move(1, 1, Player::B);
        board.make_move(2, 0, Player::B);
        assert_eq!(check_winner(&board), Cell::PlayerB);
    }

    #[test]
    fn test_first_complete_line_wins() {
        // Unreachable in real play; pins the top-down scan order.
        let mut board = Board::new();
        for col in 0..3 {
            board.make_move(2, col, Player::B);
        }
        for row in 0..2 {
            board.make_move(row, 0, Player::A);
        }
        board.make_move(0, 1, Player::A);
        board.make_move(0, 2, Player::A);
        assert_eq!(check_winner(&board), Cell::PlayerA);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.make_move(0, 0, Player::A);
        board.make_move(0, 1, Player::A);
        assert_eq!(check_winner(&board), Cell::Empty);
    }
}
