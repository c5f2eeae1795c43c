//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player A (moves first, encoded +1).
    #[strum(to_string = "PlayerA")]
    A,
    /// Player B (moves second, encoded -1).
    #[strum(to_string = "PlayerB")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Numeric encoding used in observations.
    pub fn to_numeric(self) -> f32 {
        Cell::from(self).to_numeric()
    }
}

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by player A.
    PlayerA,
    /// Marked by player B.
    PlayerB,
}

impl Cell {
    /// Numeric encoding: `Empty` 0, `PlayerA` +1, `PlayerB` -1.
    pub fn to_numeric(self) -> f32 {
        match self {
            Cell::Empty => 0.0,
            Cell::PlayerA => 1.0,
            Cell::PlayerB => -1.0,
        }
    }

    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    /// Screen glyph: `X` for player A, `O` for player B, blank otherwise.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::PlayerA => 'X',
            Cell::PlayerB => 'O',
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Player A completed a line.
    PlayerAWon,
    /// Player B completed a line.
    PlayerBWon,
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// Returns the winner, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::PlayerAWon => Some(Player::A),
            GameStatus::PlayerBWon => Some(Player::B),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}
