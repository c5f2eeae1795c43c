//! Error types for the game engine and environment.

use crate::env::Role;
use derive_more::Display;
use tracing::instrument;

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IllegalReason {
    /// Action index outside `[0, 9)`.
    #[display("index is outside the board")]
    OutOfRange,
    /// Target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The episode has already ended.
    #[display("game is already over")]
    GameOver,
}

/// Error raised by a policy while choosing its action.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PolicyError {
    /// Asked to choose on a board with no empty cell.
    #[display("No legal actions available")]
    NoLegalActions,

    /// The input source was exhausted before a move was entered.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// The user asked to stop playing.
    #[display("Aborted by user")]
    Aborted,

    /// Reading input failed.
    #[display("Input error: {}", _0)]
    Io(String),
}

impl std::error::Error for PolicyError {}

impl From<std::io::Error> for PolicyError {
    fn from(err: std::io::Error) -> Self {
        PolicyError::Io(err.to_string())
    }
}

/// Specific failure carried by an [`EnvError`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EnvErrorKind {
    /// Direct cell access outside the 3x3 grid.
    #[display("Coordinate ({}, {}) is outside the 3x3 board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// An action that cannot be applied to the current state.
    #[display("Illegal action {} by {} role: {}", action, role, reason)]
    IllegalAction {
        /// Role that submitted the action.
        role: Role,
        /// The rejected action index.
        action: usize,
        /// Why it was rejected.
        reason: IllegalReason,
    },

    /// A policy was asked to choose but reported no legal action.
    ///
    /// Raised by the environment in place of [`EnvErrorKind::PolicyFailure`]
    /// when the policy error is [`PolicyError::NoLegalActions`].
    #[display("No legal actions remain")]
    NoLegalActions,

    /// A policy failed while deciding its move.
    #[display("{} policy failed: {}", role, source)]
    PolicyFailure {
        /// Role whose policy failed.
        role: Role,
        /// Underlying policy error.
        source: PolicyError,
    },

    /// Presenting the state failed.
    #[display("Render failed: {}", _0)]
    Render(String),
}

/// Environment error with location tracking.
#[derive(Debug, Clone, Display)]
#[display("Environment error: {} at {}:{}", kind, file, line)]
pub struct EnvError {
    /// What went wrong.
    pub kind: EnvErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EnvError {
    /// Creates a new environment error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EnvErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EnvErrorKind {
        &self.kind
    }
}

impl std::error::Error for EnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EnvErrorKind::PolicyFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<EnvErrorKind> for EnvError {
    #[track_caller]
    fn from(kind: EnvErrorKind) -> Self {
        Self::new(kind)
    }
}
