//! Errors returned when a host command is rejected.

use tabiya_core::{BoardError, Color, Move};

use crate::result::GameResult;

/// Reasons a [`GameState`](crate::GameState) refuses a command. A refused
/// command leaves the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game has already finished.
    #[error("game is already over: {result}")]
    GameOver {
        /// How the game ended.
        result: GameResult,
    },

    /// The move is not among the active player's legal moves.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },

    /// A custom starting board leaves the side not on move in check, so the
    /// side on move could capture a king.
    #[error("{color} is in check but not on move")]
    OpponentInCheck {
        /// The side that is in check.
        color: Color,
    },

    /// A custom starting board failed validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}
