//! Error types for board construction and validation.

use crate::color::Color;
use crate::position::Position;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank at {position}")]
    PawnOnBackRank {
        /// Square of the offending pawn.
        position: Position,
    },
    /// A pawn-skip square that no double step of `color` could have left:
    /// off its rank, occupied, or with no pawn of `color` just beyond it.
    #[error("invalid pawn skip square {position} for {color}")]
    InvalidPawnSkip {
        /// Side the skip square belongs to.
        color: Color,
        /// The rejected square.
        position: Position,
    },
    /// A piece was placed outside the 8x8 board.
    #[error("position {position} is off the board")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
    },
}
