//! Fluent builder for constructing custom positions.
//!
//! Positions are placed piece by piece rather than parsed from text.
//!
//! # Example
//! ```
//! use tabiya_core::{BoardBuilder, Color, Piece, PieceKind, Position};
//!
//! let board = BoardBuilder::new()
//!     .piece(Position::new(7, 4), Piece::new(PieceKind::King, Color::White))
//!     .piece(Position::new(0, 4), Piece::new(PieceKind::King, Color::Black))
//!     .piece(Position::new(6, 0), Piece::new(PieceKind::Pawn, Color::White))
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_positions().count(), 3);
//! ```

use crate::board::Board;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::position::Position;

/// A fluent builder for constructing validated [`Board`] positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Position, Piece)>,
    pawn_skips: [Option<Position>; Color::COUNT],
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            pawn_skips: [None; Color::COUNT],
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::starting_position().pieces().collect(),
            pawn_skips: [None; Color::COUNT],
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, position: Position, piece: Piece) -> Self {
        self.pieces.retain(|(pos, _)| *pos != position);
        self.pieces.push((position, piece));
        self
    }

    /// Place a piece that counts as having moved already.
    #[must_use]
    pub fn moved_piece(self, position: Position, piece: Piece) -> Self {
        self.piece(position, piece.moved())
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.pieces.retain(|(pos, _)| *pos != position);
        self
    }

    /// Record the square `color`'s pawn skipped on the previous ply.
    #[must_use]
    pub fn pawn_skip(mut self, color: Color, position: Position) -> Self {
        self.pawn_skips[color.index()] = Some(position);
        self
    }

    /// Build and validate the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a piece or skip square off the
    /// board, and any error from [`Board::validate`], including a skip square
    /// no double step could have produced.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (position, piece) in self.pieces {
            if !position.is_inside() {
                return Err(BoardError::OutOfBounds { position });
            }
            board[position] = Some(piece);
        }

        for color in Color::ALL {
            let skip = self.pawn_skips[color.index()];
            if let Some(position) = skip
                && !position.is_inside()
            {
                return Err(BoardError::OutOfBounds { position });
            }
            board.set_pawn_skip(color, skip);
        }

        board.validate()?;
        Ok(board)
    }
}
