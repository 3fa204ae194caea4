//! Colored chess piece with its has-moved flag.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::movegen::{self, MoveList};
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A colored piece. Small and `Copy`, so copying a board copies every piece.
///
/// `has_moved` starts out `false` and is set the first time a move relocates
/// the piece. Pieces created by promotion start out moved.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Return this piece with its has-moved flag set.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return `true` if this is a `kind` belonging to `color`.
    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Letter for this piece: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Generate the pseudo-legal moves of this piece standing on `from`.
    ///
    /// Only the piece's own movement pattern and board occupancy are taken
    /// into account. King safety is left to [`Move::is_legal`](crate::Move::is_legal),
    /// and castling candidates are added by [`movegen::candidate_moves`].
    pub fn moves(self, from: Position, board: &Board) -> MoveList {
        let mut list = MoveList::new();
        match self.kind {
            PieceKind::Pawn => movegen::pawns::gen_pawn(board, from, self.color, &mut list),
            PieceKind::Knight => movegen::knights::gen_knight(board, from, self.color, &mut list),
            PieceKind::Bishop => {
                movegen::sliders::gen_slider(board, from, self.color, &Direction::DIAGONAL, &mut list)
            }
            PieceKind::Rook => {
                movegen::sliders::gen_slider(board, from, self.color, &Direction::ORTHOGONAL, &mut list)
            }
            PieceKind::Queen => {
                movegen::sliders::gen_slider(board, from, self.color, &Direction::ALL, &mut list)
            }
            PieceKind::King => movegen::king::gen_king_steps(board, from, self.color, &mut list),
        }
        list
    }

    /// Return `true` if this piece, standing on `from`, attacks the opposing king.
    ///
    /// Only reachability of the king's square is tested; no move list is built.
    pub fn can_capture_opponent_king(self, from: Position, board: &Board) -> bool {
        board
            .king_position(self.color.opponent())
            .is_some_and(|king| self.attacks(from, king, board))
    }

    /// Return `true` if this piece, standing on `from`, could capture on `target`.
    #[inline]
    pub fn attacks(self, from: Position, target: Position, board: &Board) -> bool {
        movegen::attacks::attacks(self, from, target, board)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.symbol().to_ascii_uppercase();
        let moved = if self.has_moved { "*" } else { "" };
        write!(f, "{color_prefix}{kind_char}{moved}")
    }
}
