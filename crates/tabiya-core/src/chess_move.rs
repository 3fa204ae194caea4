//! Chess move representation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The category of a chess move, with any move-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Quiet move or capture by overwriting the destination.
    Normal,
    /// Two-square pawn advance from the pawn's starting rank.
    DoublePawn,
    /// Pawn capture onto the square an enemy pawn just skipped.
    EnPassant,
    CastleKingside,
    CastleQueenside,
    /// Pawn reaching the last rank, with the piece it becomes.
    Promotion(PromotionPiece),
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Queen = 0,
    Rook = 1,
    Bishop = 2,
    Knight = 3,
}

impl PromotionPiece {
    /// All promotion pieces, in generation order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Return the lowercase letter used in coordinate notation.
    pub const fn symbol(self) -> char {
        self.to_piece_kind().symbol()
    }
}

/// A fully-formed move: kind, origin, and destination.
///
/// Moves are only meaningful for the board they were generated from. Hosts
/// pick one out of a generated [`MoveList`](crate::MoveList) rather than
/// building their own.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    kind: MoveKind,
    from: Position,
    to: Position,
}

impl Move {
    /// Placeholder used to fill move buffers. Never generated.
    pub const NULL: Move = Move::normal(Position::new(0, 0), Position::new(0, 0));

    /// Create a normal (quiet or capture) move.
    pub const fn normal(from: Position, to: Position) -> Move {
        Move {
            kind: MoveKind::Normal,
            from,
            to,
        }
    }

    /// Create a two-square pawn advance.
    pub const fn double_pawn(from: Position, to: Position) -> Move {
        Move {
            kind: MoveKind::DoublePawn,
            from,
            to,
        }
    }

    /// Create an en passant capture landing on `to`, the skipped square.
    pub const fn en_passant(from: Position, to: Position) -> Move {
        Move {
            kind: MoveKind::EnPassant,
            from,
            to,
        }
    }

    /// Create a promotion move.
    pub const fn promotion(from: Position, to: Position, promo: PromotionPiece) -> Move {
        Move {
            kind: MoveKind::Promotion(promo),
            from,
            to,
        }
    }

    /// Create the castling move of `color` toward `side`, expressed as the king's move.
    pub const fn castle(color: Color, side: CastleSide) -> Move {
        let from = CastleSide::king_home(color);
        let to = Position::new(color.back_rank(), side.king_target_column());
        let kind = match side {
            CastleSide::KingSide => MoveKind::CastleKingside,
            CastleSide::QueenSide => MoveKind::CastleQueenside,
        };
        Move { kind, from, to }
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Position {
        self.to
    }

    /// Return the castling side if this is a castling move.
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::CastleKingside => Some(CastleSide::KingSide),
            MoveKind::CastleQueenside => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Return the promotion piece if this is a promotion.
    pub const fn promotion_piece(self) -> Option<PromotionPiece> {
        match self.kind {
            MoveKind::Promotion(promo) => Some(promo),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion_piece() {
            Some(promo) => write!(f, "{}{}{}", self.from, self.to, promo.symbol()),
            None => write!(f, "{}{}", self.from, self.to),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind)
    }
}
