//! Castling sides and the castling-rights summary of a position.

use std::fmt;
use std::ops::BitOr;

use crate::color::Color;
use crate::position::Position;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the king starts castling from.
    pub const KING_COLUMN: i8 = 4;

    /// Column of the rook that takes part in castling on this side.
    #[inline]
    pub const fn rook_column(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_column(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on, which is also the square the king passes over.
    #[inline]
    pub const fn rook_target_column(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns between king and rook that must be empty.
    #[inline]
    pub const fn between_columns(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Starting square of `color`'s king.
    #[inline]
    pub const fn king_home(color: Color) -> Position {
        Position::new(color.back_rank(), CastleSide::KING_COLUMN)
    }

    /// Starting square of `color`'s rook on this side.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Position {
        Position::new(color.back_rank(), self.rook_column())
    }
}

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// This is a snapshot derived from the board's unmoved kings and rooks, not
/// separately tracked state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// White king-side castling.
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    /// White queen-side castling.
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    /// Black king-side castling.
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    /// Black queen-side castling.
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// The single right for `color` castling toward `side`.
    #[inline]
    pub const fn single(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => CastleRights::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => CastleRights::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => CastleRights::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => CastleRights::BLACK_QUEEN,
        }
    }

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CastleRights {
    type Output = CastleRights;

    #[inline]
    fn bitor(self, rhs: CastleRights) -> CastleRights {
        CastleRights(self.0 | rhs.0)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let flags = [
            (CastleRights::WHITE_KING, 'K'),
            (CastleRights::WHITE_QUEEN, 'Q'),
            (CastleRights::BLACK_KING, 'k'),
            (CastleRights::BLACK_QUEEN, 'q'),
        ];
        for (right, c) in flags {
            if self.contains(right) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self)
    }
}
