//! Per-color, per-kind piece tallies.

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Piece counts of a position, built fresh from a board snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counting {
    counts: [[u32; PieceKind::COUNT]; Color::COUNT],
    total: u32,
}

impl Counting {
    /// Create an empty tally.
    pub fn new() -> Counting {
        Counting::default()
    }

    /// Count one more `kind` for `color`.
    pub fn increment(&mut self, color: Color, kind: PieceKind) {
        self.counts[color.index()][kind.index()] += 1;
        self.total += 1;
    }

    /// Number of `kind` pieces owned by `color`.
    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.counts[color.index()][kind.index()]
    }

    #[inline]
    pub fn white(&self, kind: PieceKind) -> u32 {
        self.count(Color::White, kind)
    }

    #[inline]
    pub fn black(&self, kind: PieceKind) -> u32 {
        self.count(Color::Black, kind)
    }

    /// Number of pieces on the board, kings included.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }
}
