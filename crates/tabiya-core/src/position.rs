//! Board coordinates as (row, column) pairs.

use std::fmt;
use std::ops::Add;

use crate::color::Color;
use crate::direction::Direction;

/// A square on the board.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1);
/// column 0 is the a-file. Positions produced by stepping off the edge are
/// representable so generators can test them with [`Position::is_inside`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: i8,
    column: i8,
}

impl Position {
    /// Total number of squares on the board.
    pub const COUNT: usize = 64;

    /// Create a position from a row and a column.
    #[inline]
    pub const fn new(row: i8, column: i8) -> Position {
        Position { row, column }
    }

    /// Parse an algebraic square name such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        let column = (file_byte - b'a') as i8;
        let row = 7 - (rank_byte - b'1') as i8;
        Some(Position::new(row, column))
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// Return `true` if the position lies on the 8x8 board.
    #[inline]
    pub const fn is_inside(self) -> bool {
        self.row >= 0 && self.row < 8 && self.column >= 0 && self.column < 8
    }

    /// Return the row-major index (0..63). Only meaningful inside the board.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.column as usize
    }

    /// Return the color of the square: White for light squares, Black for dark.
    #[inline]
    pub const fn square_color(self) -> Color {
        if (self.row + self.column) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Iterate over all 64 squares in board-scan order (row 0..7, column 0..7).
    pub fn all() -> impl Iterator<Item = Position> {
        (0i8..8).flat_map(|row| (0i8..8).map(move |column| Position::new(row, column)))
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    #[inline]
    fn add(self, dir: Direction) -> Position {
        Position::new(self.row + dir.row_delta, self.column + dir.column_delta)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inside() {
            let file = (b'a' + self.column as u8) as char;
            let rank = 8 - self.row;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({}, {})", self.row, self.column)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}
