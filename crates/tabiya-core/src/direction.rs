//! Step vectors across the board.

use std::ops::{Add, Mul};

/// A row/column delta. North points toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Change in row.
    pub row_delta: i8,
    /// Change in column.
    pub column_delta: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(-1, 0);
    pub const SOUTH: Direction = Direction::new(1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(-1, 1);
    pub const NORTH_WEST: Direction = Direction::new(-1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(1, -1);

    /// The four rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    /// The four bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// All eight neighbouring directions.
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTH_EAST,
        Direction::EAST,
        Direction::SOUTH_EAST,
        Direction::SOUTH,
        Direction::SOUTH_WEST,
        Direction::WEST,
        Direction::NORTH_WEST,
    ];

    /// Create a direction from raw deltas.
    #[inline]
    pub const fn new(row_delta: i8, column_delta: i8) -> Direction {
        Direction {
            row_delta,
            column_delta,
        }
    }
}

impl Add for Direction {
    type Output = Direction;

    #[inline]
    fn add(self, rhs: Direction) -> Direction {
        Direction::new(
            self.row_delta + rhs.row_delta,
            self.column_delta + rhs.column_delta,
        )
    }
}

impl Mul<Direction> for i8 {
    type Output = Direction;

    #[inline]
    fn mul(self, rhs: Direction) -> Direction {
        Direction::new(self * rhs.row_delta, self * rhs.column_delta)
    }
}
