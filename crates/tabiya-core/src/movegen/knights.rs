//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::Direction;
use crate::position::Position;

use super::MoveList;

/// The eight knight jumps.
pub(super) const KNIGHT_JUMPS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
];

/// Generate pseudo-legal knight moves.
pub(crate) fn gen_knight(board: &Board, from: Position, color: Color, list: &mut MoveList) {
    gen_steps(board, from, color, &KNIGHT_JUMPS, list);
}

/// Single-step moves to each `from + dir` that is on the board and not held by a friend.
pub(super) fn gen_steps(
    board: &Board,
    from: Position,
    color: Color,
    dirs: &[Direction],
    list: &mut MoveList,
) {
    for &dir in dirs {
        let to = from + dir;
        if to.is_inside() && board[to].is_none_or(|piece| piece.color() != color) {
            list.push(Move::normal(from, to));
        }
    }
}
