//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::Direction;
use crate::position::Position;

use super::MoveList;

/// Walk each direction from `from` until the edge or a piece.
///
/// Empty squares are emitted and the walk continues; an enemy piece is
/// emitted as a capture and ends the walk; a friendly piece ends it silently.
pub(crate) fn gen_slider(
    board: &Board,
    from: Position,
    color: Color,
    dirs: &[Direction],
    list: &mut MoveList,
) {
    for &dir in dirs {
        let mut to = from + dir;
        while to.is_inside() {
            match board[to] {
                None => list.push(Move::normal(from, to)),
                Some(piece) => {
                    if piece.color() != color {
                        list.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            to = to + dir;
        }
    }
}
