//! Pawn move generation: pushes, double pushes, captures, en passant, promotions.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::direction::Direction;
use crate::position::Position;

use super::MoveList;

/// Generate pseudo-legal moves for `color`'s pawn on `from`.
pub(crate) fn gen_pawn(board: &Board, from: Position, color: Color, list: &mut MoveList) {
    let forward = color.forward();

    let one = from + forward;
    if one.is_inside() && board.is_empty(one) {
        push_advance(from, one, color, list);

        let two = from + 2_i8 * forward;
        if from.row() == color.pawn_rank() && two.is_inside() && board.is_empty(two) {
            list.push(Move::double_pawn(from, two));
        }
    }

    let skip = board.pawn_skip(color.opponent());
    for side in [Direction::WEST, Direction::EAST] {
        let to = from + (forward + side);
        if !to.is_inside() {
            continue;
        }

        if skip == Some(to) && board.is_empty(to) {
            list.push(Move::en_passant(from, to));
        } else if board[to].is_some_and(|target| target.color() != color) {
            push_advance(from, to, color, list);
        }
    }
}

/// Push a forward or capturing move, expanded into promotions on the last rank.
fn push_advance(from: Position, to: Position, color: Color, list: &mut MoveList) {
    if to.row() == color.promotion_rank() {
        for promo in PromotionPiece::ALL {
            list.push(Move::promotion(from, to, promo));
        }
    } else {
        list.push(Move::normal(from, to));
    }
}
