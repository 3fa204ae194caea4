//! King steps and castling candidates.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::Direction;
use crate::position::Position;

use super::MoveList;
use super::knights::gen_steps;

/// Generate the king's one-square moves. Castling is not part of the pattern.
pub(crate) fn gen_king_steps(board: &Board, from: Position, color: Color, list: &mut MoveList) {
    gen_steps(board, from, color, &Direction::ALL, list);
}

/// Add castling candidates for a king on `from` whose rights hold and whose path is empty.
///
/// Attacked squares are not examined here; [`Move::is_legal`] rejects those.
pub(super) fn gen_castles(board: &Board, from: Position, color: Color, list: &mut MoveList) {
    if from != CastleSide::king_home(color) {
        return;
    }

    let row = color.back_rank();
    for side in CastleSide::ALL {
        let path_clear = side
            .between_columns()
            .iter()
            .all(|&column| board.is_empty(Position::new(row, column)));
        if path_clear && board.castle_right(color, side) {
            list.push(Move::castle(color, side));
        }
    }
}
