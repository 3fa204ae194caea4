//! Move execution and the copy-based legality test.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Board {
    /// Return `true` if any of `color`'s opponent's pieces can capture `color`'s king.
    ///
    /// A board without a king for `color` is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_position(color) else {
            return false;
        };
        self.pieces()
            .filter(|(_, piece)| piece.color() != color)
            .any(|(pos, piece)| piece.attacks(pos, king, self))
    }

    /// Return `true` if `color` has a legal en passant capture right now.
    pub fn can_capture_en_passant(&self, color: Color) -> bool {
        let Some(skip) = self.pawn_skip(color.opponent()) else {
            return false;
        };

        let behind = -1_i8 * color.forward();
        [behind + Direction::WEST, behind + Direction::EAST]
            .into_iter()
            .map(|dir| skip + dir)
            .filter(|pos| pos.is_inside())
            .filter(|&pos| self[pos].is_some_and(|piece| piece.is(color, PieceKind::Pawn)))
            .any(|pos| Move::en_passant(pos, skip).is_legal(self))
    }
}

impl Move {
    /// Apply the move to `board` in place.
    ///
    /// Returns `true` if the move captured a piece or moved a pawn, i.e. if
    /// it resets the fifty-move count. An empty origin square leaves the
    /// board untouched and returns `false`.
    pub fn execute(&self, board: &mut Board) -> bool {
        let Some(piece) = board.take(self.from()) else {
            return false;
        };
        let color = piece.color();
        let from = self.from();
        let to = self.to();
        board.clear_pawn_skips();

        match self.kind() {
            MoveKind::Normal => {
                let captured = board[to].is_some();
                board[to] = Some(piece.moved());
                captured || piece.kind() == PieceKind::Pawn
            }

            MoveKind::DoublePawn => {
                board[to] = Some(piece.moved());
                let skipped = Position::new((from.row() + to.row()) / 2, from.column());
                board.set_pawn_skip(color, Some(skipped));
                true
            }

            MoveKind::EnPassant => {
                board[to] = Some(piece.moved());
                // The captured pawn sits beside the origin, one rank behind `to`.
                board.take(Position::new(from.row(), to.column()));
                true
            }

            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let side = match self.kind() {
                    MoveKind::CastleKingside => CastleSide::KingSide,
                    _ => CastleSide::QueenSide,
                };
                board[to] = Some(piece.moved());
                let rook_from = side.rook_home(color);
                let rook_to = Position::new(from.row(), side.rook_target_column());
                if let Some(rook) = board.take(rook_from) {
                    board[rook_to] = Some(rook.moved());
                }
                false
            }

            MoveKind::Promotion(promo) => {
                board[to] = Some(Piece::new(promo.to_piece_kind(), color).moved());
                true
            }
        }
    }

    /// Return `true` if playing the move would not leave the mover in check.
    ///
    /// The move is simulated on a copy of `board`; the original is never
    /// modified. Castling also requires the castling right, an empty path,
    /// and a king that is neither in check nor passing over an attacked
    /// square.
    pub fn is_legal(&self, board: &Board) -> bool {
        let Some(piece) = board[self.from()] else {
            return false;
        };
        let mover = piece.color();

        if let Some(side) = self.castle_side()
            && !can_castle(board, mover, side)
        {
            trace!(mv = %self, "castling preconditions fail");
            return false;
        }

        let mut copy = *board;
        self.execute(&mut copy);
        let legal = !copy.is_in_check(mover);
        if !legal {
            trace!(mv = %self, "move leaves own king in check");
        }
        legal
    }
}

/// Castling-specific preconditions on top of the post-move check test.
fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    if !board.castle_right(color, side) {
        return false;
    }

    let row = color.back_rank();
    let path_clear = side
        .between_columns()
        .iter()
        .all(|&column| board.is_empty(Position::new(row, column)));
    if !path_clear || board.is_in_check(color) {
        return false;
    }

    // Put the king on the square it passes over and see whether it is attacked there.
    let home = CastleSide::king_home(color);
    let pass = Position::new(row, side.rook_target_column());
    let mut copy = *board;
    copy[pass] = copy.take(home);
    !copy.is_in_check(color)
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle_rights::CastleSide;
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn pos(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    fn put(board: &mut Board, name: &str, color: Color, kind: PieceKind) {
        board[pos(name)] = Some(Piece::new(kind, color));
    }

    /// Kings on e1/e8 with both kingside and queenside rooks at home.
    fn castling_board() -> Board {
        let mut board = Board::empty();
        put(&mut board, "e1", Color::White, PieceKind::King);
        put(&mut board, "a1", Color::White, PieceKind::Rook);
        put(&mut board, "h1", Color::White, PieceKind::Rook);
        put(&mut board, "e8", Color::Black, PieceKind::King);
        board
    }

    #[test]
    fn normal_move_marks_piece_moved() {
        let mut board = Board::starting_position();
        let progress = Move::normal(pos("g1"), pos("f3")).execute(&mut board);
        assert!(!progress);
        assert!(board.is_empty(pos("g1")));
        let knight = board[pos("f3")].unwrap();
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert!(knight.has_moved());
    }

    #[test]
    fn capture_overwrites_and_reports_progress() {
        let mut board = Board::empty();
        put(&mut board, "d1", Color::White, PieceKind::Rook);
        put(&mut board, "d7", Color::Black, PieceKind::Knight);
        assert!(Move::normal(pos("d1"), pos("d7")).execute(&mut board));
        assert_eq!(board[pos("d7")].unwrap().kind(), PieceKind::Rook);
        assert_eq!(board.piece_positions().count(), 1);
    }

    #[test]
    fn empty_origin_is_a_no_op() {
        let mut board = Board::starting_position();
        assert!(!Move::normal(pos("e4"), pos("e5")).execute(&mut board));
        assert_eq!(board, Board::starting_position());
        assert!(!Move::normal(pos("e4"), pos("e5")).is_legal(&board));
    }

    #[test]
    fn double_pawn_records_skip_for_one_ply() {
        let mut board = Board::starting_position();
        assert!(Move::double_pawn(pos("e2"), pos("e4")).execute(&mut board));
        assert_eq!(board.pawn_skip(Color::White), Some(pos("e3")));

        Move::normal(pos("g8"), pos("f6")).execute(&mut board);
        assert_eq!(board.pawn_skip(Color::White), None);
        assert_eq!(board.pawn_skip(Color::Black), None);
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        let mut board = Board::empty();
        put(&mut board, "e1", Color::White, PieceKind::King);
        put(&mut board, "e8", Color::Black, PieceKind::King);
        put(&mut board, "d7", Color::Black, PieceKind::Pawn);
        put(&mut board, "e5", Color::White, PieceKind::Pawn);

        Move::double_pawn(pos("d7"), pos("d5")).execute(&mut board);
        assert_eq!(board.pawn_skip(Color::Black), Some(pos("d6")));
        assert!(board.can_capture_en_passant(Color::White));
        assert!(!board.can_capture_en_passant(Color::Black));

        assert!(Move::en_passant(pos("e5"), pos("d6")).execute(&mut board));
        assert!(board.is_empty(pos("d5")));
        assert!(board.is_empty(pos("e5")));
        assert_eq!(board[pos("d6")].unwrap().kind(), PieceKind::Pawn);
        assert_eq!(board.pawn_skip(Color::Black), None);
    }

    #[test]
    fn en_passant_refused_when_it_exposes_king() {
        // King a5 and pawn b5 share the rank with a rook on h5; taking c6
        // en passant removes both pawns from the rank.
        let mut board = Board::empty();
        put(&mut board, "a5", Color::White, PieceKind::King);
        put(&mut board, "b5", Color::White, PieceKind::Pawn);
        put(&mut board, "c7", Color::Black, PieceKind::Pawn);
        put(&mut board, "h5", Color::Black, PieceKind::Rook);
        put(&mut board, "e8", Color::Black, PieceKind::King);

        Move::double_pawn(pos("c7"), pos("c5")).execute(&mut board);
        assert!(!Move::en_passant(pos("b5"), pos("c6")).is_legal(&board));
        assert!(!board.can_capture_en_passant(Color::White));
    }

    #[test]
    fn promotion_creates_moved_piece() {
        let mut board = Board::empty();
        put(&mut board, "a7", Color::White, PieceKind::Pawn);
        assert!(Move::promotion(pos("a7"), pos("a8"), PromotionPiece::Knight).execute(&mut board));
        let knight = board[pos("a8")].unwrap();
        assert!(knight.is(Color::White, PieceKind::Knight));
        assert!(knight.has_moved());
        assert!(board.is_empty(pos("a7")));
    }

    #[test]
    fn castle_kingside_relocates_king_and_rook() {
        let mut board = castling_board();
        let mv = Move::castle(Color::White, CastleSide::KingSide);
        assert!(mv.is_legal(&board));
        assert!(!mv.execute(&mut board));
        assert!(board[pos("g1")].unwrap().is(Color::White, PieceKind::King));
        assert!(board[pos("f1")].unwrap().is(Color::White, PieceKind::Rook));
        assert!(board[pos("f1")].unwrap().has_moved());
        assert!(board.is_empty(pos("e1")));
        assert!(board.is_empty(pos("h1")));
    }

    #[test]
    fn castle_queenside_relocates_king_and_rook() {
        let mut board = castling_board();
        let mv = Move::castle(Color::White, CastleSide::QueenSide);
        assert!(mv.is_legal(&board));
        mv.execute(&mut board);
        assert!(board[pos("c1")].unwrap().is(Color::White, PieceKind::King));
        assert!(board[pos("d1")].unwrap().is(Color::White, PieceKind::Rook));
        assert!(board.is_empty(pos("a1")));
        assert!(!board.castle_right_kingside(Color::White));
    }

    #[test]
    fn castle_blocked_path() {
        let mut board = castling_board();
        put(&mut board, "b1", Color::White, PieceKind::Knight);
        assert!(!Move::castle(Color::White, CastleSide::QueenSide).is_legal(&board));
        assert!(Move::castle(Color::White, CastleSide::KingSide).is_legal(&board));
    }

    #[test]
    fn castle_out_of_check_refused() {
        let mut board = castling_board();
        put(&mut board, "e5", Color::Black, PieceKind::Rook);
        assert!(board.is_in_check(Color::White));
        assert!(!Move::castle(Color::White, CastleSide::KingSide).is_legal(&board));
        assert!(!Move::castle(Color::White, CastleSide::QueenSide).is_legal(&board));
    }

    #[test]
    fn castle_through_attacked_square_refused() {
        // Rook on f8 covers f1, the square the king passes over; g1 is safe.
        let mut board = castling_board();
        put(&mut board, "f8", Color::Black, PieceKind::Rook);
        let kingside = Move::castle(Color::White, CastleSide::KingSide);
        assert!(!kingside.is_legal(&board));

        // The generic after-move test alone would accept it.
        let mut after = board;
        kingside.execute(&mut after);
        assert!(!after.is_in_check(Color::White));

        assert!(Move::castle(Color::White, CastleSide::QueenSide).is_legal(&board));
    }

    #[test]
    fn castle_into_check_refused() {
        let mut board = castling_board();
        put(&mut board, "g8", Color::Black, PieceKind::Rook);
        assert!(!Move::castle(Color::White, CastleSide::KingSide).is_legal(&board));
    }

    #[test]
    fn queenside_b_file_attack_is_allowed() {
        // Only the king's path (d1, c1) must be safe; b1 just has to be empty.
        let mut board = castling_board();
        put(&mut board, "b8", Color::Black, PieceKind::Rook);
        assert!(Move::castle(Color::White, CastleSide::QueenSide).is_legal(&board));
    }

    #[test]
    fn pinned_piece_cannot_move_off_line() {
        let mut board = Board::empty();
        put(&mut board, "e1", Color::White, PieceKind::King);
        put(&mut board, "e2", Color::White, PieceKind::Knight);
        put(&mut board, "e8", Color::Black, PieceKind::Rook);
        put(&mut board, "a8", Color::Black, PieceKind::King);
        assert!(!Move::normal(pos("e2"), pos("c3")).is_legal(&board));
        assert!(Move::normal(pos("e1"), pos("d1")).is_legal(&board));
    }

    #[test]
    fn legality_check_leaves_board_untouched() {
        let mut board = Board::empty();
        put(&mut board, "e1", Color::White, PieceKind::King);
        put(&mut board, "e2", Color::White, PieceKind::Rook);
        put(&mut board, "e8", Color::Black, PieceKind::Rook);
        let before = board;
        assert!(!Move::normal(pos("e2"), pos("a2")).is_legal(&board));
        assert!(Move::normal(pos("e2"), pos("e8")).is_legal(&board));
        assert_eq!(board, before);
    }

    #[test]
    fn kingless_board_is_never_in_check() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::Black, PieceKind::Queen);
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn starting_position_not_in_check() {
        let board = Board::starting_position();
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }
}
