//! The chess board: an 8x8 grid of optional pieces plus per-player pawn-skip squares.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::counting::Counting;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Back-rank layout from column 0 to column 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement and en passant state.
///
/// A `Board` is a plain value: copying it copies every piece, so simulating
/// a move on a copy never touches the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells indexed by `[row][column]`.
    squares: [[Option<Piece>; 8]; 8],
    /// Square each player's pawn skipped on its latest double step, indexed by [`Color::index()`].
    pawn_skips: [Option<Position>; Color::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
            pawn_skips: [None; Color::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (column, kind) in (0i8..).zip(BACK_RANK) {
                board[Position::new(color.back_rank(), column)] = Some(Piece::new(kind, color));
                board[Position::new(color.pawn_rank(), column)] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Return `true` if no piece stands on `pos`.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self[pos].is_none()
    }

    /// Return the piece on `pos`, or `None` off the board.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if pos.is_inside() {
            self[pos]
        } else {
            None
        }
    }

    /// Place `piece` on `pos`, replacing whatever stood there.
    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        self[pos] = piece;
    }

    /// Remove and return the piece on `pos`.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self[pos].take()
    }

    /// Return the square `color`'s pawn skipped on the previous ply, if any.
    #[inline]
    pub fn pawn_skip(&self, color: Color) -> Option<Position> {
        self.pawn_skips[color.index()]
    }

    /// Set or clear the square `color`'s pawn skipped.
    #[inline]
    pub fn set_pawn_skip(&mut self, color: Color, pos: Option<Position>) {
        self.pawn_skips[color.index()] = pos;
    }

    /// Forget both players' skipped squares. Every move does this before it
    /// executes, so a skip square lives for exactly one ply.
    #[inline]
    pub(crate) fn clear_pawn_skips(&mut self) {
        self.pawn_skips = [None; Color::COUNT];
    }

    /// Iterate over occupied squares in board-scan order.
    pub fn piece_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| !self.is_empty(pos))
    }

    /// Iterate over squares occupied by `color`'s pieces.
    pub fn piece_positions_for(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        self.piece_positions()
            .filter(move |&pos| self[pos].is_some_and(|piece| piece.color() == color))
    }

    /// Iterate over `(square, piece)` pairs in board-scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self[pos].map(|piece| (pos, piece)))
    }

    /// Return the first square (in scan order) holding `color`'s `kind`.
    pub fn find_piece(&self, color: Color, kind: PieceKind) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is(color, kind))
            .map(|(pos, _)| pos)
    }

    /// Return the square of `color`'s king, if it has one.
    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.find_piece(color, PieceKind::King)
    }

    /// Tally the pieces currently on the board.
    pub fn count_pieces(&self) -> Counting {
        let mut counting = Counting::new();
        for (_, piece) in self.pieces() {
            counting.increment(piece.color(), piece.kind());
        }
        counting
    }

    /// Return `true` if neither side can possibly deliver checkmate.
    ///
    /// Recognized: K v K, K+B v K, K+N v K, and K+B v K+B with both bishops
    /// on same-colored squares.
    pub fn insufficient_material(&self) -> bool {
        let counting = self.count_pieces();
        is_king_v_king(&counting)
            || is_king_v_king_minor(&counting)
            || self.is_king_bishop_v_king_bishop(&counting)
    }

    fn is_king_bishop_v_king_bishop(&self, counting: &Counting) -> bool {
        if counting.total() != 4
            || counting.white(PieceKind::Bishop) != 1
            || counting.black(PieceKind::Bishop) != 1
        {
            return false;
        }

        match (
            self.find_piece(Color::White, PieceKind::Bishop),
            self.find_piece(Color::Black, PieceKind::Bishop),
        ) {
            (Some(white), Some(black)) => white.square_color() == black.square_color(),
            _ => false,
        }
    }

    /// Return `true` if `color` still may castle toward `side`: the king and
    /// that rook stand on their home squares and neither has moved.
    pub fn castle_right(&self, color: Color, side: CastleSide) -> bool {
        let king = self[CastleSide::king_home(color)];
        let rook = self[side.rook_home(color)];
        match (king, rook) {
            (Some(king), Some(rook)) => {
                king.is(color, PieceKind::King)
                    && rook.is(color, PieceKind::Rook)
                    && !king.has_moved()
                    && !rook.has_moved()
            }
            _ => false,
        }
    }

    #[inline]
    pub fn castle_right_kingside(&self, color: Color) -> bool {
        self.castle_right(color, CastleSide::KingSide)
    }

    #[inline]
    pub fn castle_right_queenside(&self, color: Color) -> bool {
        self.castle_right(color, CastleSide::QueenSide)
    }

    /// Summarize all four castling rights.
    pub fn castle_rights(&self) -> CastleRights {
        let mut rights = CastleRights::NONE;
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if self.castle_right(color, side) {
                    rights = rights | CastleRights::single(color, side);
                }
            }
        }
        rights
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.count_pieces().count(color, PieceKind::King);
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        for (position, piece) in self.pieces() {
            let row = position.row();
            if piece.kind() == PieceKind::Pawn && (row == 0 || row == 7) {
                return Err(BoardError::PawnOnBackRank { position });
            }
        }

        for color in Color::ALL {
            if let Some(position) = self.pawn_skip(color)
                && !self.is_valid_pawn_skip(color, position)
            {
                return Err(BoardError::InvalidPawnSkip { color, position });
            }
        }

        Ok(())
    }

    /// A skip square sits empty on the rank `color`'s pawns pass over when
    /// double-stepping, with the pawn that made the step just beyond it.
    fn is_valid_pawn_skip(&self, color: Color, skip: Position) -> bool {
        let forward = color.forward();
        skip.is_inside()
            && skip.row() == color.pawn_rank() + forward.row_delta
            && self.is_empty(skip)
            && self[skip + forward].is_some_and(|piece| piece.is(color, PieceKind::Pawn))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Index<Position> for Board {
    type Output = Option<Piece>;

    /// Panics if `pos` is off the board.
    #[inline]
    fn index(&self, pos: Position) -> &Option<Piece> {
        &self.squares[pos.row() as usize][pos.column() as usize]
    }
}

impl IndexMut<Position> for Board {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        &mut self.squares[pos.row() as usize][pos.column() as usize]
    }
}

fn is_king_v_king(counting: &Counting) -> bool {
    counting.total() == 2
}

fn is_king_v_king_minor(counting: &Counting) -> bool {
    counting.total() == 3
        && PieceKind::ALL
            .into_iter()
            .filter(|kind| kind.is_minor())
            .any(|minor| counting.white(minor) == 1 || counting.black(minor) == 1)
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"")?;
        for row in 0i8..8 {
            if row > 0 {
                write!(f, "/")?;
            }
            for column in 0i8..8 {
                match self[Position::new(row, column)] {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        write!(f, "\")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0i8..8 {
            write!(f, "{}  ", 8 - row)?;
            for column in 0i8..8 {
                let c = board[Position::new(row, column)].map_or('.', |piece| piece.symbol());
                if column < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn pos(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    fn kings(white: &str, black: &str) -> Board {
        let mut board = Board::empty();
        board[pos(white)] = Some(Piece::new(PieceKind::King, Color::White));
        board[pos(black)] = Some(Piece::new(PieceKind::King, Color::Black));
        board
    }

    #[test]
    fn piece_at_off_board() {
        let mut board = kings("e1", "e8");
        assert!(board.piece_at(pos("e1")).unwrap().is(Color::White, PieceKind::King));
        assert_eq!(board.piece_at(Position::new(-1, 4)), None);
        assert_eq!(board.piece_at(Position::new(3, 8)), None);

        board.set_piece(pos("d4"), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(board.piece_at(pos("d4")).is_some());
        board.set_piece(pos("d4"), None);
        assert!(board.is_empty(pos("d4")));
    }

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board[pos("e1")], Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board[pos("d8")], Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(board[pos("b1")], Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(board[pos("c8")], Some(Piece::new(PieceKind::Bishop, Color::Black)));
        assert_eq!(board[pos("h2")], Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(board.is_empty(pos("e4")));
        assert_eq!(board.piece_positions().count(), 32);
        assert_eq!(board.piece_positions_for(Color::White).count(), 16);
        assert_eq!(board.piece_positions_for(Color::Black).count(), 16);
        assert_eq!(board.pawn_skip(Color::White), None);
    }

    #[test]
    fn piece_positions_scan_order() {
        let board = Board::starting_position();
        let first: Vec<_> = board.piece_positions().take(2).collect();
        assert_eq!(first, vec![pos("a8"), pos("b8")]);
        assert_eq!(board.piece_positions().last(), Some(pos("h1")));
        // Restartable: a second scan yields the same sequence.
        assert!(board.piece_positions().eq(board.piece_positions()));
    }

    #[test]
    fn king_position() {
        let board = Board::starting_position();
        assert_eq!(board.king_position(Color::White), Some(pos("e1")));
        assert_eq!(board.king_position(Color::Black), Some(pos("e8")));
        assert_eq!(Board::empty().king_position(Color::White), None);
    }

    #[test]
    fn copy_is_independent() {
        let original = Board::starting_position();
        let mut copy = original;
        copy.take(pos("e2"));
        copy[pos("e4")] = Some(Piece::new(PieceKind::Pawn, Color::White).moved());
        copy.set_pawn_skip(Color::White, Some(pos("e3")));

        assert!(original.is_empty(pos("e4")));
        assert!(!original.is_empty(pos("e2")));
        assert_eq!(original.pawn_skip(Color::White), None);
        assert_ne!(original, copy);
        assert_eq!(original, Board::starting_position());
    }

    #[test]
    fn count_pieces_starting() {
        let counting = Board::starting_position().count_pieces();
        assert_eq!(counting.total(), 32);
        assert_eq!(counting.white(PieceKind::Pawn), 8);
        assert_eq!(counting.black(PieceKind::Knight), 2);
        assert_eq!(counting.white(PieceKind::King), 1);
    }

    #[test]
    fn insufficient_king_v_king() {
        assert!(kings("e1", "e8").insufficient_material());
    }

    #[test]
    fn insufficient_single_minor() {
        for color in Color::ALL {
            for kind in [PieceKind::Bishop, PieceKind::Knight] {
                let mut board = kings("e1", "e8");
                board[pos("c4")] = Some(Piece::new(kind, color));
                assert!(board.insufficient_material(), "{color} {kind:?} should be insufficient");
            }
        }
    }

    #[test]
    fn insufficient_same_colored_bishops() {
        let mut board = kings("e1", "e8");
        // c4 and f7 are both light squares.
        board[pos("c4")] = Some(Piece::new(PieceKind::Bishop, Color::White));
        board[pos("f7")] = Some(Piece::new(PieceKind::Bishop, Color::Black));
        assert_eq!(pos("c4").square_color(), pos("f7").square_color());
        assert!(board.insufficient_material());
    }

    #[test]
    fn sufficient_opposite_colored_bishops() {
        let mut board = kings("e1", "e8");
        board[pos("c4")] = Some(Piece::new(PieceKind::Bishop, Color::White));
        board[pos("f8")] = Some(Piece::new(PieceKind::Bishop, Color::Black));
        assert_ne!(pos("c4").square_color(), pos("f8").square_color());
        assert!(!board.insufficient_material());
    }

    #[test]
    fn sufficient_with_rook_pawn_or_queen() {
        for kind in [PieceKind::Rook, PieceKind::Pawn, PieceKind::Queen] {
            let mut board = kings("e1", "e8");
            board[pos("c4")] = Some(Piece::new(kind, Color::White));
            assert!(!board.insufficient_material(), "{kind:?} should be sufficient");
        }
        assert!(!Board::starting_position().insufficient_material());
    }

    #[test]
    fn sufficient_with_two_minors_on_one_side() {
        let mut board = kings("e1", "e8");
        board[pos("c4")] = Some(Piece::new(PieceKind::Bishop, Color::White));
        board[pos("c3")] = Some(Piece::new(PieceKind::Knight, Color::White));
        assert!(!board.insufficient_material());
    }

    #[test]
    fn castle_rights_starting() {
        let board = Board::starting_position();
        for color in Color::ALL {
            assert!(board.castle_right_kingside(color));
            assert!(board.castle_right_queenside(color));
        }
        assert_eq!(board.castle_rights(), CastleRights::ALL);
    }

    #[test]
    fn castle_rights_follow_has_moved() {
        let mut board = Board::starting_position();
        board[pos("h1")] = board[pos("h1")].map(Piece::moved);
        assert!(!board.castle_right_kingside(Color::White));
        assert!(board.castle_right_queenside(Color::White));

        board[pos("e8")] = board[pos("e8")].map(Piece::moved);
        assert!(!board.castle_right_kingside(Color::Black));
        assert!(!board.castle_right_queenside(Color::Black));
        assert_eq!(board.castle_rights(), CastleRights::WHITE_QUEEN);
    }

    #[test]
    fn castle_rights_need_pieces_at_home() {
        let mut board = Board::starting_position();
        board.take(pos("a8"));
        assert!(!board.castle_right_queenside(Color::Black));
        assert!(board.castle_right_kingside(Color::Black));
    }

    #[test]
    fn validate_king_count() {
        let mut board = kings("e1", "e8");
        board.take(pos("e8"));
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount {
                color: Color::Black,
                count: 0
            })
        );

        board[pos("a8")] = Some(Piece::new(PieceKind::King, Color::Black));
        board[pos("h8")] = Some(Piece::new(PieceKind::King, Color::Black));
        assert!(matches!(
            board.validate(),
            Err(BoardError::InvalidKingCount { count: 2, .. })
        ));
    }

    #[test]
    fn validate_pawns_on_back_rank() {
        let mut board = kings("e1", "e8");
        board[pos("a1")] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        assert_eq!(
            board.validate(),
            Err(BoardError::PawnOnBackRank { position: pos("a1") })
        );
    }

    #[test]
    fn validate_pawn_skips() {
        let mut board = kings("e1", "e8");
        board[pos("e4")] = Some(Piece::new(PieceKind::Pawn, Color::White).moved());
        board[pos("d5")] = Some(Piece::new(PieceKind::Pawn, Color::Black).moved());
        board.set_pawn_skip(Color::White, Some(pos("e3")));
        assert_eq!(board.validate(), Ok(()));

        let mut wrong_rank = board;
        wrong_rank.set_pawn_skip(Color::White, Some(pos("e5")));
        assert_eq!(
            wrong_rank.validate(),
            Err(BoardError::InvalidPawnSkip {
                color: Color::White,
                position: pos("e5")
            })
        );

        let mut no_pawn = board;
        no_pawn.set_pawn_skip(Color::White, Some(pos("d3")));
        assert!(matches!(no_pawn.validate(), Err(BoardError::InvalidPawnSkip { .. })));

        let mut occupied = board;
        occupied.set_pawn_skip(Color::White, None);
        occupied[pos("d6")] = Some(Piece::new(PieceKind::Knight, Color::Black));
        occupied.set_pawn_skip(Color::Black, Some(pos("d6")));
        assert_eq!(
            occupied.validate(),
            Err(BoardError::InvalidPawnSkip {
                color: Color::Black,
                position: pos("d6")
            })
        );

        occupied[pos("d6")] = None;
        assert_eq!(occupied.validate(), Ok(()));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
    }

    #[test]
    fn debug_format() {
        let board = Board::starting_position();
        let debug = format!("{board:?}");
        assert!(debug.starts_with("Board(\"rnbqkbnr/pppppppp/"));
    }
}
