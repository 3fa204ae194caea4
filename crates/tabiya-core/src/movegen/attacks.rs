//! Square-attack queries used for check detection.
//!
//! These answer "does the piece on `from` reach `target`" without building a
//! move list, stopping at the first hit.

use crate::board::Board;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::knights::KNIGHT_JUMPS;

/// Return `true` if `piece`, standing on `from`, could capture on `target`.
///
/// Only the capture pattern counts: pawn pushes and castling never attack.
pub(crate) fn attacks(piece: Piece, from: Position, target: Position, board: &Board) -> bool {
    match piece.kind() {
        PieceKind::Pawn => {
            let forward = piece.color().forward();
            [Direction::WEST, Direction::EAST]
                .into_iter()
                .any(|side| from + (forward + side) == target)
        }
        PieceKind::Knight => steps_reach(from, target, &KNIGHT_JUMPS),
        PieceKind::King => steps_reach(from, target, &Direction::ALL),
        PieceKind::Bishop => ray_reaches(from, target, &Direction::DIAGONAL, board),
        PieceKind::Rook => ray_reaches(from, target, &Direction::ORTHOGONAL, board),
        PieceKind::Queen => ray_reaches(from, target, &Direction::ALL, board),
    }
}

fn steps_reach(from: Position, target: Position, dirs: &[Direction]) -> bool {
    dirs.iter().any(|&dir| from + dir == target)
}

fn ray_reaches(from: Position, target: Position, dirs: &[Direction], board: &Board) -> bool {
    for &dir in dirs {
        let mut to = from + dir;
        while to.is_inside() {
            if to == target {
                return true;
            }
            if !board.is_empty(to) {
                break;
            }
            to = to + dir;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::attacks;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn pos(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    #[test]
    fn pawn_attacks_diagonally_only() {
        let board = Board::empty();
        let white = Piece::new(PieceKind::Pawn, Color::White);
        assert!(attacks(white, pos("e4"), pos("d5"), &board));
        assert!(attacks(white, pos("e4"), pos("f5"), &board));
        assert!(!attacks(white, pos("e4"), pos("e5"), &board));
        assert!(!attacks(white, pos("e4"), pos("d3"), &board));

        let black = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(attacks(black, pos("e5"), pos("d4"), &board));
        assert!(!attacks(black, pos("e5"), pos("d6"), &board));
    }

    #[test]
    fn slider_stops_at_blocker() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert!(attacks(rook, pos("a1"), pos("a8"), &board));
        assert!(!attacks(rook, pos("a1"), pos("b2"), &board));

        board[pos("a4")] = Some(Piece::new(PieceKind::Knight, Color::Black));
        assert!(attacks(rook, pos("a1"), pos("a4"), &board));
        assert!(!attacks(rook, pos("a1"), pos("a8"), &board));
    }

    #[test]
    fn knight_and_king_steps() {
        let board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        assert!(attacks(knight, pos("g8"), pos("f6"), &board));
        assert!(!attacks(knight, pos("g8"), pos("g6"), &board));

        let king = Piece::new(PieceKind::King, Color::White);
        assert!(attacks(king, pos("e1"), pos("d2"), &board));
        assert!(!attacks(king, pos("e1"), pos("e3"), &board));
    }

    #[test]
    fn agrees_with_generated_captures() {
        let board = Board::starting_position();
        let queen = Piece::new(PieceKind::Queen, Color::White);
        let mut with_queen = board;
        with_queen[pos("d4")] = Some(queen);
        for target in Position::all() {
            let generated = queen
                .moves(pos("d4"), &with_queen)
                .iter()
                .any(|mv| mv.to() == target && with_queen[target].is_some());
            let occupied_by_enemy = with_queen[target].is_some_and(|p| p.color() == Color::Black);
            assert_eq!(
                attacks(queen, pos("d4"), target, &with_queen) && occupied_by_enemy,
                generated,
                "mismatch on {target}"
            );
        }
    }
}
