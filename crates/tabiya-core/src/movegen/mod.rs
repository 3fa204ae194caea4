//! Pseudo-legal move generation and legality filtering.

pub(crate) mod attacks;
pub(crate) mod king;
pub(crate) mod knights;
pub(crate) mod pawns;
pub(crate) mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Iterate over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Return `true` if `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for mv in iter {
            self.push(mv);
        }
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        list.extend(iter);
        list
    }
}

/// Pseudo-legal moves of the piece on `from`, castling candidates included.
///
/// Returns an empty list for an empty square.
pub fn candidate_moves(board: &Board, from: Position) -> MoveList {
    let Some(piece) = board[from] else {
        return MoveList::new();
    };

    let mut list = piece.moves(from, board);
    if piece.kind() == PieceKind::King {
        king::gen_castles(board, from, piece.color(), &mut list);
    }
    list
}

/// Legal moves of the piece on `from`.
pub fn legal_moves(board: &Board, from: Position) -> MoveList {
    candidate_moves(board, from)
        .iter()
        .copied()
        .filter(|mv| mv.is_legal(board))
        .collect()
}

/// Legal moves of every piece `color` owns, in board-scan order.
pub fn legal_moves_for(board: &Board, color: Color) -> MoveList {
    let mut list = MoveList::new();
    for from in board.piece_positions_for(color) {
        list.extend(legal_moves(board, from).iter().copied());
    }
    list
}

/// Return `true` if `color` has at least one legal move. Stops at the first one found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .piece_positions_for(color)
        .any(|from| candidate_moves(board, from).iter().any(|mv| mv.is_legal(board)))
}
