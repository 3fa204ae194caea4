//! Zobrist keys identifying positions for repetition detection.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Zobrist key for each (piece, square) pair. Indexed by
/// `[color * 6 + kind][Position::index()]`.
static PIECE_SQUARE: [[u64; 64]; 12] = {
    let mut table = [[0u64; 64]; 12];
    let mut state = SEED;
    let mut piece = 0;
    while piece < 12 {
        let mut sq = 0;
        while sq < 64 {
            let (val, next) = xorshift64(state);
            table[piece][sq] = val;
            state = next;
            sq += 1;
        }
        piece += 1;
    }
    table
};

/// Zobrist key XORed when Black is the side to move.
static SIDE_TO_MOVE: u64 = {
    let mut state = SEED;
    // Advance past all 12*64 = 768 piece-square keys
    let mut i = 0;
    while i < 768 {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let (val, _) = xorshift64(state);
    val
};

/// Zobrist keys for castling configurations. Indexed by `CastleRights::bits() as usize` (0..16).
static CASTLING: [u64; 16] = {
    let mut table = [0u64; 16];
    let mut state = SEED;
    // Advance past 768 + 1 = 769 previous keys
    let mut i = 0;
    while i < 769 {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let mut idx = 0;
    while idx < 16 {
        let (val, next) = xorshift64(state);
        table[idx] = val;
        state = next;
        idx += 1;
    }
    table
};

/// Zobrist keys for the en passant column. Indexed by column (0..8).
static EN_PASSANT_COLUMN: [u64; 8] = {
    let mut table = [0u64; 8];
    let mut state = SEED;
    // Advance past 769 + 16 = 785 previous keys
    let mut i = 0;
    while i < 785 {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let mut idx = 0;
    while idx < 8 {
        let (val, next) = xorshift64(state);
        table[idx] = val;
        state = next;
        idx += 1;
    }
    table
};

const SEED: u64 = 0x5a4f_4252_4953_5421; // "ZOBRIST!"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

#[inline]
fn piece_index(color: Color, kind: PieceKind) -> usize {
    color.index() * PieceKind::COUNT + kind.index()
}

/// Key of the position on `board` with `side_to_move` to play.
///
/// Two positions share a key when they have the same placement, side to
/// move, castling rights, and en passant possibility. `has_moved` flags only
/// matter through the castling rights they imply, and a skipped square only
/// counts when `side_to_move` can actually capture en passant.
pub fn position_key(board: &Board, side_to_move: Color) -> u64 {
    let mut hash = 0u64;

    for (pos, piece) in board.pieces() {
        hash ^= PIECE_SQUARE[piece_index(piece.color(), piece.kind())][pos.index()];
    }

    if side_to_move == Color::Black {
        hash ^= SIDE_TO_MOVE;
    }

    hash ^= CASTLING[board.castle_rights().bits() as usize];

    if board.can_capture_en_passant(side_to_move)
        && let Some(skip) = board.pawn_skip(side_to_move.opponent())
    {
        hash ^= EN_PASSANT_COLUMN[skip.column() as usize];
    }

    hash
}
