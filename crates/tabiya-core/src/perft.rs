//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::legal_moves_for;

/// Count the leaf nodes `depth` plies below `board` with `side` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves_for(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let mut child = *board;
        mv.execute(&mut child);
        nodes += perft(&child, side.opponent(), depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = legal_moves_for(board, side);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            let mut child = *board;
            mv.execute(&mut child);
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.opponent(), depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
