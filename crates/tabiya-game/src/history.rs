//! Bookkeeping for the fifty-move rule and repetition draws.

use std::collections::HashMap;

use tabiya_core::{Board, Color, position_key};

/// Plies since the last capture or pawn move, and how often each position
/// has occurred since then.
#[derive(Debug, Clone, Default)]
pub(crate) struct DrawTracker {
    no_progress_plies: u16,
    seen: HashMap<u64, u8>,
    last_count: u8,
}

impl DrawTracker {
    /// Start tracking from `board` with `side` to move.
    pub(crate) fn new(board: &Board, side: Color) -> DrawTracker {
        let mut tracker = DrawTracker::default();
        tracker.count_position(board, side);
        tracker
    }

    /// Record the position reached after a move. `progress` is the flag
    /// returned by [`Move::execute`](tabiya_core::Move::execute).
    pub(crate) fn record(&mut self, board: &Board, side: Color, progress: bool) {
        if progress {
            // Earlier positions can never recur after a capture or pawn move.
            self.no_progress_plies = 0;
            self.seen.clear();
        } else {
            self.no_progress_plies = self.no_progress_plies.saturating_add(1);
        }
        self.count_position(board, side);
    }

    fn count_position(&mut self, board: &Board, side: Color) {
        let count = self.seen.entry(position_key(board, side)).or_insert(0);
        *count = count.saturating_add(1);
        self.last_count = *count;
    }

    #[inline]
    pub(crate) fn no_progress_plies(&self) -> u16 {
        self.no_progress_plies
    }

    /// Occurrences of the current position, itself included.
    #[inline]
    pub(crate) fn repetitions(&self) -> u8 {
        self.last_count
    }
}
