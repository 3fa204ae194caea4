//! Terminal outcome of a game.

use std::fmt;

use tabiya_core::Color;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    Resignation,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EndReason::Checkmate => "checkmate",
            EndReason::Stalemate => "stalemate",
            EndReason::Resignation => "resignation",
            EndReason::InsufficientMaterial => "insufficient material",
            EndReason::FiftyMoveRule => "fifty-move rule",
            EndReason::ThreefoldRepetition => "threefold repetition",
        };
        f.write_str(text)
    }
}

/// The winner (`None` for a draw) and the reason the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    winner: Option<Color>,
    reason: EndReason,
}

impl GameResult {
    /// A decisive result in favour of `winner`.
    pub const fn win(winner: Color, reason: EndReason) -> GameResult {
        GameResult {
            winner: Some(winner),
            reason,
        }
    }

    /// A drawn result.
    pub const fn draw(reason: EndReason) -> GameResult {
        GameResult {
            winner: None,
            reason,
        }
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub const fn reason(self) -> EndReason {
        self.reason
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        self.winner.is_none()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(winner) => write!(f, "{winner} wins by {}", self.reason),
            None => write!(f, "draw by {}", self.reason),
        }
    }
}
