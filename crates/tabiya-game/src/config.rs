//! Game configuration knobs.

/// Draw-adjudication settings for a [`GameState`](crate::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Check insufficient material, the fifty-move rule, and repetition after
    /// every move. When off, only checkmate and stalemate end a game on their
    /// own and hosts call
    /// [`check_draw_conditions`](crate::GameState::check_draw_conditions).
    pub automatic_draws: bool,
    /// Plies without a capture or pawn move that draw the game.
    pub fifty_move_plies: u16,
    /// Occurrences of one position that draw the game.
    pub repetition_count: u8,
}

impl GameConfig {
    /// Standard thresholds with automatic draw adjudication turned on.
    pub fn automatic() -> Self {
        Self {
            automatic_draws: true,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            automatic_draws: false,
            fifty_move_plies: 100,
            repetition_count: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert!(!config.automatic_draws);
        assert_eq!(config.fifty_move_plies, 100);
        assert_eq!(config.repetition_count, 3);
    }

    #[test]
    fn automatic_keeps_thresholds() {
        let config = GameConfig::automatic();
        assert!(config.automatic_draws);
        assert_eq!(config.fifty_move_plies, 100);
        assert_eq!(config.repetition_count, 3);
    }
}
