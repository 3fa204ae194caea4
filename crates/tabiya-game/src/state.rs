//! The turn state machine driving one game.

use tabiya_core::movegen;
use tabiya_core::{Board, Color, Move, MoveList, Position};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::history::DrawTracker;
use crate::result::{EndReason, GameResult};

/// One game: the live board, the side to move, and the result once the game
/// has finished. A finished game never resumes.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Color,
    result: Option<GameResult>,
    config: GameConfig,
    draws: DrawTracker,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// A new game from the starting position with custom draw settings.
    pub fn with_config(config: GameConfig) -> Self {
        let board = Board::starting_position();
        Self {
            draws: DrawTracker::new(&board, Color::White),
            board,
            active: Color::White,
            result: None,
            config,
        }
    }

    /// A game continuing from `board` with `active` to move.
    ///
    /// The board must pass [`Board::validate`] and must not leave the side
    /// not on move in check. If `active` has no legal move the game is
    /// finished immediately.
    pub fn from_board(active: Color, board: Board) -> Result<Self, GameError> {
        Self::from_board_with_config(active, board, GameConfig::default())
    }

    /// Like [`from_board`](Self::from_board) with custom draw settings.
    pub fn from_board_with_config(
        active: Color,
        board: Board,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        board.validate()?;
        let waiting = !active;
        if board.is_in_check(waiting) {
            warn!(color = %waiting, "board rejected, side not on move is in check");
            return Err(GameError::OpponentInCheck { color: waiting });
        }

        let mut state = Self {
            draws: DrawTracker::new(&board, active),
            board,
            active,
            result: None,
            config,
        };
        state.evaluate_termination();
        Ok(state)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.active
    }

    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Plies played since the last capture or pawn move.
    #[inline]
    pub fn no_progress_plies(&self) -> u16 {
        self.draws.no_progress_plies()
    }

    /// How many times the current position has occurred.
    #[inline]
    pub fn repetition_count(&self) -> u8 {
        self.draws.repetitions()
    }

    /// Legal moves for the piece on `pos`.
    ///
    /// Empty when `pos` is off the board, empty, or holds a piece of the
    /// player not on move.
    pub fn legal_moves_for_piece(&self, pos: Position) -> MoveList {
        if !pos.is_inside() {
            return MoveList::new();
        }
        match self.board[pos] {
            Some(piece) if piece.color() == self.active => movegen::legal_moves(&self.board, pos),
            _ => MoveList::new(),
        }
    }

    /// Every legal move `player` could make on the current board.
    pub fn all_legal_moves(&self, player: Color) -> MoveList {
        movegen::legal_moves_for(&self.board, player)
    }

    /// Play `mv` for the side to move, then check whether the game is over.
    ///
    /// `mv` must be one of the moves returned by
    /// [`legal_moves_for_piece`](Self::legal_moves_for_piece). A rejected move
    /// leaves the game unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), GameError> {
        if let Some(result) = self.result {
            warn!(%mv, %result, "move rejected, game is over");
            return Err(GameError::GameOver { result });
        }
        if !self.legal_moves_for_piece(mv.from()).contains(&mv) {
            warn!(%mv, player = %self.active, "illegal move rejected");
            return Err(GameError::IllegalMove { mv });
        }

        let progress = mv.execute(&mut self.board);
        debug!(%mv, player = %self.active, progress, "move played");

        self.active = !self.active;
        self.draws.record(&self.board, self.active, progress);
        debug!(
            no_progress_plies = self.draws.no_progress_plies(),
            repetitions = self.draws.repetitions(),
            "draw counters updated"
        );

        self.evaluate_termination();
        if self.config.automatic_draws {
            self.check_draw_conditions();
        }
        Ok(())
    }

    /// `player` resigns; the opponent wins.
    pub fn resign(&mut self, player: Color) -> Result<(), GameError> {
        if let Some(result) = self.result {
            warn!(%player, %result, "resignation rejected, game is over");
            return Err(GameError::GameOver { result });
        }
        self.finish(GameResult::win(!player, EndReason::Resignation));
        Ok(())
    }

    /// Finish the game if a draw condition holds: insufficient material, the
    /// fifty-move rule, or repetition. Returns the result, if any.
    ///
    /// Runs after every move when [`GameConfig::automatic_draws`] is set.
    pub fn check_draw_conditions(&mut self) -> Option<GameResult> {
        if self.result.is_some() {
            return self.result;
        }

        let reason = if self.board.insufficient_material() {
            Some(EndReason::InsufficientMaterial)
        } else if self.draws.no_progress_plies() >= self.config.fifty_move_plies {
            Some(EndReason::FiftyMoveRule)
        } else if self.draws.repetitions() >= self.config.repetition_count {
            Some(EndReason::ThreefoldRepetition)
        } else {
            None
        };

        if let Some(reason) = reason {
            self.finish(GameResult::draw(reason));
        }
        self.result
    }

    /// Checkmate or stalemate when the side to move has no legal move.
    fn evaluate_termination(&mut self) {
        if movegen::has_legal_move(&self.board, self.active) {
            return;
        }
        let result = if self.board.is_in_check(self.active) {
            GameResult::win(!self.active, EndReason::Checkmate)
        } else {
            GameResult::draw(EndReason::Stalemate)
        };
        self.finish(result);
    }

    fn finish(&mut self, result: GameResult) {
        info!(%result, "game over");
        self.result = Some(result);
    }
}
