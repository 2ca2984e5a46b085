//! Rule parameters for a game session.

use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    /// Occurrences of one board occupancy that draw the game.
    pub repetition_threshold: usize,

    /// Half-moves without pawn move or capture that draw the game.
    pub fifty_move_halfmoves: u16,

    /// Starting position; `None` is the standard initial position.
    pub start_fen: Option<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            repetition_threshold: REPETITION_THRESHOLD,
            fifty_move_halfmoves: FIFTY_MOVE_HALFMOVES,
            start_fen: None,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_repetition_threshold(mut self, threshold: usize) -> Self {
        self.repetition_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_fifty_move_halfmoves(mut self, halfmoves: u16) -> Self {
        self.fifty_move_halfmoves = halfmoves;
        self
    }

    #[must_use]
    pub fn with_start_fen(mut self, fen: impl Into<String>) -> Self {
        self.start_fen = Some(fen.into());
        self
    }
}
