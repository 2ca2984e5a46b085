//! The central game snapshot.
//!
//! `GameState` holds the live position plus the append-only move log and
//! fingerprint history. Transitions never edit a state in place; they build
//! the next one (see `move_generation::legal_move_apply`). The only field a
//! caller may move on an existing snapshot is `cursor`, which selects the
//! position shown in review mode and never truncates the log.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_validation::is_legal_move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- History ---
    /// Board before the first logged move; anchors review at cursor 0.
    pub initial_board: Board,
    /// Fullmove number before the first logged move.
    pub initial_fullmove_number: u16,
    /// One fingerprint per logged move, taken after that move.
    pub position_history: Vec<Fingerprint>,
    pub move_log: Vec<MoveRecord>,
    pub cursor: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Empty board, White to move. Used as the base for FEN setup.
    pub fn new_empty() -> Self {
        Self::from_board(Board::empty(), Side::White)
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Side::White)
    }

    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            en_passant_target: None,
            castling_rights: CastlingRights::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
            initial_board: board,
            initial_fullmove_number: 1,
            position_history: Vec::new(),
            move_log: Vec::new(),
            cursor: 0,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn is_in_check(&self, side: Side) -> bool {
        is_king_in_check(&self.board, side)
    }

    #[inline]
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        is_legal_move(self, from, to)
    }

    /// Next snapshot after a legal move; `self` is left untouched.
    #[inline]
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<GameState> {
        apply_move(self, from, to, promotion)
    }

    /// Index of the live position; `cursor` equals this unless reviewing.
    #[inline]
    pub fn live_index(&self) -> usize {
        self.move_log.len()
    }

    #[inline]
    pub fn is_reviewing(&self) -> bool {
        self.cursor != self.live_index()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_log.last()
    }

    /// Moves the review cursor, clamping it to `0..=move_log.len()`.
    pub fn set_cursor(&mut self, index: usize) -> usize {
        self.cursor = index.min(self.live_index());
        self.cursor
    }

    pub fn step_back(&mut self) -> usize {
        self.set_cursor(self.cursor.saturating_sub(1))
    }

    pub fn step_forward(&mut self) -> usize {
        self.set_cursor(self.cursor.saturating_add(1))
    }

    /// Board as it stood after `index` logged moves (clamped).
    pub fn board_at(&self, index: usize) -> Board {
        match index.min(self.live_index()) {
            0 => self.initial_board,
            n => self.position_history[n - 1].to_board(),
        }
    }

    /// Board selected by the review cursor.
    #[inline]
    pub fn displayed_board(&self) -> Board {
        self.board_at(self.cursor)
    }

    /// Side that was to move before the first logged move.
    pub fn side_to_move_at_start(&self) -> Side {
        if self.move_log.len() % 2 == 0 {
            self.side_to_move
        } else {
            self.side_to_move.opposite()
        }
    }

    /// Times the current occupancy appears in the position history.
    pub fn repetition_count(&self) -> usize {
        let current = self.board.fingerprint();
        self.position_history
            .iter()
            .filter(|fingerprint| **fingerprint == current)
            .count()
    }
}
