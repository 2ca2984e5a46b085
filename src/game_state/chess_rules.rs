//! Canonical chess-rule constants.
//!
//! Static literals used to set up a new game and to parameterise the draw
//! detectors when no explicit configuration is supplied.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Occurrences of one board occupancy that end the game in a draw.
pub const REPETITION_THRESHOLD: usize = 3;

/// Half-moves without a pawn move or capture that end the game in a draw.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Back-rank layout shared by both sides, a-file first.
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
