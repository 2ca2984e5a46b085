//! Exhaustive legal-move enumeration.
//!
//! Every origin holding a piece of the side to move is paired with every
//! destination and run through the full legality check. Origins are limited
//! to the mover's own pieces, which skips pairs the check would reject on
//! its first test anyway.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validation::{check_move, ValidatedMove};

/// All legal moves for the side to move, in board order.
pub fn legal_moves(game_state: &GameState) -> Vec<ValidatedMove> {
    game_state
        .board
        .pieces_of(game_state.side_to_move)
        .flat_map(|(from, _)| {
            Square::all().filter_map(move |to| check_move(game_state, from, to).ok())
        })
        .collect()
}

/// Legal destinations for the piece on `from`; empty if it cannot move.
pub fn legal_destinations(game_state: &GameState, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|to| check_move(game_state, from, *to).is_ok())
        .collect()
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    game_state
        .board
        .pieces_of(game_state.side_to_move)
        .any(|(from, _)| Square::all().any(|to| check_move(game_state, from, to).is_ok()))
}
