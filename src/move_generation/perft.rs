//! Perft: leaf-node counts used to validate the rules against published
//! reference numbers.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_validated_move;
use crate::move_generation::legal_move_generator::legal_moves;

/// Number of leaf positions `depth` plies below `game_state`.
///
/// Each promotion counts once per promotion piece.
pub fn perft(game_state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in legal_moves(game_state) {
        let choices: &[Option<PieceKind>] = if mv.requires_promotion() {
            &[
                Some(PieceKind::Queen),
                Some(PieceKind::Rook),
                Some(PieceKind::Bishop),
                Some(PieceKind::Knight),
            ]
        } else {
            &[None]
        };

        for promotion in choices {
            if depth == 1 {
                nodes += 1;
                continue;
            }
            if let Ok(next) = apply_validated_move(game_state, &mv, *promotion) {
                nodes += perft(&next, depth - 1);
            }
        }
    }

    nodes
}
