//! Draw classifiers that need no move search.

use crate::game_state::chess_types::*;

/// Material from which no mate can be forced.
///
/// Bare kings; a king with one minor piece against a king; or one bishop
/// each when both bishops stand on squares of the same colour.
pub fn is_insufficient_material(board: &Board) -> bool {
    let others: Vec<(Square, Piece)> = board
        .pieces()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .collect();
    let total = board.piece_count();

    match (total, others.as_slice()) {
        (0..=2, _) => true,
        (3, [(_, minor)]) => matches!(minor.kind, PieceKind::Bishop | PieceKind::Knight),
        (4, [(first_sq, first), (second_sq, second)]) => {
            first.kind == PieceKind::Bishop
                && second.kind == PieceKind::Bishop
                && first.side != second.side
                && first_sq.colour_parity() == second_sq.colour_parity()
        }
        _ => false,
    }
}

/// The live occupancy has appeared `threshold` or more times in the history.
pub fn is_repetition(game_state: &GameState, threshold: usize) -> bool {
    game_state.repetition_count() >= threshold
}

pub fn is_fifty_move_rule(game_state: &GameState, halfmove_limit: u16) -> bool {
    game_state.halfmove_clock >= halfmove_limit
}
