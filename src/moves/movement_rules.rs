//! Per-kind movement shapes, independent of check and of turn order.
//!
//! Two queries live here and never call into legality:
//! [`attack_mask`] (what a piece threatens) and [`geometrically_legal`]
//! (whether the move has the right shape and a clear path).

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::{double_push_midpoint, pawn_attacks, pawn_shape, PawnShape};
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares `piece` standing on `from` attacks, given the board occupancy.
///
/// Sliding rays include their first blocker whatever its side; pawns use
/// their diagonal capture shape.
pub fn attack_mask(piece: Piece, from: Square, occupancy: u64) -> u64 {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.side, from),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        PieceKind::King => king_attacks(from),
    }
}

/// Whether the piece on `from` has the shape to reach `to`.
///
/// A pawn's straight advance requires empty squares; its diagonal step is
/// reported as a shape only, the capture condition belongs to the caller.
/// Castling steps are not king shapes.
pub fn geometrically_legal(board: &Board, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    match piece.kind {
        PieceKind::Pawn => match pawn_shape(piece.side, from, to) {
            Some(PawnShape::Single) => board.is_empty_at(to),
            Some(PawnShape::Double) => {
                board.is_empty_at(double_push_midpoint(from, to)) && board.is_empty_at(to)
            }
            Some(PawnShape::Diagonal) => true,
            None => false,
        },
        PieceKind::Knight
        | PieceKind::Bishop
        | PieceKind::Rook
        | PieceKind::Queen
        | PieceKind::King => attack_mask(piece, from, board.occupancy()) & to.mask() != 0,
    }
}
