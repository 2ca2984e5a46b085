//! Attack detection.
//!
//! Answers "is this square attacked by that side" from reach shapes alone.
//! It never asks whether the attacking move would itself be legal, which is
//! what keeps check detection and move legality from recursing into each
//! other.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::QUEEN_RAYS;
use crate::moves::rook_moves::rook_attacks;

pub fn is_square_attacked(board: &Board, square: Square, attacker: Side) -> bool {
    let pieces = board.bitboards(attacker);
    let piece = |kind: PieceKind| pieces[kind.index()];

    // A pawn of the other side on `square` would hit exactly the squares
    // from which an attacking pawn reaches `square`.
    if pawn_attacks(attacker.opposite(), square) & piece(PieceKind::Pawn) != 0 {
        return true;
    }

    if knight_attacks(square) & piece(PieceKind::Knight) != 0 {
        return true;
    }

    if king_attacks(square) & piece(PieceKind::King) != 0 {
        return true;
    }

    let queens = piece(PieceKind::Queen);
    let diagonal = piece(PieceKind::Bishop) | queens;
    let straight = piece(PieceKind::Rook) | queens;
    if QUEEN_RAYS[square.index()] & (diagonal | straight) == 0 {
        return false;
    }

    let occupancy = board.occupancy();
    bishop_attacks(square, occupancy) & diagonal != 0
        || rook_attacks(square, occupancy) & straight != 0
}

/// Whether `side` has a king and it stands on an attacked square.
pub fn is_king_in_check(board: &Board, side: Side) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };
    is_square_attacked(board, king, side.opposite())
}

#[inline]
pub fn is_in_check(game_state: &GameState, side: Side) -> bool {
    is_king_in_check(&game_state.board, side)
}
