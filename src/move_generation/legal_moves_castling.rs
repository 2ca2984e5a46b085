//! Castling legality.
//!
//! Only the squares the king itself stands on, crosses and lands on must be
//! safe; the rook's path merely has to be empty.

use crate::errors::IllegalMove;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_validation::{MoveKind, ValidatedMove};

/// Validates a two-column king move as a castle.
pub fn check_castling(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> Result<ValidatedMove, IllegalMove> {
    let board = &game_state.board;
    let side = game_state.side_to_move;
    let king = board
        .piece_at(from)
        .filter(|piece| piece.kind == PieceKind::King && piece.side == side)
        .ok_or(IllegalMove::InvalidShape)?;

    let row = side.back_row();
    if from.row() != row || to.row() != row || from.col().abs_diff(to.col()) != 2 {
        return Err(IllegalMove::InvalidShape);
    }

    let wing = castle_side_of(from, to);
    if !game_state.castling_rights.may_castle(side, wing) {
        return Err(IllegalMove::CastlingRightsLost);
    }

    let rook_square = Square::from_index(row * 8 + wing.rook_col());
    let rook_present = board
        .piece_at(rook_square)
        .is_some_and(|piece| piece.kind == PieceKind::Rook && piece.side == side);
    if !rook_present {
        return Err(IllegalMove::CastlingRookMissing);
    }

    let (low, high) = if from.col() < rook_square.col() {
        (from.col(), rook_square.col())
    } else {
        (rook_square.col(), from.col())
    };
    let path_clear = (low + 1..high).all(|col| board.is_empty_at(Square::from_index(row * 8 + col)));
    if !path_clear {
        return Err(IllegalMove::CastlingPathBlocked);
    }

    let transit = castling_transit_square(from, to);
    let opponent = side.opposite();
    if [from, transit, to]
        .into_iter()
        .any(|square| is_square_attacked(board, square, opponent))
    {
        return Err(IllegalMove::CastlingThroughCheck);
    }

    Ok(ValidatedMove {
        from,
        to,
        piece: king,
        captured: None,
        kind: MoveKind::Castle(wing),
    })
}

#[inline]
pub fn is_castling_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    check_castling(game_state, from, to).is_ok()
}

#[inline]
pub fn castle_side_of(from: Square, to: Square) -> CastleSide {
    if to.col() > from.col() {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    }
}

/// The square the king passes over; the rook ends up there.
#[inline]
pub fn castling_transit_square(from: Square, to: Square) -> Square {
    Square::from_index(from.row() * 8 + (from.col() + to.col()) / 2)
}

/// Rook origin and destination for a castle.
pub fn castling_rook_squares(from: Square, to: Square) -> (Square, Square) {
    let wing = castle_side_of(from, to);
    let rook_from = Square::from_index(from.row() * 8 + wing.rook_col());
    (rook_from, castling_transit_square(from, to))
}
