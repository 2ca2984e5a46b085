//! Game-state transition.
//!
//! Builds the next snapshot from a validated move. The input state is only
//! read; history vectors are copied and extended so earlier snapshots stay
//! valid for undo and repetition checks.

use log::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validation::{check_move, MoveKind, ValidatedMove};
use crate::move_generation::legal_moves_castling::castling_rook_squares;
use crate::moves::pawn_moves::double_push_midpoint;

/// Validates and plays `from`-`to`, returning the next state.
///
/// `promotion` must be given exactly when a pawn reaches the far rank.
pub fn apply_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<GameState> {
    let mv = check_move(game_state, from, to)
        .map_err(|reason| ChessError::IllegalMove { from, to, reason })?;
    apply_validated_move(game_state, &mv, promotion)
}

pub fn apply_validated_move(
    game_state: &GameState,
    mv: &ValidatedMove,
    promotion: Option<PieceKind>,
) -> ChessResult<GameState> {
    let (from, to) = (mv.from, mv.to);
    let promoted_to = match (mv.requires_promotion(), promotion) {
        (true, None) => return Err(ChessError::PromotionChoiceRequired { from, to }),
        (true, Some(kind)) if !kind.is_promotion_choice() => {
            return Err(ChessError::InvalidPromotionPiece(kind))
        }
        (true, Some(kind)) => Some(kind),
        (false, Some(_)) => return Err(ChessError::UnexpectedPromotion { from, to }),
        (false, None) => None,
    };

    let mover = mv.piece.side;
    let board = board_after_move(&game_state.board, mv, promoted_to);

    let mut castling_rights = game_state.castling_rights;
    update_castling_rights(&mut castling_rights, mv);

    let en_passant_target = match mv.kind {
        MoveKind::DoublePawnPush => Some(double_push_midpoint(from, to)),
        _ => None,
    };

    let record = MoveRecord {
        from,
        to,
        moved_piece: mv.piece,
        captured_piece: mv.captured,
        is_castle: matches!(mv.kind, MoveKind::Castle(_)),
        is_en_passant_capture: mv.kind == MoveKind::EnPassant,
        is_promotion: promoted_to.is_some(),
        promoted_to,
    };

    let halfmove_clock = if record.is_irreversible() {
        0
    } else {
        game_state.halfmove_clock.saturating_add(1)
    };
    let fullmove_number = match mover {
        Side::Black => game_state.fullmove_number.saturating_add(1),
        Side::White => game_state.fullmove_number,
    };

    let mut position_history = Vec::with_capacity(game_state.position_history.len() + 1);
    position_history.extend_from_slice(&game_state.position_history);
    position_history.push(board.fingerprint());

    let mut move_log = Vec::with_capacity(game_state.move_log.len() + 1);
    move_log.extend_from_slice(&game_state.move_log);
    move_log.push(record);

    trace!(
        "{mover} played {from}-{to} ({:?}); halfmove clock {halfmove_clock}",
        mv.kind
    );

    Ok(GameState {
        board,
        side_to_move: mover.opposite(),
        en_passant_target,
        castling_rights,
        halfmove_clock,
        fullmove_number,
        initial_board: game_state.initial_board,
        initial_fullmove_number: game_state.initial_fullmove_number,
        cursor: move_log.len(),
        position_history,
        move_log,
    })
}

/// Board after `mv`, on a fresh copy.
///
/// With no promotion kind a promoting pawn stays a pawn, which is all the
/// king-safety simulation needs.
pub fn board_after_move(board: &Board, mv: &ValidatedMove, promotion: Option<PieceKind>) -> Board {
    let mut next = *board;

    if let Some(captured_on) = mv.capture_square() {
        next.set(captured_on, None);
    }

    let placed = promotion.map_or(mv.piece, |kind| Piece::new(kind, mv.piece.side));
    next.set(mv.from, None);
    next.set(mv.to, Some(placed));

    if let MoveKind::Castle(_) = mv.kind {
        let (rook_from, rook_to) = castling_rook_squares(mv.from, mv.to);
        let rook = next.piece_at(rook_from);
        next.set(rook_from, None);
        next.set(rook_to, rook);
    }

    next
}

fn update_castling_rights(rights: &mut CastlingRights, mv: &ValidatedMove) {
    let side = mv.piece.side;
    match mv.piece.kind {
        PieceKind::King => rights.mark_king_moved(side),
        PieceKind::Rook => {
            if let Some(wing) = home_corner_wing(side, mv.from) {
                rights.mark_rook_moved(side, wing);
            }
        }
        _ => {}
    }

    // A rook taken on its corner can never castle either.
    if let Some(captured) = mv.captured.filter(|piece| piece.kind == PieceKind::Rook) {
        if let Some(wing) = home_corner_wing(captured.side, mv.to) {
            rights.mark_rook_moved(captured.side, wing);
        }
    }
}

fn home_corner_wing(side: Side, square: Square) -> Option<CastleSide> {
    if square.row() != side.back_row() {
        return None;
    }
    CastleSide::from_rook_col(square.col())
}
