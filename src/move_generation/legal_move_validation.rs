//! Check/legality evaluator.
//!
//! A move is legal when it has the right shape, the right occupancy for its
//! kind, and does not leave the mover's king attacked once played on a copy
//! of the board. That last rule covers pins, discovered checks and the duty
//! to answer a check without any pin bookkeeping.

use crate::errors::IllegalMove;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_castling::check_castling;
use crate::moves::movement_rules::geometrically_legal;
use crate::moves::pawn_moves::{pawn_shape, PawnShape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
}

/// A move that passed every legality check against a particular state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl ValidatedMove {
    /// A pawn reaching the far rank; the transition waits for a piece choice.
    #[inline]
    pub fn requires_promotion(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.to.row() == self.piece.side.promotion_row()
    }

    /// Where the captured piece stood, which differs from `to` for en passant.
    pub fn capture_square(&self) -> Option<Square> {
        match self.kind {
            MoveKind::EnPassant => Some(en_passant_victim_square(self.from, self.to)),
            MoveKind::Capture => Some(self.to),
            MoveKind::Quiet | MoveKind::DoublePawnPush | MoveKind::Castle(_) => None,
        }
    }
}

/// The pawn taken en passant sits on the mover's row, in the target column.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Square {
    Square::from_index(from.row() * 8 + to.col())
}

pub fn check_move(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> Result<ValidatedMove, IllegalMove> {
    let board = &game_state.board;
    let piece = board.piece_at(from).ok_or(IllegalMove::NoPiece)?;
    if piece.side != game_state.side_to_move {
        return Err(IllegalMove::WrongSide);
    }
    if from == to {
        return Err(IllegalMove::SameSquare);
    }
    let target = board.piece_at(to);
    if target.is_some_and(|t| t.side == piece.side) {
        return Err(IllegalMove::OwnPieceOnTarget);
    }

    if piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
        return check_castling(game_state, from, to);
    }

    if !geometrically_legal(board, from, to) {
        return Err(IllegalMove::InvalidShape);
    }

    let (kind, captured) = match piece.kind {
        PieceKind::Pawn => classify_pawn_move(game_state, piece, from, to)?,
        _ if target.is_some() => (MoveKind::Capture, target),
        _ => (MoveKind::Quiet, None),
    };

    let candidate = ValidatedMove {
        from,
        to,
        piece,
        captured,
        kind,
    };

    // Own-king safety is decided on a throwaway board.
    let simulated = board_after_move(board, &candidate, None);
    if is_king_in_check(&simulated, piece.side) {
        return Err(IllegalMove::ExposesKing);
    }

    Ok(candidate)
}

fn classify_pawn_move(
    game_state: &GameState,
    pawn: Piece,
    from: Square,
    to: Square,
) -> Result<(MoveKind, Option<Piece>), IllegalMove> {
    let board = &game_state.board;
    match pawn_shape(pawn.side, from, to) {
        Some(PawnShape::Single) => Ok((MoveKind::Quiet, None)),
        Some(PawnShape::Double) => Ok((MoveKind::DoublePawnPush, None)),
        Some(PawnShape::Diagonal) => {
            if let Some(target) = board.piece_at(to) {
                return Ok((MoveKind::Capture, Some(target)));
            }
            if game_state.en_passant_target != Some(to) {
                return Err(IllegalMove::NothingToCapture);
            }
            match board.piece_at(en_passant_victim_square(from, to)) {
                Some(victim) if victim.kind == PieceKind::Pawn && victim.side != pawn.side => {
                    Ok((MoveKind::EnPassant, Some(victim)))
                }
                _ => Err(IllegalMove::NothingToCapture),
            }
        }
        None => Err(IllegalMove::InvalidShape),
    }
}

#[inline]
pub fn is_legal_move(game_state: &GameState, from: Square, to: Square) -> bool {
    check_move(game_state, from, to).is_ok()
}
