use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::termination::verdict::Verdict;

/// Why a proposed move was refused. Refusals are ordinary results, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no piece on the origin square")]
    NoPiece,
    #[error("the piece does not belong to the side to move")]
    WrongSide,
    #[error("origin and destination are the same square")]
    SameSquare,
    #[error("the destination holds a piece of the moving side")]
    OwnPieceOnTarget,
    #[error("the piece cannot move that way")]
    InvalidShape,
    #[error("a pawn may only move diagonally onto an enemy piece or the en-passant target")]
    NothingToCapture,
    #[error("the king or that rook has already moved")]
    CastlingRightsLost,
    #[error("there is no rook of the moving side on the castling corner")]
    CastlingRookMissing,
    #[error("the squares between king and rook are not empty")]
    CastlingPathBlocked,
    #[error("the king would start on, cross or land on an attacked square")]
    CastlingThroughCheck,
    #[error("the move would leave the mover's king in check")]
    ExposesKing,
}

/// Errors surfaced to callers of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square `{0}`")]
    InvalidSquare(String),
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("illegal move {from}-{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        #[source]
        reason: IllegalMove,
    },
    #[error("no promotion is pending")]
    NoPendingPromotion,
    #[error("the promotion on {from}-{to} must be completed first")]
    PromotionPending { from: Square, to: Square },
    #[error("a pawn cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),
    #[error("move {from}-{to} needs a promotion piece")]
    PromotionChoiceRequired { from: Square, to: Square },
    #[error("move {from}-{to} is not a promotion")]
    UnexpectedPromotion { from: Square, to: Square },
    #[error("the game is over: {0}")]
    GameOver(Verdict),
}

pub type ChessResult<T> = Result<T, ChessError>;
