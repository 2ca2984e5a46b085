use crate::game_state::chess_types::*;

/// One committed ply, as kept in the move log for review and undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_castle: bool,
    pub is_en_passant_capture: bool,
    pub is_promotion: bool,
    pub promoted_to: Option<PieceKind>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// Resets the halfmove clock.
    #[inline]
    pub fn is_irreversible(&self) -> bool {
        self.moved_piece.kind == PieceKind::Pawn || self.is_capture()
    }
}
