//! Pawn shapes.
//!
//! Pawns are the one piece whose capture shape differs from its move shape,
//! so the two are kept apart: [`pawn_attacks`] is the diagonal reach used by
//! the attack detector, [`pawn_shape`] classifies a proposed move.

use crate::game_state::chess_types::{Side, Square};
use crate::moves::knight_moves::bit_if_on_board;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

/// Squares a pawn of `side` on `square` attacks, occupied or not.
#[inline]
pub const fn pawn_attacks(side: Side, square: Square) -> u64 {
    match side {
        Side::White => WHITE_PAWN_ATTACKS[square.index()],
        Side::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(forward: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        table[sq] =
            bit_if_on_board(row + forward, col - 1) | bit_if_on_board(row + forward, col + 1);
        sq += 1;
    }

    table
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnShape {
    /// One square straight ahead.
    Single,
    /// Two squares straight ahead from the starting row.
    Double,
    /// One square diagonally forward.
    Diagonal,
}

/// Geometric class of a pawn move, ignoring occupancy.
pub fn pawn_shape(side: Side, from: Square, to: Square) -> Option<PawnShape> {
    let row_delta = to.row() as i8 - from.row() as i8;
    let col_delta = (to.col() as i8 - from.col() as i8).abs();
    let forward = side.forward();

    match (row_delta, col_delta) {
        (r, 0) if r == forward => Some(PawnShape::Single),
        (r, 0) if r == 2 * forward && from.row() == side.pawn_start_row() => {
            Some(PawnShape::Double)
        }
        (r, 1) if r == forward => Some(PawnShape::Diagonal),
        _ => None,
    }
}

/// Square skipped by a two-square advance.
#[inline]
pub fn double_push_midpoint(from: Square, to: Square) -> Square {
    Square::from_index(((from.row() + to.row()) / 2) * 8 + from.col())
}
