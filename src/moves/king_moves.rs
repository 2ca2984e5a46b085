//! King reach table: the eight neighbouring squares.
//!
//! Two-column castling steps are not part of this shape; they are routed to
//! `move_generation::legal_moves_castling`.

use crate::game_state::chess_types::Square;
use crate::moves::knight_moves::bit_if_on_board;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= bit_if_on_board(row - 1, col - 1);
        attacks |= bit_if_on_board(row - 1, col);
        attacks |= bit_if_on_board(row - 1, col + 1);
        attacks |= bit_if_on_board(row, col - 1);
        attacks |= bit_if_on_board(row, col + 1);
        attacks |= bit_if_on_board(row + 1, col - 1);
        attacks |= bit_if_on_board(row + 1, col);
        attacks |= bit_if_on_board(row + 1, col + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}
