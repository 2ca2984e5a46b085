//! Knight reach table: every (1,2) offset that stays on the board.

use crate::game_state::chess_types::Square;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

const fn generate_knight_attacks() -> [u64; 64] {
    const JUMPS: [(i32, i32); 8] = [
        (-2, -1),
        (-2, 1),
        (-1, -2),
        (-1, 2),
        (1, -2),
        (1, 2),
        (2, -1),
        (2, 1),
    ];

    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;
        let mut j = 0usize;
        while j < JUMPS.len() {
            attacks |= bit_if_on_board(row + JUMPS[j].0, col + JUMPS[j].1);
            j += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn bit_if_on_board(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }
    1u64 << ((row * 8 + col) as u32)
}
