use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};

pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_RAYS[sq] | ROOK_RAYS[sq];
        sq += 1;
    }

    table
}
