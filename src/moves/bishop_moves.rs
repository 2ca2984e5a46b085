//! Bishop reach: diagonal rays that stop at (and include) the first
//! occupied square.

use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::{trace_ray, trace_ray_const};

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

const BISHOP_STEPS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_STEPS
        .iter()
        .fold(0u64, |acc, &(row_step, col_step)| {
            acc | trace_ray(square, row_step, col_step, occupancy)
        })
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut rays = 0u64;
        let mut i = 0usize;
        while i < BISHOP_STEPS.len() {
            rays |= trace_ray_const(sq as i32, BISHOP_STEPS[i].0, BISHOP_STEPS[i].1);
            i += 1;
        }

        table[sq] = rays;
        sq += 1;
    }

    table
}
