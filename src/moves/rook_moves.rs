//! Rook reach: orthogonal rays that stop at (and include) the first
//! occupied square.

use crate::game_state::chess_types::Square;

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

const ROOK_STEPS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_STEPS
        .iter()
        .fold(0u64, |acc, &(row_step, col_step)| {
            acc | trace_ray(square, row_step, col_step, occupancy)
        })
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut rays = 0u64;
        let mut i = 0usize;
        while i < ROOK_STEPS.len() {
            rays |= trace_ray_const(sq as i32, ROOK_STEPS[i].0, ROOK_STEPS[i].1);
            i += 1;
        }

        table[sq] = rays;
        sq += 1;
    }

    table
}

pub(crate) fn trace_ray(square: Square, row_step: i32, col_step: i32, occupancy: u64) -> u64 {
    let mut row = square.row() as i32 + row_step;
    let mut col = square.col() as i32 + col_step;
    let mut attacks = 0u64;

    while (0..8).contains(&row) && (0..8).contains(&col) {
        let bit = 1u64 << (row * 8 + col) as u32;
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += row_step;
        col += col_step;
    }

    attacks
}

/// Unobstructed ray, for the precomputed tables.
pub(crate) const fn trace_ray_const(square: i32, row_step: i32, col_step: i32) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut col = (square % 8) + col_step;
    let mut attacks = 0u64;

    while row >= 0 && row < 8 && col >= 0 && col < 8 {
        attacks |= 1u64 << ((row * 8 + col) as u32);
        row += row_step;
        col += col_step;
    }

    attacks
}
