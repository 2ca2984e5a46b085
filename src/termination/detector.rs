//! Termination detector, run against the live state after each transition.
//!
//! Precedence: checkmate, stalemate, insufficient material, repetition,
//! fifty-move rule. The first that applies wins.

use crate::config::RulesConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::termination::draw_rules::{is_fifty_move_rule, is_insufficient_material, is_repetition};
use crate::termination::verdict::{DrawReason, Verdict, WinReason};

pub fn evaluate(game_state: &GameState, config: &RulesConfig) -> Verdict {
    let side = game_state.side_to_move;
    let in_check = is_in_check(game_state, side);

    if !has_any_legal_move(game_state) {
        return if in_check {
            Verdict::Win {
                winner: side.opposite(),
                reason: WinReason::Checkmate,
            }
        } else {
            Verdict::Draw(DrawReason::Stalemate)
        };
    }

    if is_insufficient_material(&game_state.board) {
        return Verdict::Draw(DrawReason::InsufficientMaterial);
    }
    if is_repetition(game_state, config.repetition_threshold) {
        return Verdict::Draw(DrawReason::ThreefoldRepetition);
    }
    if is_fifty_move_rule(game_state, config.fifty_move_halfmoves) {
        return Verdict::Draw(DrawReason::FiftyMoveRule);
    }

    if in_check {
        Verdict::Check(side)
    } else {
        Verdict::Ongoing
    }
}

pub fn is_checkmate(game_state: &GameState) -> bool {
    is_in_check(game_state, game_state.side_to_move) && !has_any_legal_move(game_state)
}

pub fn is_stalemate(game_state: &GameState) -> bool {
    !is_in_check(game_state, game_state.side_to_move) && !has_any_legal_move(game_state)
}
