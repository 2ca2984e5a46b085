//! Game verdicts surfaced to the caller after every transition.

use std::fmt;

use crate::game_state::chess_types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    Checkmate,
    Resignation,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    /// Play continues and the side to move is not in check.
    #[default]
    Ongoing,
    /// Play continues; the given side is in check and must answer it.
    Check(Side),
    Win { winner: Side, reason: WinReason },
    Draw(DrawReason),
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Verdict::Win { .. } | Verdict::Draw(_))
    }

    #[inline]
    pub const fn winner(&self) -> Option<Side> {
        match self {
            Verdict::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ongoing => write!(f, "game in progress"),
            Verdict::Check(side) => write!(f, "{side} is in check"),
            Verdict::Win { winner, reason } => {
                let loser = winner.opposite();
                match reason {
                    WinReason::Checkmate => write!(f, "checkmate, {winner} wins"),
                    WinReason::Resignation => write!(f, "{loser} resigns, {winner} wins"),
                    WinReason::Timeout => write!(f, "{loser} ran out of time, {winner} wins"),
                }
            }
            Verdict::Draw(reason) => match reason {
                DrawReason::Stalemate => write!(f, "draw by stalemate"),
                DrawReason::InsufficientMaterial => write!(f, "draw by insufficient material"),
                DrawReason::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
                DrawReason::FiftyMoveRule => write!(f, "draw by the fifty-move rule"),
            },
        }
    }
}
