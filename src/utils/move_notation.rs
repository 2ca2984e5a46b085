//! Move-list notation for review displays.
//!
//! Long form: piece letter (omitted for pawns), origin, `-` or `x`,
//! destination. Castling is written `O-O` / `O-O-O`, promotions append `=Q`
//! and en-passant captures append ` e.p.`.

use crate::game_state::chess_types::*;

pub fn describe_move(record: &MoveRecord) -> String {
    if record.is_castle {
        return if record.to.col() > record.from.col() {
            "O-O".to_owned()
        } else {
            "O-O-O".to_owned()
        };
    }

    let mut out = String::with_capacity(10);
    if record.moved_piece.kind != PieceKind::Pawn {
        out.push(record.moved_piece.kind.letter());
    }
    out.push_str(&record.from.to_string());
    out.push(if record.is_capture() { 'x' } else { '-' });
    out.push_str(&record.to.to_string());

    if let Some(kind) = record.promoted_to {
        out.push('=');
        out.push(kind.letter());
    }
    if record.is_en_passant_capture {
        out.push_str(" e.p.");
    }

    out
}

/// Numbered move list, one line per full move: `1. e2-e4 e7-e5`.
pub fn describe_move_log(game_state: &GameState) -> Vec<String> {
    // A FEN start with Black to move opens with "1... <move>".
    let black_first = game_state.side_to_move_at_start() == Side::Black;
    let first_number = u32::from(game_state.initial_fullmove_number);

    let mut lines = Vec::new();
    let mut plies = game_state.move_log.iter().map(describe_move);

    if black_first {
        if let Some(first) = plies.next() {
            lines.push(format!("{first_number}... {first}"));
        }
    }

    let mut number = if black_first { first_number + 1 } else { first_number };
    while let Some(white) = plies.next() {
        match plies.next() {
            Some(black) => lines.push(format!("{number}. {white} {black}")),
            None => lines.push(format!("{number}. {white}")),
        }
        number += 1;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{describe_move, describe_move_log};
    use crate::game_state::chess_types::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn play(state: &GameState, from: &str, to: &str, promotion: Option<PieceKind>) -> GameState {
        state
            .apply_move(sq(from), sq(to), promotion)
            .expect("scripted move should be legal")
    }

    #[test]
    fn quiet_moves_and_captures() {
        let state = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K1N1 w - - 0 1").expect("FEN");
        let after = play(&state, "e4", "d5", None);
        assert_eq!(describe_move(after.last_move().expect("one move")), "e4xd5");

        let after = play(&state, "g1", "f3", None);
        assert_eq!(describe_move(after.last_move().expect("one move")), "Ng1-f3");
    }

    #[test]
    fn castling_promotion_and_en_passant() {
        let castle = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN");
        let kingside = play(&castle, "e1", "g1", None);
        assert_eq!(describe_move(kingside.last_move().expect("move")), "O-O");
        let queenside = play(&castle, "e1", "c1", None);
        assert_eq!(describe_move(queenside.last_move().expect("move")), "O-O-O");

        let promote = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN");
        let promoted = play(&promote, "a7", "b8", Some(PieceKind::Knight));
        assert_eq!(describe_move(promoted.last_move().expect("move")), "a7xb8=N");

        let passant = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN");
        let captured = play(&passant, "e5", "d6", None);
        assert_eq!(describe_move(captured.last_move().expect("move")), "e5xd6 e.p.");
    }

    #[test]
    fn move_log_is_numbered_by_full_move() {
        let state = GameState::new_game();
        let state = play(&state, "e2", "e4", None);
        let state = play(&state, "e7", "e5", None);
        let state = play(&state, "g1", "f3", None);
        assert_eq!(
            describe_move_log(&state),
            vec!["1. e2-e4 e7-e5".to_owned(), "2. Ng1-f3".to_owned()]
        );
    }

    #[test]
    fn move_numbers_past_the_fen_counter_range() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 65535").expect("FEN");
        let state = play(&state, "h1", "h2", None);
        let state = play(&state, "e8", "d8", None);
        let state = play(&state, "h2", "h1", None);
        assert_eq!(state.initial_fullmove_number, 65535);
        assert_eq!(
            describe_move_log(&state),
            vec!["65535. Rh1-h2 Ke8-d8".to_owned(), "65536. Rh2-h1".to_owned()]
        );
    }

    #[test]
    fn move_log_from_a_black_to_move_setup() {
        let state = GameState::from_fen("4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 7").expect("FEN");
        let state = play(&state, "e7", "e5", None);
        let state = play(&state, "e2", "e4", None);
        assert_eq!(
            describe_move_log(&state),
            vec!["7... e7-e5".to_owned(), "8. e2-e4".to_owned()]
        );
    }
}
