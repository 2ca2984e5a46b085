use crate::game_state::chess_types::*;

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move {
        Side::White => "w",
        Side::Black => "b",
    };
    let en_passant = game_state
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(&game_state.board),
        side_to_move,
        generate_castling_field(&game_state.castling_rights),
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match board.piece_at(Square::from_index(row * 8 + col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: &CastlingRights) -> String {
    let mut out = String::new();

    for (side, wing, letter) in [
        (Side::White, CastleSide::Kingside, 'K'),
        (Side::White, CastleSide::Queenside, 'Q'),
        (Side::Black, CastleSide::Kingside, 'k'),
        (Side::Black, CastleSide::Queenside, 'q'),
    ] {
        if rights.may_castle(side, wing) {
            out.push(letter);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
