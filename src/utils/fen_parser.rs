//! FEN-to-GameState parser.
//!
//! Builds a fresh snapshot (empty history, cursor 0) from Forsyth-Edwards
//! Notation. Castling letters are mapped onto the "has moved" flags, and
//! flags are forced on for any king or rook that is not on its home square.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    let mut game_state = GameState::from_board(board, side_to_move);
    game_state.castling_rights = parse_castling_rights(castling_part, &board)?;
    game_state.en_passant_target =
        parse_en_passant_square(en_passant_part, &board, side_to_move)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad halfmove clock `{halfmove_part}`")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad fullmove number `{fullmove_part}`")))?;
    game_state.initial_fullmove_number = game_state.fullmove_number;

    Ok(game_state)
}

fn invalid(message: &str) -> ChessError {
    ChessError::InvalidFen(message.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // FEN lists rank 8 first, which is row 0.
    let mut board = Board::empty();
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("bad empty-square count `{ch}`")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("bad piece character `{ch}`")))?;
            if col >= 8 {
                return Err(invalid("rank has too many files"));
            }

            board.set(Square::from_index((row * 8 + col) as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    for side in Side::BOTH {
        let kings = board
            .pieces_of(side)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings > 1 {
            return Err(invalid(&format!("more than one {side} king")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Side> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(invalid(&format!("bad side to move `{side_part}`"))),
    }
}

fn parse_castling_rights(castling_part: &str, board: &Board) -> ChessResult<CastlingRights> {
    let mut available = [[false; 2]; 2];

    if castling_part != "-" {
        for ch in castling_part.chars() {
            let (side, wing) = match ch {
                'K' => (Side::White, CastleSide::Kingside),
                'Q' => (Side::White, CastleSide::Queenside),
                'k' => (Side::Black, CastleSide::Kingside),
                'q' => (Side::Black, CastleSide::Queenside),
                _ => return Err(invalid(&format!("bad castling character `{ch}`"))),
            };
            available[side.index()][wing.index()] = true;
        }
    }

    let mut king_moved = [true; 2];
    let mut rook_moved = [[true; 2]; 2];
    for side in Side::BOTH {
        let row = side.back_row();
        let king_home = Square::from_index(row * 8 + 4);
        let king_in_place = board.piece_at(king_home) == Some(Piece::new(PieceKind::King, side));

        for wing in CastleSide::BOTH {
            let rook_home = Square::from_index(row * 8 + wing.rook_col());
            let rook_in_place =
                board.piece_at(rook_home) == Some(Piece::new(PieceKind::Rook, side));
            if available[side.index()][wing.index()] && king_in_place && rook_in_place {
                rook_moved[side.index()][wing.index()] = false;
                king_moved[side.index()] = false;
            }
        }
    }

    Ok(CastlingRights::from_flags(king_moved, rook_moved))
}

/// The target must sit right behind a pawn of the side that just moved,
/// with the pawn's start square and the target itself empty.
fn parse_en_passant_square(
    en_passant_part: &str,
    board: &Board,
    side_to_move: Side,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let pusher = side_to_move.opposite();
    let start_row = pusher.pawn_start_row();
    let target_row = start_row.wrapping_add_signed(pusher.forward());
    let pawn_row = target_row.wrapping_add_signed(pusher.forward());

    let col = target.col();
    let pawn_in_place = board.piece_at(Square::from_index(pawn_row * 8 + col))
        == Some(Piece::new(PieceKind::Pawn, pusher));
    let origin_empty = board.is_empty_at(Square::from_index(start_row * 8 + col));

    if target.row() != target_row || !pawn_in_place || !origin_empty || !board.is_empty_at(target) {
        return Err(invalid(&format!(
            "`{en_passant_part}` is not an en-passant square with {side_to_move} to move"
        )));
    }

    Ok(Some(target))
}
