//! Board model: an 8x8 grid of optional pieces.
//!
//! `Board` is a plain `Copy` value. Every derived position is a fresh board,
//! so speculative moves made while checking legality can never leak into
//! the live game.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard initial position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for side in Side::BOTH {
            let pawn_row = side.pawn_start_row();
            let back_row = side.back_row();
            for col in 0..8u8 {
                board.set(
                    Square::from_index(back_row * 8 + col),
                    Some(Piece::new(BACK_RANK[col as usize], side)),
                );
                board.set(
                    Square::from_index(pawn_row * 8 + col),
                    Some(Piece::new(PieceKind::Pawn, side)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Copy of this board with `square` replaced.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Option<Piece>) -> Self {
        self.set(square, piece);
        self
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.side == side)
            .map(|(square, _)| square)
    }

    /// One bit per occupied square, indexed like [`Square::index`].
    pub fn occupancy(&self) -> u64 {
        self.pieces()
            .fold(0u64, |acc, (square, _)| acc | square.mask())
    }

    /// Occupancy of each piece kind of `side`, indexed by [`PieceKind::index`].
    pub fn bitboards(&self, side: Side) -> [u64; 6] {
        self.pieces_of(side)
            .fold([0u64; 6], |mut boards, (square, piece)| {
                boards[piece.kind.index()] |= square.mask();
                boards
            })
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| piece.map(|p| (Square::from_index(index as u8), p)))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|piece| piece.is_some()).count()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        let mut packed = [0u8; 32];
        for (index, piece) in self.squares.iter().enumerate() {
            let code = piece.map_or(0, piece_code);
            packed[index / 2] |= code << ((index % 2) * 4);
        }
        Fingerprint(packed)
    }
}

/// Lossless packing of board occupancy, four bits per square.
///
/// Side to move, castling rights and the en-passant target are
/// not part of it: repetition is keyed on occupancy alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Rebuilds the board this fingerprint was taken from.
    pub fn to_board(&self) -> Board {
        let mut board = Board::empty();
        for index in 0..64usize {
            let code = (self.0[index / 2] >> ((index % 2) * 4)) & 0x0f;
            board.set(Square::from_index(index as u8), piece_from_code(code));
        }
        board
    }
}

fn piece_code(piece: Piece) -> u8 {
    let base = piece.kind.index() as u8 + 1;
    match piece.side {
        Side::White => base,
        Side::Black => base + 6,
    }
}

fn piece_from_code(code: u8) -> Option<Piece> {
    let (side, kind_index) = match code {
        1..=6 => (Side::White, code - 1),
        7..=12 => (Side::Black, code - 7),
        _ => return None,
    };
    Some(Piece::new(PieceKind::ALL[kind_index as usize], side))
}
