//! Value types shared by every layer of the rules engine.
//!
//! Squares use the display orientation of the board: row 0 is Black's back
//! rank (rank 8) and column 0 is the a-file. A square's bit index is
//! `row * 8 + col`, which is how the reach tables in `moves` address it.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub use crate::game_state::board::{Board, Fingerprint};
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::move_record::MoveRecord;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (side is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// A pawn may only become one of these.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }

    /// Upper-case letter used by FEN and move notation.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board. Pieces are replaced, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// FEN character: upper case for White, lower case for Black.
    pub const fn fen_char(self) -> char {
        let letter = self.kind.letter();
        match self.side {
            Side::White => letter,
            Side::Black => letter.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let side = if ch.is_ascii_uppercase() {
            Side::White
        } else if ch.is_ascii_lowercase() {
            Side::Black
        } else {
            return None;
        };
        PieceKind::from_letter(ch).map(|kind| Piece::new(kind, side))
    }
}

/// A board coordinate; both parts are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Square for a bit index; only the low six bits are used.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Self {
            row: (index >> 3) & 7,
            col: index & 7,
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.row * 8 + self.col) as usize
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.index()
    }

    /// 0 or 1; squares of equal parity share a colour.
    #[inline]
    pub const fn colour_parity(self) -> u8 {
        (self.row + self.col) % 2
    }

    /// All 64 squares, row by row starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 1,
        }
    }

    /// Home column of the rook on this wing.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 7,
        }
    }

    pub const fn from_rook_col(col: u8) -> Option<Self> {
        match col {
            0 => Some(CastleSide::Queenside),
            7 => Some(CastleSide::Kingside),
            _ => None,
        }
    }
}

/// Irrevocable "has moved" flags gating castling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    king_moved: [bool; 2],
    // [side][queenside, kingside]
    rook_moved: [[bool; 2]; 2],
}

impl CastlingRights {
    /// Rights with every king and rook already marked as moved.
    pub const fn none() -> Self {
        Self {
            king_moved: [true; 2],
            rook_moved: [[true; 2]; 2],
        }
    }

    /// Rights from explicit flags: `rook_moved` is `[side][queenside, kingside]`.
    pub const fn from_flags(king_moved: [bool; 2], rook_moved: [[bool; 2]; 2]) -> Self {
        Self {
            king_moved,
            rook_moved,
        }
    }

    #[inline]
    pub const fn king_moved(&self, side: Side) -> bool {
        self.king_moved[side.index()]
    }

    #[inline]
    pub const fn rook_moved(&self, side: Side, wing: CastleSide) -> bool {
        self.rook_moved[side.index()][wing.index()]
    }

    #[inline]
    pub const fn may_castle(&self, side: Side, wing: CastleSide) -> bool {
        !self.king_moved(side) && !self.rook_moved(side, wing)
    }

    pub fn mark_king_moved(&mut self, side: Side) {
        self.king_moved[side.index()] = true;
    }

    pub fn mark_rook_moved(&mut self, side: Side, wing: CastleSide) {
        self.rook_moved[side.index()][wing.index()] = true;
    }
}
