//! Crate root module declarations for the chess referee.
//!
//! The crate is a rules engine for a two-player game: it decides whether a
//! proposed move is legal, builds the resulting position and reports check,
//! checkmate, stalemate and the draw conditions. Rendering, input capture and
//! clocks live with the caller and talk to [`session::game::Game`].

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod movement_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_validation;
    pub mod legal_moves_castling;
    pub mod perft;
}

pub mod termination {
    pub mod detector;
    pub mod draw_rules;
    pub mod verdict;
}

pub mod session {
    pub mod game;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_notation;
}

pub mod config;
pub mod errors;
