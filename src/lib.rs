//! Crate root module declarations for the chess actions rules engine.
//!
//! Exposes the board model, per-piece move generators, the legal-move
//! pipeline, notation helpers and the string-level actions so the session
//! binary, benches and external callers can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
    pub mod san;
}

pub mod session {
    pub mod session_config;
    pub mod session_top;
}

pub mod actions;
pub mod errors;
