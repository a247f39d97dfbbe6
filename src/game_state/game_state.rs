//! Whole-position state as carried by a FEN string.
//!
//! `GameState` owns its board by value. Cloning it is how the move applier
//! and the legal-move filter get a private working copy.

use crate::errors::NotationError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::moves::move_generator::MoveContext;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u32,
    /// Starts at 1, incremented after each dark move.
    pub fullmove_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: EMPTY_BOARD,
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        piece_at(&self.board, square)
    }

    /// Generator inputs for the side to move.
    #[inline]
    pub fn move_context(&self) -> MoveContext<'_> {
        MoveContext {
            board: &self.board,
            side: self.side_to_move,
            en_passant: self.en_passant_square,
            castling_rights: self.castling_rights,
        }
    }
}
