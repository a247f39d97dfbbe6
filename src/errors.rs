//! Error types for the rules engine.
//!
//! Two families exist. `NotationError` is a hard failure: the caller handed
//! in text that is not a FEN position and nothing can be computed from it.
//! `MoveRejection` is a soft failure: the position is fine but the requested
//! move is not, and its `Display` text is the diagnostic handed back to the
//! caller in place of a new position so it can correct itself and retry.

use thiserror::Error;

use crate::moves::move_descriptions::{join_moves, ChessMove};

/// The provided FEN string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("missing {0} in FEN")]
    MissingField(&'static str),

    #[error("FEN has extra trailing fields")]
    ExtraFields,

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("board rank '{0}' does not sum to 8 files")]
    RankWidth(String),

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastlingChar(char),

    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid {field}: {value}")]
    InvalidCounter { field: &'static str, value: String },
}

/// A move that was not applied, with the reason as caller-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("Invalid move: {text}")]
    Unresolved { text: String },

    #[error("Invalid move: {text}, start position is empty")]
    EmptyStart { text: String },

    #[error("Invalid move: {text}, start position holds an opponent piece")]
    OpponentPiece { text: String },

    #[error("Invalid move: {text}, not in pieces moves: {}", join_moves(.candidates))]
    NotInPieceMoves {
        text: String,
        candidates: Vec<ChessMove>,
    },
}
