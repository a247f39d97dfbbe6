//! Canonical chess-rule constants.
//!
//! Static literals shared by the notation codec, the session binary and the
//! tests.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Reply returned by the legal-move action when the side to move has no moves.
pub const NO_LEGAL_MOVES: &str = "No legal moves";
