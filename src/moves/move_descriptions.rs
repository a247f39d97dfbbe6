//! Move value types.
//!
//! A `ChessMove` is the start/end square pair that the generators emit and
//! the applier consumes. Its `Display` is the four-character coordinate form
//! (`e2e4`) used in every caller-facing move list.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn col_delta(self) -> u8 {
        self.from.col.abs_diff(self.to.col)
    }

    #[inline]
    pub fn row_delta(self) -> u8 {
        self.from.row.abs_diff(self.to.row)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A move read from caller text, before validation against the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub chess_move: ChessMove,
    /// Requested promotion piece. Parsed, never placed on the board.
    pub promotion: Option<PieceKind>,
    /// Set when the text was `O-O` / `O-O-O`.
    pub castle: Option<CastleSide>,
}

impl ParsedMove {
    #[inline]
    pub const fn plain(chess_move: ChessMove) -> Self {
        Self {
            chess_move,
            promotion: None,
            castle: None,
        }
    }
}

/// Comma-space joined coordinate list, as shown to callers.
pub fn join_moves(moves: &[ChessMove]) -> String {
    moves
        .iter()
        .map(ChessMove::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{join_moves, ChessMove};
    use crate::game_state::chess_types::Square;

    #[test]
    fn display_is_coordinate_pair() {
        let e2e4 = ChessMove::new(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(e2e4.to_string(), "e2e4");
        assert_eq!(e2e4.row_delta(), 2);
        assert_eq!(e2e4.col_delta(), 0);
    }

    #[test]
    fn join_uses_comma_space() {
        let g1f3 = ChessMove::new(Square::new(7, 6), Square::new(5, 5));
        let g1h3 = ChessMove::new(Square::new(7, 6), Square::new(5, 7));
        assert_eq!(join_moves(&[g1f3, g1h3]), "g1f3, g1h3");
        assert_eq!(join_moves(&[]), "");
    }
}
