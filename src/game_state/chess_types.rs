/// Core value types shared by the notation codec, the move generators and
/// the move applier. Boards are plain 8x8 arrays so a `GameState` clone is a
/// full, independent copy.

use std::fmt;

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a pawn push for this side (row 0 is rank 8).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row the pawns of this side start on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row the king and rooks of this side start on.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
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
    /// Lowercase FEN letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Empty squares are `None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        PieceKind::from_fen_char(ch).map(|kind| Piece::new(color, kind))
    }
}

/// Board grid: `board[row][col]`, row 0 = rank 8, col 0 = file a.
pub type Board = [[Option<Piece>; 8]; 8];

pub const EMPTY_BOARD: Board = [[None; 8]; 8];

/// A board coordinate in grid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Square reached by stepping `(d_row, d_col)`, or `None` off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col)
    }

    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'8' - self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[inline]
pub fn piece_at(board: &Board, square: Square) -> Option<Piece> {
    board[square.row as usize][square.col as usize]
}

#[inline]
pub fn set_piece(board: &mut Board, square: Square, piece: Option<Piece>) {
    board[square.row as usize][square.col as usize] = piece;
}

/// Which wing a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// Column the king lands on.
    #[inline]
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// Column the rook starts on.
    #[inline]
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    #[inline]
    pub const fn right(self, color: Color) -> CastlingRights {
        match (color, self) {
            (Color::Light, CastleSide::King) => CASTLE_LIGHT_KINGSIDE,
            (Color::Light, CastleSide::Queen) => CASTLE_LIGHT_QUEENSIDE,
            (Color::Dark, CastleSide::King) => CASTLE_DARK_KINGSIDE,
            (Color::Dark, CastleSide::Queen) => CASTLE_DARK_QUEENSIDE,
        }
    }
}

/// Castling rights bitmask, one flag per FEN letter.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;

/// Both rights belonging to `color`.
#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_display_uses_rank_eight_as_row_zero() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
        assert_eq!(Square::new(4, 4).to_string(), "e4");
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Square::new(7, 0);
        assert_eq!(a1.offset(-1, 1), Some(Square::new(6, 1)));
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn fen_chars_carry_color_in_case() {
        let white_queen = Piece::from_fen_char('Q').expect("Q is a piece");
        assert_eq!(white_queen, Piece::new(Color::Light, PieceKind::Queen));
        assert_eq!(white_queen.fen_char(), 'Q');
        assert_eq!(Piece::from_fen_char('n').map(Piece::fen_char), Some('n'));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
    }
}
