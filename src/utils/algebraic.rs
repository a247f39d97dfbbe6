//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the grid
//! squares used by the board, where row 0 is rank 8.

use crate::errors::NotationError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Column index of a file letter.
#[inline]
pub fn file_to_col(file: char) -> Option<u8> {
    ('a'..='h').contains(&file).then(|| file as u8 - b'a')
}

/// Row index of a rank digit.
#[inline]
pub fn rank_to_row(rank: char) -> Option<u8> {
    ('1'..='8').contains(&rank).then(|| b'8' - rank as u8)
}
