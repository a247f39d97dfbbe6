//! Check detection from the king's point of view.
//!
//! Looks outward from the king square for each attacker class instead of
//! generating enemy moves. A board without a king of the given color is
//! reported as not in check.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// First square, in row-major order, holding the king of `color`.
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let king = Some(Piece::new(color, PieceKind::King));
    (0..8u8)
        .flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
        .find(|&square| piece_at(board, square) == king)
}

pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    let enemy = color.opposite();

    is_attacked_by_pawn(board, king_sq, color)
        || is_attacked_by_any(board, king_sq, &KNIGHT_OFFSETS, Piece::new(enemy, PieceKind::Knight))
        || is_attacked_by_slider(board, king_sq, &BISHOP_DIRECTIONS, enemy, PieceKind::Bishop)
        || is_attacked_by_slider(board, king_sq, &ROOK_DIRECTIONS, enemy, PieceKind::Rook)
        || is_attacked_by_any(board, king_sq, &KING_OFFSETS, Piece::new(enemy, PieceKind::King))
}

/// Enemy pawns sit one row ahead of the king, in the king side's push
/// direction.
fn is_attacked_by_pawn(board: &Board, king_sq: Square, color: Color) -> bool {
    let enemy_pawn = Some(Piece::new(color.opposite(), PieceKind::Pawn));
    let direction = color.pawn_direction();

    [-1i8, 1i8]
        .iter()
        .filter_map(|&d_col| king_sq.offset(direction, d_col))
        .any(|square| piece_at(board, square) == enemy_pawn)
}

fn is_attacked_by_any(board: &Board, king_sq: Square, offsets: &[(i8, i8)], attacker: Piece) -> bool {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| king_sq.offset(d_row, d_col))
        .any(|square| piece_at(board, square) == Some(attacker))
}

/// Walk each ray to the first occupied square; it checks if it is an enemy
/// `slider` or an enemy queen.
fn is_attacked_by_slider(
    board: &Board,
    king_sq: Square,
    directions: &[(i8, i8)],
    enemy: Color,
    slider: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut cursor = king_sq.offset(d_row, d_col);

        while let Some(square) = cursor {
            if let Some(piece) = piece_at(board, square) {
                if piece.color == enemy && (piece.kind == slider || piece.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cursor = square.offset(d_row, d_col);
        }
    }

    false
}
