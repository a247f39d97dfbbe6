//! King move generation, including castling.
//!
//! Castling safety is decided by a local re-scan of the board rather than
//! the check detector: an adjacent enemy king, or any other enemy piece whose
//! own generator lists the square as a destination.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_generator::{generate_piece_moves, push_step_moves, MoveContext};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(ctx: &MoveContext, from: Square, out: &mut Vec<ChessMove>) {
    push_step_moves(ctx, from, &KING_OFFSETS, out);
    generate_castling_moves(ctx, from, out);
}

fn generate_castling_moves(ctx: &MoveContext, king_from: Square, out: &mut Vec<ChessMove>) {
    let home_row = ctx.side.home_row();
    if king_from != Square::new(home_row, 4) {
        return;
    }

    for castle_side in [CastleSide::King, CastleSide::Queen] {
        if ctx.castling_rights & castle_side.right(ctx.side) == 0 {
            continue;
        }

        let rook_square = Square::new(home_row, castle_side.rook_from_col());
        if ctx.piece_at(rook_square) != Some(Piece::new(ctx.side, PieceKind::Rook)) {
            continue;
        }

        let (between, king_path): (&[u8], [u8; 3]) = match castle_side {
            CastleSide::King => (&[5, 6], [4, 5, 6]),
            CastleSide::Queen => (&[1, 2, 3], [4, 3, 2]),
        };

        if !between.iter().all(|&col| ctx.is_empty(Square::new(home_row, col))) {
            continue;
        }

        let enemy = ctx.side.opposite();
        if king_path
            .iter()
            .any(|&col| is_square_attacked(ctx.board, Square::new(home_row, col), enemy))
        {
            continue;
        }

        out.push(ChessMove::new(
            king_from,
            Square::new(home_row, castle_side.king_to_col()),
        ));
    }
}

/// Whether `attacker` could move onto `square`.
///
/// Non-king attackers are tested through their own generators, called with
/// no en-passant target and no castling rights. A pawn therefore counts as
/// attacking the squares it could push to, and its diagonals only when they
/// hold one of the defender's pieces.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let enemy_king = Some(Piece::new(attacker, PieceKind::King));
    if KING_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
        .any(|near| piece_at(board, near) == enemy_king)
    {
        return true;
    }

    let ctx = MoveContext::bare(board, attacker);
    let mut moves = Vec::with_capacity(28);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            let Some(piece) = piece_at(board, from) else {
                continue;
            };
            if piece.color != attacker || piece.kind == PieceKind::King {
                continue;
            }

            moves.clear();
            generate_piece_moves(&ctx, piece.kind, from, &mut moves);
            if moves.iter().any(|mv| mv.to == square) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{generate_king_moves, is_square_attacked};
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::ChessMove;
    use crate::utils::fen_parser::parse_fen;

    fn king_moves(fen: &str, from: Square) -> Vec<ChessMove> {
        let game_state = parse_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game_state.move_context(), from, &mut out);
        out
    }

    fn targets(moves: &[ChessMove]) -> Vec<String> {
        moves.iter().map(|mv| mv.to.to_string()).collect()
    }

    const E1: Square = Square::new(7, 4);
    const E8: Square = Square::new(0, 4);

    #[test]
    fn king_in_corner_has_three_targets() {
        let moves = king_moves("7k/8/8/8/8/8/8/K7 w - - 0 1", Square::new(7, 0));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn both_castles_offered_on_open_back_rank() {
        let light = targets(&king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", E1));
        assert!(light.contains(&"g1".to_owned()));
        assert!(light.contains(&"c1".to_owned()));

        let dark = targets(&king_moves("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", E8));
        assert!(dark.contains(&"g8".to_owned()));
        assert!(dark.contains(&"c8".to_owned()));
    }

    #[test]
    fn castling_needs_the_right() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", E1);
        let targets = targets(&moves);
        assert!(!targets.contains(&"g1".to_owned()));
        assert!(targets.contains(&"c1".to_owned()));
    }

    #[test]
    fn castling_needs_empty_squares_between() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1", E1);
        let targets = targets(&moves);
        assert!(!targets.contains(&"g1".to_owned()));
        assert!(!targets.contains(&"c1".to_owned()));
    }

    #[test]
    fn castling_needs_the_rook_on_its_corner() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/4K2R w KQkq - 0 1", E1);
        let targets = targets(&moves);
        assert!(targets.contains(&"g1".to_owned()));
        assert!(!targets.contains(&"c1".to_owned()));
    }

    #[test]
    fn castling_blocked_through_attacked_square() {
        // Dark rook on f8 covers f1.
        let moves = king_moves("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", E1);
        let targets = targets(&moves);
        assert!(!targets.contains(&"g1".to_owned()));
        assert!(targets.contains(&"c1".to_owned()));
    }

    #[test]
    fn castling_blocked_out_of_check() {
        let moves = king_moves("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", E1);
        let targets = targets(&moves);
        assert!(!targets.contains(&"g1".to_owned()));
        assert!(!targets.contains(&"c1".to_owned()));
    }

    #[test]
    fn square_attack_scan_sees_sliders_knights_and_kings() {
        let game_state = parse_fen("4k3/8/8/8/8/5n2/8/R3K3 w - - 0 1").expect("FEN should parse");
        let board = &game_state.board;

        assert!(is_square_attacked(board, Square::new(7, 4), Color::Dark));
        assert!(is_square_attacked(board, Square::new(6, 7), Color::Dark));
        assert!(!is_square_attacked(board, Square::new(7, 0), Color::Dark));
        assert!(is_square_attacked(board, Square::new(1, 4), Color::Dark));
        assert!(is_square_attacked(board, Square::new(0, 0), Color::Light));
    }
}
