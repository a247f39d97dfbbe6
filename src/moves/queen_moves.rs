use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_generator::MoveContext;
use crate::moves::rook_moves::generate_rook_moves;

/// Bishop rays first, then rook rays.
pub fn generate_queen_moves(ctx: &MoveContext, from: Square, out: &mut Vec<ChessMove>) {
    generate_bishop_moves(ctx, from, out);
    generate_rook_moves(ctx, from, out);
}
