use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_generator::{push_ray_moves, MoveContext};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(ctx: &MoveContext, from: Square, out: &mut Vec<ChessMove>) {
    push_ray_moves(ctx, from, &ROOK_DIRECTIONS, out);
}
