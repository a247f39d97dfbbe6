//! Bishop move generation: diagonal rays from the source square.

use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_generator::{push_ray_moves, MoveContext};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(ctx: &MoveContext, from: Square, out: &mut Vec<ChessMove>) {
    push_ray_moves(ctx, from, &BISHOP_DIRECTIONS, out);
}
