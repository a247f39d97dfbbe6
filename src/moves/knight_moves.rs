use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_generator::{push_step_moves, MoveContext};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn generate_knight_moves(ctx: &MoveContext, from: Square, out: &mut Vec<ChessMove>) {
    push_step_moves(ctx, from, &KNIGHT_OFFSETS, out);
}
