use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_generator::MoveContext;

/// Row an en-passant capture by `side` lands on (rank 6 for light, rank 3
/// for dark).
#[inline]
const fn en_passant_capture_row(side: Color) -> u8 {
    match side {
        Color::Light => 2,
        Color::Dark => 5,
    }
}

/// Pushes, double pushes from the start row, diagonal captures and en
/// passant. Promotion is not encoded in the emitted moves.
pub fn generate_pawn_moves(ctx: &MoveContext, from: Square, out: &mut Vec<ChessMove>) {
    let direction = ctx.side.pawn_direction();

    // A pawn on the far edge has nowhere to go.
    let Some(one_step) = from.offset(direction, 0) else {
        return;
    };

    if ctx.is_empty(one_step) {
        out.push(ChessMove::new(from, one_step));

        if from.row == ctx.side.pawn_start_row() {
            if let Some(two_step) = one_step.offset(direction, 0) {
                if ctx.is_empty(two_step) {
                    out.push(ChessMove::new(from, two_step));
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(direction, d_col) else {
            continue;
        };

        if ctx.is_enemy(to) {
            out.push(ChessMove::new(from, to));
        } else if ctx.en_passant == Some(to) && to.row == en_passant_capture_row(ctx.side) {
            out.push(ChessMove::new(from, to));
        }
    }
}
