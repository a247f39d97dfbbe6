//! Full legal move generation pipeline.
//!
//! Scans the mover's pieces, applies every pseudo-legal candidate on a copy
//! of the position and keeps the ones that leave the mover's king safe.

use tracing::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_generator::generate_piece_moves;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        let pseudo = pseudo_legal_moves(game_state);
        let mut legal = Vec::with_capacity(pseudo.len());

        for mv in pseudo {
            let next = match apply_move(game_state, mv) {
                Ok(next) => next,
                Err(err) => {
                    debug!(%mv, %err, "speculative apply rejected");
                    continue;
                }
            };

            // Illegal if own king is in check after move.
            if is_king_in_check(&next.board, game_state.side_to_move) {
                continue;
            }

            legal.push(GeneratedMove {
                chess_move: mv,
                game_after_move: next,
            });
        }

        legal
    }
}

/// Moves of every piece of the side to move, scanned rank 8 to rank 1 and
/// file a to file h, each piece's moves in generator order.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let ctx = game_state.move_context();
    let mut moves = Vec::with_capacity(64);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            match game_state.piece_at(from) {
                Some(piece) if piece.color == game_state.side_to_move => {
                    generate_piece_moves(&ctx, piece.kind, from, &mut moves);
                }
                _ => {}
            }
        }
    }

    moves
}

pub fn legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    LegalMoveGenerator
        .generate_legal_moves(game_state)
        .into_iter()
        .map(|generated| generated.chess_move)
        .collect()
}
