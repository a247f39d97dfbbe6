//! String-in, string-out entry points for an automated caller.
//!
//! Each action decodes a FEN, does its work on an owned `GameState` and
//! returns text. A malformed FEN is the only `Err`; a rejected move comes
//! back as `Ok` carrying the diagnostic so the caller can retry.

use tracing::info;

use crate::errors::NotationError;
use crate::game_state::chess_rules::NO_LEGAL_MOVES;
use crate::move_generation::legal_move_apply::apply_move_text;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::join_moves;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

pub fn render_board(fen: &str) -> Result<String, NotationError> {
    let game_state = parse_fen(fen)?;
    Ok(render_game_state(&game_state))
}

/// Apply `mv` and return the new FEN, or the rejection diagnostic.
///
/// `reasoning` is logged when non-empty and otherwise ignored.
pub fn apply_move(fen: &str, reasoning: &str, mv: &str) -> Result<String, NotationError> {
    let game_state = parse_fen(fen)?;

    log_reasoning(mv, reasoning);

    Ok(match apply_move_text(&game_state, mv) {
        Ok(next) => next.get_fen(),
        Err(rejection) => rejection.to_string(),
    })
}

/// Emit non-empty reasoning as an `info` event. Returns whether it logged.
fn log_reasoning(mv: &str, reasoning: &str) -> bool {
    if reasoning.is_empty() {
        return false;
    }
    info!(mv, reasoning, "move reasoning");
    true
}

pub fn generate_legal_moves(fen: &str) -> Result<String, NotationError> {
    let game_state = parse_fen(fen)?;
    let moves = legal_moves(&game_state);

    if moves.is_empty() {
        return Ok(NO_LEGAL_MOVES.to_owned());
    }
    Ok(join_moves(&moves))
}
