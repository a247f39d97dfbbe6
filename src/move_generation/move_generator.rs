use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// A legal move together with the position it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
