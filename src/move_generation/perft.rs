use crate::game_state::{chess_types::PieceKind, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub checks: usize,
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, game_state, &mv, depth, 1, &mut total);
    }

    total
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    parent: &GameState,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        tally_leaf(parent, mv, counts);
        return;
    }

    for child in generator.generate_legal_moves(&mv.game_after_move) {
        perft_recurse(
            generator,
            &mv.game_after_move,
            &child,
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}

fn tally_leaf(parent: &GameState, mv: &GeneratedMove, counts: &mut PerftCounts) {
    counts.nodes += 1;

    let chess_move = mv.chess_move;
    let moved = parent.piece_at(chess_move.from).map(|piece| piece.kind);
    let is_en_passant =
        moved == Some(PieceKind::Pawn) && parent.en_passant_square == Some(chess_move.to);

    if parent.piece_at(chess_move.to).is_some() || is_en_passant {
        counts.captures += 1;
    }
    if is_en_passant {
        counts.en_passant += 1;
    }
    if moved == Some(PieceKind::King) && chess_move.col_delta() == 2 {
        counts.castles += 1;
    }

    let after = &mv.game_after_move;
    if is_king_in_check(&after.board, after.side_to_move) {
        counts.checks += 1;
    }
}
