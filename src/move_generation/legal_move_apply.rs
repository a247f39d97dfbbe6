//! Move application.
//!
//! Validates a move against the moving piece's generated moves, then builds
//! the successor position on a clone. The input state is never touched, so
//! the legal-move filter can call this speculatively for every candidate.

use tracing::{debug, warn};

use crate::errors::MoveRejection;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{ChessMove, ParsedMove};
use crate::moves::move_generator::piece_moves;
use crate::utils::san::resolve_move;

/// Resolve caller text and apply it. Rejections echo `text`.
pub fn apply_move_text(game_state: &GameState, text: &str) -> Result<GameState, MoveRejection> {
    let parsed = resolve_move(game_state, text).ok_or_else(|| MoveRejection::Unresolved {
        text: text.to_owned(),
    })?;
    apply_parsed_move(game_state, parsed, text)
}

/// Apply an already-resolved coordinate move.
pub fn apply_move(game_state: &GameState, chess_move: ChessMove) -> Result<GameState, MoveRejection> {
    apply_parsed_move(game_state, ParsedMove::plain(chess_move), &chess_move.to_string())
}

pub fn apply_parsed_move(
    game_state: &GameState,
    parsed: ParsedMove,
    text: &str,
) -> Result<GameState, MoveRejection> {
    let mv = parsed.chess_move;
    let moving_color = game_state.side_to_move;

    let piece = game_state.piece_at(mv.from).ok_or_else(|| MoveRejection::EmptyStart {
        text: text.to_owned(),
    })?;

    if piece.color != moving_color {
        return Err(MoveRejection::OpponentPiece {
            text: text.to_owned(),
        });
    }

    let candidates = piece_moves(&game_state.move_context(), piece.kind, mv.from);
    if !candidates.contains(&mv) {
        return Err(MoveRejection::NotInPieceMoves {
            text: text.to_owned(),
            candidates,
        });
    }

    // TODO: place the promoted piece once callers settle on how
    // under-promotion and missing suffixes should behave.
    if let Some(promotion) = parsed.promotion {
        warn!(%mv, ?promotion, "promotion requested but not applied; the pawn stays a pawn");
    }

    let captured = game_state.piece_at(mv.to);
    let mut next = game_state.clone();

    if piece.kind == PieceKind::King && mv.col_delta() == 2 {
        let castle_side = match parsed.castle {
            Some(castle_side) => {
                debug!(%mv, ?castle_side, "castling resolved from text");
                castle_side
            }
            None if mv.to.col > mv.from.col => CastleSide::King,
            None => CastleSide::Queen,
        };
        castle(&mut next.board, moving_color, castle_side);
        next.castling_rights &= !castling_rights_of(moving_color);
    } else {
        set_piece(&mut next.board, mv.from, None);
        set_piece(&mut next.board, mv.to, Some(piece));

        // En passant: the captured pawn sits one row behind the target.
        if piece.kind == PieceKind::Pawn && game_state.en_passant_square == Some(mv.to) {
            if let Some(captured_pawn) = mv.to.offset(-moving_color.pawn_direction(), 0) {
                set_piece(&mut next.board, captured_pawn, None);
            }
        }

        update_castling_rights(&mut next, piece, mv.from);
    }

    next.en_passant_square = if piece.kind == PieceKind::Pawn && mv.row_delta() == 2 {
        Some(Square::new((mv.from.row + mv.to.row) / 2, mv.to.col))
    } else {
        None
    };

    if piece.kind == PieceKind::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }
    next.side_to_move = moving_color.opposite();

    Ok(next)
}

fn castle(board: &mut Board, color: Color, castle_side: CastleSide) {
    let row = color.home_row();

    set_piece(board, Square::new(row, 4), None);
    set_piece(board, Square::new(row, castle_side.rook_from_col()), None);
    set_piece(
        board,
        Square::new(row, castle_side.king_to_col()),
        Some(Piece::new(color, PieceKind::King)),
    );
    set_piece(
        board,
        Square::new(row, castle_side.rook_to_col()),
        Some(Piece::new(color, PieceKind::Rook)),
    );
}

/// A king move drops both rights of its side; a rook leaving its home
/// corner drops that corner's right.
fn update_castling_rights(game_state: &mut GameState, moved: Piece, from: Square) {
    match moved.kind {
        PieceKind::King => game_state.castling_rights &= !castling_rights_of(moved.color),
        PieceKind::Rook if from.row == moved.color.home_row() => {
            for castle_side in [CastleSide::King, CastleSide::Queen] {
                if from.col == castle_side.rook_from_col() {
                    game_state.castling_rights &= !castle_side.right(moved.color);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_move, apply_move_text, apply_parsed_move};
    use crate::errors::MoveRejection;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::ChessMove;
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::san::resolve_move;

    fn apply_fen(fen: &str, text: &str) -> Result<String, MoveRejection> {
        let game_state = parse_fen(fen).expect("FEN should parse");
        apply_move_text(&game_state, text).map(|next| next.get_fen())
    }

    fn play(fen: &str, moves: &[&str]) -> String {
        moves.iter().fold(fen.to_owned(), |fen, text| {
            apply_fen(&fen, text).unwrap_or_else(|err| panic!("{text} should apply: {err}"))
        })
    }

    #[test]
    fn double_pawn_push_sets_en_passant_target() {
        let next = apply_fen(STARTING_POSITION_FEN, "e2e4").expect("e2e4 should apply");
        assert_eq!(next, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }

    #[test]
    fn knight_move_ticks_halfmove_clock() {
        let next = apply_fen(STARTING_POSITION_FEN, "g1f3").expect("g1f3 should apply");
        assert_eq!(next, "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1");
    }

    #[test]
    fn pawn_capture_resets_clock_and_advances_fullmove() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let next = play(fen, &["d7d5", "e4d5"]);
        assert_eq!(next, "rnbqkbnr/ppp1pppp/8/3P4/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2");
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let next = play(STARTING_POSITION_FEN, &["e2e4", "f7f5", "e4f5", "e7e5"]);
        assert_eq!(next, "rnbqkbnr/pppp2pp/8/4pP2/8/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 3");

        let next = play(&next, &["f5e6"]);
        assert_eq!(next, "rnbqkbnr/pppp2pp/4P3/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3");
    }

    #[test]
    fn dark_en_passant_capture() {
        let next = play(STARTING_POSITION_FEN, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4"]);
        assert!(next.ends_with("b KQkq e3 0 3"), "{next}");

        let next = play(&next, &["d4e3"]);
        assert_eq!(next, "rnbqkbnr/ppp1pppp/8/8/P7/4p3/1PPP1PPP/RNBQKBNR w KQkq - 0 4");
    }

    #[test]
    fn light_castles_both_ways() {
        let next = apply_fen("rnbq1rk1/ppppbppp/5n2/4p3/4P3/5N2/PPPPBPPP/RNBQK2R w KQ - 0 1", "e1g1")
            .expect("kingside castle should apply");
        assert_eq!(next, "rnbq1rk1/ppppbppp/5n2/4p3/4P3/5N2/PPPPBPPP/RNBQ1RK1 b - - 1 1");

        let next = apply_fen("r3k2r/pppqppbp/2np1np1/4P3/2P1P3/2N2N2/PPQB1PPP/R3K2R w KQkq - 0 1", "e1c1")
            .expect("queenside castle should apply");
        assert_eq!(next, "r3k2r/pppqppbp/2np1np1/4P3/2P1P3/2N2N2/PPQB1PPP/2KR3R b kq - 1 1");
    }

    #[test]
    fn dark_castles_both_ways() {
        let next = apply_fen("rnbqk2r/ppppbppp/5n2/4p3/4P3/5N2/PPPPBPPP/RNBQ1RK1 b kq - 1 1", "e8g8")
            .expect("kingside castle should apply");
        assert_eq!(next, "rnbq1rk1/ppppbppp/5n2/4p3/4P3/5N2/PPPPBPPP/RNBQ1RK1 w - - 2 2");

        let next = apply_fen("r3k2r/pppqppbp/2np1np1/4P3/2P1P3/2N2N2/PPQB1PPP/R3K2R b KQkq - 6 5", "O-O-O")
            .expect("queenside castle should apply");
        assert_eq!(next, "2kr3r/pppqppbp/2np1np1/4P3/2P1P3/2N2N2/PPQB1PPP/R3K2R w KQ - 7 6");
    }

    #[test]
    fn castling_text_and_coordinates_agree() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let game_state = parse_fen(fen).expect("FEN should parse");

        let parsed = resolve_move(&game_state, "O-O").expect("O-O should resolve");
        assert_eq!(parsed.castle, Some(CastleSide::King));
        let by_text = apply_parsed_move(&game_state, parsed, "O-O").expect("O-O should apply");

        let e1g1 = ChessMove::new(Square::new(7, 4), Square::new(7, 6));
        let by_coordinates = apply_move(&game_state, e1g1).expect("e1g1 should apply");

        assert_eq!(by_text, by_coordinates);
        assert_eq!(by_text.get_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");

        let parsed = resolve_move(&game_state, "O-O-O").expect("O-O-O should resolve");
        assert_eq!(parsed.castle, Some(CastleSide::Queen));
        let long = apply_parsed_move(&game_state, parsed, "O-O-O").expect("O-O-O should apply");
        assert_eq!(long.get_fen(), "r3k2r/8/8/8/8/8/8/2KR3R b kq - 1 1");
    }

    #[test]
    fn rook_and_king_moves_drop_rights() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(apply_fen(fen, "h1h2").expect("rook move"), "r3k2r/8/8/8/8/8/7R/R3K3 b Qkq - 1 1");
        assert_eq!(apply_fen(fen, "a1a2").expect("rook move"), "r3k2r/8/8/8/8/8/R7/4K2R b Kkq - 1 1");
        assert_eq!(apply_fen(fen, "e1d1").expect("king move"), "r3k2r/8/8/8/8/8/8/R2K3R b kq - 1 1");

        let fen = "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1";
        assert_eq!(apply_fen(fen, "a8a7").expect("rook move"), "4k2r/r7/8/8/8/8/8/R3K2R w KQk - 1 2");
    }

    #[test]
    fn illegal_push_lists_the_pieces_moves() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1";
        let err = apply_fen(fen, "e4e6").expect_err("three-square advance is illegal");
        assert_eq!(err.to_string(), "Invalid move: e4e6, not in pieces moves: e4e5");

        let err = apply_fen(STARTING_POSITION_FEN, "e2e5").expect_err("three-square advance");
        let text = err.to_string();
        assert!(text.contains("Invalid move") && text.contains("e2e5"), "{text}");
    }

    #[test]
    fn unresolved_and_empty_start_diagnostics() {
        let err = apply_fen(STARTING_POSITION_FEN, "Bc3").expect_err("no bishop reaches c3");
        assert_eq!(err.to_string(), "Invalid move: Bc3");

        let err = apply_fen(STARTING_POSITION_FEN, "e4e5").expect_err("e4 is empty");
        assert_eq!(err.to_string(), "Invalid move: e4e5, start position is empty");
    }

    #[test]
    fn moving_the_opponents_piece_is_rejected() {
        let err = apply_fen(STARTING_POSITION_FEN, "b8c6").expect_err("dark knight on light's turn");
        assert_eq!(err, MoveRejection::OpponentPiece { text: "b8c6".to_owned() });
    }

    #[test]
    fn input_state_is_left_untouched() {
        let game_state = GameState::new_game();
        let before = game_state.clone();

        let e2e4 = ChessMove::new(Square::new(6, 4), Square::new(4, 4));
        let next = apply_move(&game_state, e2e4).expect("e2e4 should apply");

        assert_eq!(game_state, before);
        assert_ne!(next, before);
        assert_eq!(game_state.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn promotion_is_parsed_but_the_pawn_stays() {
        let next = apply_fen("8/4P3/8/8/8/8/8/k3K3 w - - 0 1", "e8=Q").expect("push should apply");
        assert_eq!(next, "4P3/8/8/8/8/8/8/k3K3 b - - 0 1");
    }
}
