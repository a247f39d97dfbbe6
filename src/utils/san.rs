//! Move-text resolution.
//!
//! Turns caller text into a concrete from/to pair for the side to move.
//! Accepted forms:
//!
//! - coordinates, `e2e4`, optionally with a promotion letter (`e7e8q`);
//! - castling, `O-O` / `O-O-O` (zeros accepted);
//! - standard algebraic, `e4`, `Nf3`, `exd5`, `Qd1h5`, `Qd1-h5`, `Rae1`,
//!   `N1f3`, `e8=Q`, with an optional trailing `+` or `#`.
//!
//! Resolution does not decide legality. It finds a candidate move; the
//! applier re-checks it against the piece's generated moves.

use tracing::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{ChessMove, ParsedMove};
use crate::moves::move_generator::piece_moves;
use crate::utils::algebraic::{file_to_col, rank_to_row};

/// Resolve `text` against `game_state`, or `None` if nothing matches.
pub fn resolve_move(game_state: &GameState, text: &str) -> Option<ParsedMove> {
    let text = text.trim().trim_end_matches(['+', '#']);
    if text.is_empty() {
        return None;
    }

    if let Some(castle) = parse_castling(text) {
        let home_row = game_state.side_to_move.home_row();
        return Some(ParsedMove {
            chess_move: ChessMove::new(
                Square::new(home_row, 4),
                Square::new(home_row, castle.king_to_col()),
            ),
            promotion: None,
            castle: Some(castle),
        });
    }

    if let Some(parsed) = parse_coordinate_move(text) {
        return Some(parsed);
    }

    let resolved = resolve_san(game_state, text);
    if resolved.is_none() {
        debug!(text, "no candidate move matches");
    }
    resolved
}

fn parse_castling(text: &str) -> Option<CastleSide> {
    match text {
        "O-O" | "0-0" => Some(CastleSide::King),
        "O-O-O" | "0-0-0" => Some(CastleSide::Queen),
        _ => None,
    }
}

/// `[a-h][1-8][a-h][1-8]` with an optional promotion letter.
fn parse_coordinate_move(text: &str) -> Option<ParsedMove> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 4 && chars.len() != 5 {
        return None;
    }

    let from = Square::new(rank_to_row(chars[1])?, file_to_col(chars[0])?);
    let to = Square::new(rank_to_row(chars[3])?, file_to_col(chars[2])?);

    let promotion = match chars.get(4) {
        Some(&ch) => Some(promotion_from_char(ch)?),
        None => None,
    };

    Some(ParsedMove {
        chess_move: ChessMove::new(from, to),
        promotion,
        castle: None,
    })
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    match PieceKind::from_fen_char(ch)? {
        PieceKind::Pawn | PieceKind::King => None,
        kind => Some(kind),
    }
}

fn piece_from_san_letter(ch: char) -> Option<PieceKind> {
    match ch {
        'N' => Some(PieceKind::Knight),
        'B' => Some(PieceKind::Bishop),
        'R' => Some(PieceKind::Rook),
        'Q' => Some(PieceKind::Queen),
        'K' => Some(PieceKind::King),
        _ => None,
    }
}

fn resolve_san(game_state: &GameState, text: &str) -> Option<ParsedMove> {
    let mut body = text;

    let kind = match body.chars().next().and_then(piece_from_san_letter) {
        Some(kind) => {
            body = &body[1..];
            kind
        }
        None => PieceKind::Pawn,
    };

    let promotion = match body.split_once('=') {
        Some((head, suffix)) => {
            body = head;
            let mut suffix_chars = suffix.chars();
            let promo = promotion_from_char(suffix_chars.next()?)?;
            if suffix_chars.next().is_some() {
                return None;
            }
            Some(promo)
        }
        None => None,
    };

    // Capture and separator markers carry no information for the lookup.
    let chars: Vec<char> = body.chars().filter(|&ch| ch != 'x' && ch != '-').collect();
    if chars.len() < 2 {
        return None;
    }

    let (prefix, destination) = chars.split_at(chars.len() - 2);
    let to = Square::new(rank_to_row(destination[1])?, file_to_col(destination[0])?);

    let (from_col, from_row) = match prefix {
        [] => (None, None),
        [only] if only.is_ascii_digit() => (None, Some(rank_to_row(*only)?)),
        [only] => (Some(file_to_col(*only)?), None),
        [file, rank] => (Some(file_to_col(*file)?), Some(rank_to_row(*rank)?)),
        _ => return None,
    };

    let side = game_state.side_to_move;
    let wanted = Piece::new(side, kind);
    let ctx = game_state.move_context();

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            if game_state.piece_at(from) != Some(wanted) {
                continue;
            }
            if from_col.is_some_and(|c| c != col) || from_row.is_some_and(|r| r != row) {
                continue;
            }

            let found = piece_moves(&ctx, kind, from).into_iter().find(|mv| {
                mv.to == to
                    && game_state
                        .piece_at(to)
                        .map_or(true, |occupant| occupant.color != side)
            });

            if let Some(chess_move) = found {
                return Some(ParsedMove {
                    chess_move,
                    promotion,
                    castle: None,
                });
            }
        }
    }

    None
}
