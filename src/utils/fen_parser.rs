//! FEN-to-GameState parser.
//!
//! Builds a fully-populated board grid, rights, en-passant target and clocks
//! from a Forsyth-Edwards Notation string.

use crate::errors::NotationError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, NotationError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(NotationError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(NotationError::MissingField("side-to-move"))?;
    let castling_part = parts.next().ok_or(NotationError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(NotationError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next().ok_or(NotationError::MissingField("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or(NotationError::MissingField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(NotationError::ExtraFields);
    }

    Ok(GameState {
        board: parse_board(board_part)?,
        side_to_move: parse_side_to_move(side_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant_square: parse_en_passant_square(en_passant_part)?,
        halfmove_clock: parse_counter("halfmove clock", halfmove_part)?,
        fullmove_number: parse_counter("fullmove number", fullmove_part)?,
    })
}

fn parse_board(board_part: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::RankCount(ranks.len()));
    }

    let mut board = EMPTY_BOARD;

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(NotationError::InvalidPieceChar(ch));
                }
                col += empty_count as usize;
                if col > 8 {
                    return Err(NotationError::RankWidth((*rank_str).to_owned()));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(NotationError::InvalidPieceChar(ch))?;

            if col >= 8 {
                return Err(NotationError::RankWidth((*rank_str).to_owned()));
            }

            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(NotationError::RankWidth((*rank_str).to_owned()));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, NotationError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(NotationError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, NotationError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(NotationError::InvalidCastlingChar(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, NotationError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part).map(Some)
}

fn parse_counter(field: &'static str, value: &str) -> Result<u32, NotationError> {
    value.parse::<u32>().map_err(|_| NotationError::InvalidCounter {
        field,
        value: value.to_owned(),
    })
}
