use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = generate_en_passant_field(game_state.en_passant_square);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let ranks: Vec<String> = board.iter().map(collapse_rank).collect();
    ranks.join("/")
}

fn collapse_rank(rank: &[Option<Piece>; 8]) -> String {
    let mut out = String::new();
    let mut empty_count = 0u8;

    for square in rank {
        match square {
            Some(piece) => {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            }
            None => empty_count += 1,
        }
    }

    if empty_count > 0 {
        out.push(char::from(b'0' + empty_count));
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_LIGHT_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_LIGHT_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_DARK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_DARK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    square.map_or_else(|| "-".to_owned(), square_to_algebraic)
}
