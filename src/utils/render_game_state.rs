//! Terminal-oriented Unicode board renderer.

use crate::game_state::{chess_types::*, game_state::GameState};

const FILE_LABELS: &str = "  a b c d e f g h\n";

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 is printed first; each rank line is framed by its number on both
/// sides and empty squares show as `.`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::with_capacity(256);

    out.push_str(FILE_LABELS);

    for (row, rank) in game_state.board.iter().enumerate() {
        let rank_label = char::from(b'8' - row as u8);
        out.push(rank_label);
        out.push(' ');

        for square in rank {
            out.push(square.map_or('.', piece_to_unicode));
            out.push(' ');
        }

        out.push(rank_label);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
