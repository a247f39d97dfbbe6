//! Per-piece generator dispatch and the helpers the generators share.
//!
//! Every generator has the same shape: read a `MoveContext`, look at one
//! occupied square, append pseudo-legal moves to `out` in generation order.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Inputs shared by all piece generators.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub board: &'a Board,
    /// Side whose moves are generated.
    pub side: Color,
    pub en_passant: Option<Square>,
    pub castling_rights: CastlingRights,
}

impl<'a> MoveContext<'a> {
    /// Context for scanning what `side` could reach, with no en-passant
    /// target and no castling rights.
    #[inline]
    pub fn bare(board: &'a Board, side: Color) -> Self {
        Self {
            board,
            side,
            en_passant: None,
            castling_rights: 0,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        piece_at(self.board, square)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn is_enemy(&self, square: Square) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.color != self.side)
    }
}

/// Pseudo-legal moves of a `kind` piece standing on `from`.
pub fn generate_piece_moves(ctx: &MoveContext, kind: PieceKind, from: Square, out: &mut Vec<ChessMove>) {
    match kind {
        PieceKind::Pawn => generate_pawn_moves(ctx, from, out),
        PieceKind::Knight => generate_knight_moves(ctx, from, out),
        PieceKind::Bishop => generate_bishop_moves(ctx, from, out),
        PieceKind::Rook => generate_rook_moves(ctx, from, out),
        PieceKind::Queen => generate_queen_moves(ctx, from, out),
        PieceKind::King => generate_king_moves(ctx, from, out),
    }
}

#[inline]
pub fn piece_moves(ctx: &MoveContext, kind: PieceKind, from: Square) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(28);
    generate_piece_moves(ctx, kind, from, &mut out);
    out
}

/// Push single-step moves for each offset landing on an empty or enemy square.
pub(crate) fn push_step_moves(ctx: &MoveContext, from: Square, offsets: &[(i8, i8)], out: &mut Vec<ChessMove>) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if ctx.is_empty(to) || ctx.is_enemy(to) {
            out.push(ChessMove::new(from, to));
        }
    }
}

/// Push moves along each ray until the edge, an own piece (excluded) or an
/// enemy piece (included).
pub(crate) fn push_ray_moves(ctx: &MoveContext, from: Square, directions: &[(i8, i8)], out: &mut Vec<ChessMove>) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);

        while let Some(to) = cursor {
            match ctx.piece_at(to) {
                None => out.push(ChessMove::new(from, to)),
                Some(piece) if piece.color != ctx.side => {
                    out.push(ChessMove::new(from, to));
                    break;
                }
                Some(_) => break,
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}
