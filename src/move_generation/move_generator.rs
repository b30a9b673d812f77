//! Pseudo-legal move generation, dispatched on piece kind.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Append every pseudo-legal move of `piece`. Own-king safety is ignored.
pub fn generate_pseudo_legal_moves(game_state: &GameState, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, piece, out),
        PieceKind::King => generate_king_moves(game_state, piece, out),
    }
}

/// Pseudo-legal moves for every piece of the side to move.
pub fn generate_all_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    for piece in game_state.pieces_of_color(game_state.side_to_move()) {
        generate_pseudo_legal_moves(game_state, piece, &mut pseudo);
    }
    pseudo
}
