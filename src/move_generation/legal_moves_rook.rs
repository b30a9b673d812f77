use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slides;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, rook: Piece, out: &mut Vec<Move>) {
    push_slides(game_state, rook, &ROOK_DIRECTIONS, out);
}
