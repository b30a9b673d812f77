use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slides;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, queen: Piece, out: &mut Vec<Move>) {
    push_slides(game_state, queen, &QUEEN_DIRECTIONS, out);
}
