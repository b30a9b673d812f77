use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slides;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, bishop: Piece, out: &mut Vec<Move>) {
    push_slides(game_state, bishop, &BISHOP_DIRECTIONS, out);
}
