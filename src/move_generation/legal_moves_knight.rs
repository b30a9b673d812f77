use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, knight: Piece, out: &mut Vec<Move>) {
    for to in knight_targets(knight.square) {
        push_step(game_state, knight, to, out);
    }
}
