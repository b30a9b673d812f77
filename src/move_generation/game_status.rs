//! Game-status evaluation derived from the legal-move set.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Rules-derived state of the side to move. Forfeits and other
/// collaborator-level outcomes are not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a way out.
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    let side = game_state.side_to_move();
    let in_check = is_king_in_check(game_state, side);

    match (has_legal_move(game_state), in_check) {
        (false, true) => GameStatus::Checkmate {
            winner: side.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::InProgress,
    }
}
