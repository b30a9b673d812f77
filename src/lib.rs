//! Rules engine for two-player local ("hot seat") chess.
//!
//! The crate owns the board and enforces the rules; rendering and input
//! belong to the caller. A typical turn looks like:
//!
//! 1. `legal_moves(&game, square)` for the piece the player picked,
//! 2. `apply_move(&mut game, &mv)` for the destination they chose,
//! 3. act on the returned [`GameStatus`].
//!
//! `undo_move` takes back plies one at a time and `algebraic_notation`
//! renders a move in SAN for the move list.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod short_algebraic;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::chess_types::{CastleWing, CastlingRights, Color, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use move_generation::game_status::{game_status, GameStatus};
pub use move_generation::legal_move_apply::{apply_move, undo_move};
pub use move_generation::legal_move_generator::legal_moves;
pub use moves::move_descriptions::{Move, MoveKind};
pub use utils::short_algebraic::{algebraic_notation, move_history_notation};

/// A game at the standard starting position, White to move.
#[inline]
pub fn new_game() -> GameState {
    GameState::new_game()
}
