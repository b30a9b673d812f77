use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record pushed by `apply_move` and popped by `undo_move`.
///
/// The moved piece's prior state and any captured piece (with its square)
/// travel inside `mv`; everything else the move overwrites is kept here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// The castling rook as it stood before the castle.
    pub prev_rook: Option<Piece>,

    pub prev_side_to_move: Color,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
