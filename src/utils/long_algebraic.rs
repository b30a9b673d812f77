//! Long algebraic (`e2e4`, `e7e8q`) input, resolved against the legal moves
//! of a position so the caller gets back a fully described [`Move`].

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_long_algebraic(game_state: &GameState, long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(ChessErrors::InvalidAlgebraicChar(ch)),
        },
    };

    legal_moves(game_state, from)
        .into_iter()
        .find(|mv| mv.to == to && mv.promotion() == promotion)
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()))
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}
