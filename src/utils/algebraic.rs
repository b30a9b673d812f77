//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and [`Square`]
//! values; reused by FEN, long algebraic, and short algebraic notation.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if !square.is_ascii() || bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(char::from(file)));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(char::from(rank)));
    }

    Square::new(rank - b'1', file - b'a')
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + square.file())
}

#[inline]
pub fn rank_char(square: Square) -> char {
    char::from(b'1' + square.rank())
}
