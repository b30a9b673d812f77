//! Attack detection.
//!
//! Answers whether a square is attacked by a color without ever generating
//! king or castling moves, so check detection and castling safety can use it
//! without recursing back into move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_squares;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::{trace_ray, ROOK_DIRECTIONS};

/// A missing king (only possible on scratch boards) is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    game_state
        .pieces_of_color(attacker_color)
        .any(|attacker| piece_attacks_square(game_state, attacker, square))
}

fn piece_attacks_square(game_state: &GameState, attacker: Piece, target: Square) -> bool {
    match attacker.kind {
        PieceKind::Pawn => pawn_attack_squares(attacker.color, attacker.square).any(|sq| sq == target),
        PieceKind::Knight => knight_targets(attacker.square).any(|sq| sq == target),
        PieceKind::King => king_targets(attacker.square).any(|sq| sq == target),
        PieceKind::Bishop => slider_reaches(game_state, attacker.square, &BISHOP_DIRECTIONS, target),
        PieceKind::Rook => slider_reaches(game_state, attacker.square, &ROOK_DIRECTIONS, target),
        PieceKind::Queen => slider_reaches(game_state, attacker.square, &QUEEN_DIRECTIONS, target),
    }
}

fn slider_reaches(game_state: &GameState, from: Square, directions: &[(i8, i8)], target: Square) -> bool {
    directions.iter().any(|&(d_rank, d_file)| {
        for sq in trace_ray(from, d_rank, d_file) {
            if sq == target {
                return true;
            }
            if !game_state.is_empty(sq) {
                return false;
            }
        }
        false
    })
}
