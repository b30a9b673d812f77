//! Building blocks shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::rook_moves::trace_ray;

#[inline]
pub fn build_move(piece: Piece, to: Square, captured_piece: Option<Piece>, kind: MoveKind) -> Move {
    Move {
        from: piece.square,
        to,
        piece_moved: piece,
        captured_piece,
        kind,
    }
}

/// The piece on `square` if it belongs to the opponent of `color`.
#[inline]
pub fn enemy_piece_on(game_state: &GameState, color: Color, square: Square) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|occupant| occupant.color != color)
}

/// Push a single step onto `to` when it is empty or enemy-held.
pub fn push_step(game_state: &GameState, piece: Piece, to: Square, out: &mut Vec<Move>) {
    match game_state.piece_at(to) {
        None => out.push(build_move(piece, to, None, MoveKind::Normal)),
        Some(occupant) if occupant.color != piece.color => {
            out.push(build_move(piece, to, Some(occupant), MoveKind::Normal))
        }
        Some(_) => {}
    }
}

/// Slide along each direction until blocked. An enemy blocker is captured and
/// ends the ray; an own blocker ends it without a move.
pub fn push_slides(
    game_state: &GameState,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in directions {
        for to in trace_ray(piece.square, d_rank, d_file) {
            match game_state.piece_at(to) {
                None => out.push(build_move(piece, to, None, MoveKind::Normal)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(build_move(piece, to, Some(occupant), MoveKind::Normal));
                    }
                    break;
                }
            }
        }
    }
}
