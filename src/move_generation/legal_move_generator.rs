//! Legality filter.
//!
//! Reduces pseudo-legal moves to legal ones by playing each candidate on a
//! scratch copy of the position and rejecting those that leave the mover's
//! king attacked. Castling is additionally checked against the pre-move
//! board: the king may not castle out of, through, or into check.

use crate::game_state::chess_rules::castling_king_path_files;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::make_move_unchecked;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::{generate_all_pseudo_legal_moves, generate_pseudo_legal_moves};
use crate::moves::move_descriptions::Move;

/// Legal moves of the piece on `square`.
///
/// Empty when the square is empty or holds a piece of the side not to move.
/// Once the game is over the side to move has no legal moves at all, so this
/// is empty from every square.
pub fn legal_moves(game_state: &GameState, square: Square) -> Vec<Move> {
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };
    if piece.color != game_state.side_to_move() {
        return Vec::new();
    }

    let mut pseudo = Vec::with_capacity(32);
    generate_pseudo_legal_moves(game_state, piece, &mut pseudo);
    pseudo.retain(|mv| is_legal(game_state, mv));
    pseudo
}

/// Legal moves of every piece of the side to move.
pub fn all_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = generate_all_pseudo_legal_moves(game_state);
    moves.retain(|mv| is_legal(game_state, mv));
    moves
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(game_state: &GameState) -> bool {
    generate_all_pseudo_legal_moves(game_state)
        .iter()
        .any(|mv| is_legal(game_state, mv))
}

/// Decide whether a pseudo-legal move keeps the mover's king safe. The live
/// state is never touched.
pub fn is_legal(game_state: &GameState, mv: &Move) -> bool {
    let mover = mv.piece_moved.color;

    if let Some(wing) = mv.castle_wing() {
        let enemy = mover.opposite();
        let rank = mover.back_rank();
        let path_attacked = castling_king_path_files(wing)
            .iter()
            .any(|file| is_square_attacked(game_state, Square::at(rank, *file), enemy));
        if path_attacked {
            log::trace!("rejecting {mv}: castling path is attacked");
            return false;
        }
    }

    let mut scratch = game_state.scratch_copy();
    make_move_unchecked(&mut scratch, mv);
    if is_king_in_check(&scratch, mover) {
        log::trace!("rejecting {mv}: leaves the {mover} king attacked");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::MoveKind;

    fn sq(name: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn startpos_has_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game).len(), 20);
        assert_eq!(legal_moves(&game, sq("g1")).len(), 2);
    }

    #[test]
    fn empty_and_enemy_squares_yield_nothing() {
        let game = GameState::new_game();
        assert!(legal_moves(&game, sq("e4")).is_empty());
        assert!(legal_moves(&game, sq("e7")).is_empty());
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("fen");
        assert!(legal_moves(&game, sq("e2")).is_empty());
    }

    #[test]
    fn king_in_check_must_respond() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/3P4/4K3 w - - 0 1").expect("fen");
        // d2 pawn cannot block the e-file; only king steps off it.
        assert!(legal_moves(&game, sq("d2")).is_empty());
        let king_moves = legal_moves(&game, sq("e1"));
        assert!(king_moves.iter().all(|mv| mv.to.file() != 4));
        assert!(!king_moves.is_empty());
    }

    #[test]
    fn cannot_castle_through_an_attacked_square() {
        let game = GameState::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").expect("fen");
        let moves = legal_moves(&game, sq("e1"));
        assert!(moves.iter().all(|mv| mv.kind != MoveKind::CastleKingside));
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("fen");
        let moves = legal_moves(&game, sq("e1"));
        assert!(moves.iter().all(|mv| mv.castle_wing().is_none()));
    }

    #[test]
    fn queenside_castle_allows_attacked_b_file() {
        // b1 is attacked but the king never crosses it.
        let game = GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("fen");
        let moves = legal_moves(&game, sq("e1"));
        assert!(moves.iter().any(|mv| mv.kind == MoveKind::CastleQueenside));
    }

    #[test]
    fn en_passant_exposing_the_king_is_rejected() {
        // b5xc6 would empty the fifth rank between the h5 rook and the a5 king.
        let game = GameState::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 2").expect("fen");
        let moves = legal_moves(&game, sq("b5"));
        assert!(moves.iter().all(|mv| mv.kind != MoveKind::EnPassant));
        assert_eq!(moves.len(), 1);
    }
}
