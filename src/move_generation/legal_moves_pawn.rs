use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{build_move, enemy_piece_on};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::pawn_moves::pawn_attack_squares;

pub fn generate_pawn_moves(game_state: &GameState, pawn: Piece, out: &mut Vec<Move>) {
    let side = pawn.color;
    let from = pawn.square;
    let direction = side.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if game_state.is_empty(one_step) {
            push_pawn_move(pawn, one_step, None, out);

            if from.rank() == side.pawn_home_rank() {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if game_state.is_empty(two_step) {
                        out.push(build_move(pawn, two_step, None, MoveKind::DoubleStepPawn));
                    }
                }
            }
        }
    }

    // captures and en passant
    for to in pawn_attack_squares(side, from) {
        if let Some(captured) = enemy_piece_on(game_state, side, to) {
            push_pawn_move(pawn, to, Some(captured), out);
        } else if game_state.en_passant_target() == Some(to) && game_state.is_empty(to) {
            // The double-stepped pawn sits beside us, on our rank.
            let Some(victim_square) = Square::new(from.rank(), to.file()) else {
                continue;
            };
            if let Some(victim) = enemy_piece_on(game_state, side, victim_square)
                .filter(|victim| victim.kind == PieceKind::Pawn)
            {
                out.push(build_move(pawn, to, Some(victim), MoveKind::EnPassant));
            }
        }
    }
}

/// Push a pawn move, expanding it into one move per promotion kind when it
/// lands on the far rank.
fn push_pawn_move(pawn: Piece, to: Square, captured: Option<Piece>, out: &mut Vec<Move>) {
    if to.rank() == pawn.color.promotion_rank() {
        for promo in PieceKind::PROMOTIONS {
            out.push(build_move(pawn, to, captured, MoveKind::PromotionTo(promo)));
        }
    } else {
        out.push(build_move(pawn, to, captured, MoveKind::Normal));
    }
}
