use crate::game_state::chess_rules::{castling_gap_files, castled_squares, king_home_square, rook_home_square};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{build_move, push_step};
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn generate_king_moves(game_state: &GameState, king: Piece, out: &mut Vec<Move>) {
    for to in king_targets(king.square) {
        push_step(game_state, king, to, out);
    }

    generate_castling_moves(game_state, king, out);
}

/// Castling candidates whose static preconditions hold. Check and attacked
/// transit squares are left to the legality filter.
fn generate_castling_moves(game_state: &GameState, king: Piece, out: &mut Vec<Move>) {
    let side = king.color;
    if king.has_moved || king.square != king_home_square(side) {
        return;
    }

    for wing in CastleWing::BOTH {
        if !game_state.castling_rights().has(side, wing) {
            continue;
        }

        let rook_ready = game_state
            .piece_at(rook_home_square(side, wing))
            .is_some_and(|rook| rook.kind == PieceKind::Rook && rook.color == side && !rook.has_moved);
        if !rook_ready {
            continue;
        }

        let gap_clear = castling_gap_files(wing)
            .iter()
            .all(|file| game_state.is_empty(Square::at(side.back_rank(), *file)));
        if !gap_clear {
            continue;
        }

        let (king_to, _) = castled_squares(side, wing);
        let kind = match wing {
            CastleWing::Kingside => MoveKind::CastleKingside,
            CastleWing::Queenside => MoveKind::CastleQueenside,
        };
        out.push(build_move(king, king_to, None, kind));
    }
}
