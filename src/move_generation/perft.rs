//! Perft: exhaustive legal-move tree counts used to verify the generator.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move_unchecked, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_legal_move};
use crate::moves::move_descriptions::{Move, MoveKind};

/// Leaf statistics at the requested depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

/// Count the leaves of the legal-move tree `depth` plies deep. Works on a
/// scratch copy; `game_state` is not modified.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    let mut scratch = game_state.scratch_copy();
    perft_recurse(&mut scratch, depth, &mut counts);
    counts
}

/// Node count per root move, handy for tracking down generator bugs.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    let mut scratch = game_state.scratch_copy();
    all_legal_moves(&scratch)
        .into_iter()
        .map(|mv| {
            let record = make_move_unchecked(&mut scratch, &mv);
            let nodes = perft(&scratch, depth.saturating_sub(1)).nodes;
            unmake_move(&mut scratch, &record);
            (mv, nodes)
        })
        .collect()
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in all_legal_moves(game_state) {
        let record = make_move_unchecked(game_state, &mv);
        if depth == 1 {
            tally_leaf(game_state, &mv, counts);
        } else {
            perft_recurse(game_state, depth - 1, counts);
        }
        unmake_move(game_state, &record);
    }
}

fn tally_leaf(after: &GameState, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.kind == MoveKind::EnPassant {
        counts.en_passant += 1;
    }
    if mv.castle_wing().is_some() {
        counts.castles += 1;
    }
    if mv.promotion().is_some() {
        counts.promotions += 1;
    }
    if is_king_in_check(after, after.side_to_move()) {
        counts.checks += 1;
        if !has_legal_move(after) {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::game_state::GameState;

    const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&GameState::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn startpos_depth_three() {
        let counts = perft(&GameState::new_game(), 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn kiwipete_depth_two_exercises_special_moves() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
        let counts = perft(&game, 2);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
    }
}
