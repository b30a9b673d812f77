use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hotseat_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use hotseat_chess::game_state::game_state::GameState;
use hotseat_chess::move_generation::game_status::game_status;
use hotseat_chess::move_generation::legal_move_apply::{apply_move, undo_move};
use hotseat_chess::move_generation::legal_move_generator::all_legal_moves;
use hotseat_chess::move_generation::perft::perft;

struct PerftFixture {
    name: &'static str,
    fen: &'static str,
    nodes_by_depth: &'static [u64],
}

const FIXTURES: &[PerftFixture] = &[
    PerftFixture {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        nodes_by_depth: &[20, 400, 8902],
    },
    PerftFixture {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        nodes_by_depth: &[48, 2039],
    },
    PerftFixture {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        nodes_by_depth: &[14, 191, 2812],
    },
    PerftFixture {
        name: "promotions",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        nodes_by_depth: &[6, 264, 9467],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for fixture in FIXTURES {
        let game = GameState::from_fen(fixture.fen).expect("benchmark FEN should parse");

        for (depth, &expected) in (1u8..).zip(fixture.nodes_by_depth) {
            // Refuse to time a generator that counts wrong.
            assert_eq!(
                perft(&game, depth).nodes,
                expected,
                "{} depth {depth}",
                fixture.name
            );

            group.throughput(Throughput::Elements(expected));
            group.bench_with_input(
                BenchmarkId::new(fixture.name, depth),
                &depth,
                |b, &depth| b.iter(|| black_box(perft(black_box(&game), depth).nodes)),
            );
        }
    }

    group.finish();
}

/// One full turn of the interactive loop: list moves, play one, read the
/// status, take it back.
fn bench_turn_cycle(c: &mut Criterion) {
    let game = GameState::new_game();
    let first = all_legal_moves(&game)[0];

    c.bench_function("turn_cycle_startpos", |b| {
        b.iter(|| {
            let mut live = game.clone();
            let moves = all_legal_moves(black_box(&live));
            let status = apply_move(&mut live, black_box(&first)).expect("first move is legal");
            let _ = undo_move(&mut live).expect("one move to undo");
            black_box((moves.len(), status, game_status(&live)))
        })
    });
}

criterion_group!(perft_benches, bench_perft, bench_turn_cycle);
criterion_main!(perft_benches);
