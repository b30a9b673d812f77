//! Standard short algebraic notation (SAN) output.
//!
//! A move is rendered relative to the position it is played from: piece
//! letter (none for pawns), file/rank disambiguation when another piece of
//! the same kind could reach the destination, `x` for captures, `=Q` style
//! promotion, and a `+`/`#` suffix for check/checkmate.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::{make_move_unchecked, unmake_move};
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{file_char, rank_char};

/// SAN for `mv` played from `game_state`. Fails with `IllegalMove` if the
/// move is not legal there.
pub fn algebraic_notation(mv: &Move, game_state: &GameState) -> ChessResult<String> {
    let legal = all_legal_moves(game_state);
    if !legal.contains(mv) {
        return Err(ChessErrors::IllegalMove(*mv));
    }

    let mut out = match mv.castle_wing() {
        Some(CastleWing::Kingside) => "O-O".to_owned(),
        Some(CastleWing::Queenside) => "O-O-O".to_owned(),
        None => piece_move_text(mv, &legal),
    };

    let mut after = game_state.scratch_copy();
    make_move_unchecked(&mut after, mv);
    match game_status(&after) {
        GameStatus::Checkmate { .. } => out.push('#'),
        GameStatus::Check => out.push('+'),
        GameStatus::InProgress | GameStatus::Stalemate => {}
    }

    Ok(out)
}

fn piece_move_text(mv: &Move, legal: &[Move]) -> String {
    let mut out = String::new();
    let kind = mv.piece_moved.kind;

    if kind == PieceKind::Pawn {
        if mv.is_capture() {
            out.push(file_char(mv.from));
        }
    } else {
        out.push(kind.letter());
        out.push_str(&disambiguation(mv, legal));
    }

    if mv.is_capture() {
        out.push('x');
    }
    out.push_str(&mv.to.to_string());

    if let Some(promo) = mv.promotion() {
        out.push('=');
        out.push(promo.letter());
    }

    out
}

/// File, rank, or both of the origin, whichever is the first to single out
/// this piece among same-kind pieces that can also reach `mv.to`.
fn disambiguation(mv: &Move, legal: &[Move]) -> String {
    let rivals: Vec<Square> = legal
        .iter()
        .filter(|other| {
            other.to == mv.to && other.from != mv.from && other.piece_moved.kind == mv.piece_moved.kind
        })
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    if rivals.iter().all(|sq| sq.file() != mv.from.file()) {
        return file_char(mv.from).to_string();
    }
    if rivals.iter().all(|sq| sq.rank() != mv.from.rank()) {
        return rank_char(mv.from).to_string();
    }
    mv.from.to_string()
}

/// SAN of every move played so far, oldest first.
pub fn move_history_notation(game_state: &GameState) -> ChessResult<Vec<String>> {
    let mut replay = game_state.clone();
    let mut records = Vec::with_capacity(replay.history_len());
    while let Some(record) = replay.undo_stack.pop() {
        unmake_move(&mut replay, &record);
        records.push(record);
    }

    let mut notation = Vec::with_capacity(records.len());
    for record in records.into_iter().rev() {
        notation.push(algebraic_notation(&record.mv, &replay)?);
        let replayed = make_move_unchecked(&mut replay, &record.mv);
        replay.undo_stack.push(replayed);
    }

    Ok(notation)
}
