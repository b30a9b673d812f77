//! Move execution and undo.
//!
//! `apply_move` validates a move against the legal-move set and plays it on
//! the live state, pushing an [`UndoState`]. `undo_move` pops that record and
//! restores the previous position exactly. The unchecked make/unmake pair is
//! shared with the legality filter and perft.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{castled_squares, rook_home_square, wing_of_rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::{Move, MoveKind};

/// Play `mv` on the live state if it is legal.
///
/// On `IllegalMove` the state is left untouched. On success the status of
/// the resulting position is returned.
pub fn apply_move(game_state: &mut GameState, mv: &Move) -> ChessResult<GameStatus> {
    if !legal_moves(game_state, mv.from).contains(mv) {
        log::debug!("refusing illegal move {mv}");
        return Err(ChessErrors::IllegalMove(*mv));
    }

    let record = make_move_unchecked(game_state, mv);
    game_state.undo_stack.push(record);
    debug_assert_valid(game_state);

    let status = game_status(game_state);
    log::debug!("applied {mv} (ply {}), status {status:?}", game_state.history_len());
    if status.is_terminal() {
        log::debug!("game over: {status:?}");
    }
    Ok(status)
}

/// Take back the last applied move and return it.
pub fn undo_move(game_state: &mut GameState) -> ChessResult<Move> {
    let record = game_state
        .undo_stack
        .pop()
        .ok_or(ChessErrors::EmptyHistory)?;
    unmake_move(game_state, &record);
    debug_assert_valid(game_state);

    log::debug!("undid {} (ply {})", record.mv, game_state.history_len());
    Ok(record.mv)
}

/// Play a move without checking legality and return the record that
/// reverses it. The record is not pushed onto the undo stack.
pub fn make_move_unchecked(game_state: &mut GameState, mv: &Move) -> UndoState {
    let mover = mv.piece_moved.color;
    let mut record = UndoState {
        mv: *mv,
        prev_rook: None,
        prev_side_to_move: game_state.side_to_move,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_target: game_state.en_passant_target,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    };

    game_state.take_piece(mv.from);
    if let Some(captured) = mv.captured_piece {
        game_state.take_piece(captured.square);
    }

    let mut placed = mv.piece_moved;
    placed.square = mv.to;
    placed.has_moved = true;
    if let MoveKind::PromotionTo(kind) = mv.kind {
        placed.kind = kind;
    }
    game_state.put_piece(placed);

    if let Some(wing) = mv.castle_wing() {
        let (_, rook_to) = castled_squares(mover, wing);
        if let Some(rook) = game_state.take_piece(rook_home_square(mover, wing)) {
            record.prev_rook = Some(rook);
            game_state.put_piece(Piece {
                square: rook_to,
                has_moved: true,
                ..rook
            });
        }
    }

    update_castling_rights(game_state, mv);

    game_state.en_passant_target = match mv.kind {
        MoveKind::DoubleStepPawn => mv.from.offset(mover.pawn_direction(), 0),
        _ => None,
    };

    if mv.piece_moved.kind == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();

    record
}

/// Exact inverse of [`make_move_unchecked`].
pub fn unmake_move(game_state: &mut GameState, record: &UndoState) {
    let mv = &record.mv;

    game_state.take_piece(mv.to);
    game_state.put_piece(mv.piece_moved);
    if let Some(captured) = mv.captured_piece {
        game_state.put_piece(captured);
    }

    if let (Some(wing), Some(rook)) = (mv.castle_wing(), record.prev_rook) {
        let (_, rook_to) = castled_squares(mv.piece_moved.color, wing);
        game_state.take_piece(rook_to);
        game_state.put_piece(rook);
    }

    game_state.side_to_move = record.prev_side_to_move;
    game_state.castling_rights = record.prev_castling_rights;
    game_state.en_passant_target = record.prev_en_passant_target;
    game_state.halfmove_clock = record.prev_halfmove_clock;
    game_state.fullmove_number = record.prev_fullmove_number;
}

/// Rights only ever shrink: a king move drops both wings, a rook leaving or
/// being captured on its home corner drops that wing.
fn update_castling_rights(game_state: &mut GameState, mv: &Move) {
    let mover = mv.piece_moved;
    match mover.kind {
        PieceKind::King => game_state.castling_rights.revoke_all(mover.color),
        PieceKind::Rook => {
            if let Some(wing) = wing_of_rook_home(mover.color, mv.from) {
                game_state.castling_rights.revoke(mover.color, wing);
            }
        }
        _ => {}
    }

    if let Some(captured) = mv.captured_piece.filter(|piece| piece.kind == PieceKind::Rook) {
        if let Some(wing) = wing_of_rook_home(captured.color, captured.square) {
            game_state.castling_rights.revoke(captured.color, wing);
        }
    }
}

#[inline]
fn debug_assert_valid(game_state: &GameState) {
    if cfg!(debug_assertions) {
        if let Err(err) = game_state.validate() {
            panic!("{err}");
        }
    }
}
