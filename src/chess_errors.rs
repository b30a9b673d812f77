//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type across the crate so callers can
//! propagate with `?` and match on one enum.
//!
//! - `IllegalMove` and `EmptyHistory` are the recoverable outcomes of the
//!   command API. Neither leaves the game state modified.
//! - Parsing variants (`InvalidAlgebraic*`, `InvalidFen`) report bad input.
//! - `InvariantViolation` means the board reached an impossible layout. It is
//!   a bug, and the executor asserts against it in debug builds.

use thiserror::Error;

use crate::moves::move_descriptions::Move;

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The move is not in the current legal-move set, typically a stale
    /// selection. Re-query the legal moves and try again.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// `undo_move` was called before any move was played.
    #[error("no move to undo")]
    EmptyHistory,

    /// The board broke a structural invariant (king count, grid consistency).
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    /// A character outside the algebraic alphabet, such as file `'j'`.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// A square or move string that could not be interpreted.
    #[error("invalid algebraic string \"{0}\"")]
    InvalidAlgebraicString(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
