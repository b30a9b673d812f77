//! Core board state representation.
//!
//! `GameState` is the single mutable aggregate of the engine. It stores the
//! 8x8 grid of pieces, turn and castling/en passant flags, move counters, and
//! the undo stack used by the executor. Nothing outside this struct holds game
//! state; every operation takes the state it works on explicitly.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::short_algebraic::move_history_notation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // Indexed by `Square::index`; each piece also records its own square.
    pub(crate) board: [Option<Piece>; 64],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// An empty board, White to move, no rights. Used by the FEN parser.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position with full castling rights.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK_LAYOUT.into_iter().enumerate() {
                let square = Square::at(color.back_rank(), file as u8);
                game_state.put_piece(Piece::new(kind, color, square));
            }
            for file in 0..8 {
                let square = Square::at(color.pawn_home_rank(), file);
                game_state.put_piece(Piece::new(PieceKind::Pawn, color, square));
            }
        }
        game_state.castling_rights = CastlingRights::ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Discard the current game and return to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    #[inline]
    pub(crate) fn put_piece(&mut self, piece: Piece) {
        self.board[piece.square.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square.index()].is_none()
    }

    /// All pieces in square order, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.board.iter().flatten().copied()
    }

    pub fn pieces_of_color(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of_color(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|king| king.square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Number of plies applied since this state was created.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// SAN of every move played so far, oldest first.
    #[inline]
    pub fn move_history_notation(&self) -> ChessResult<Vec<String>> {
        move_history_notation(self)
    }

    /// Pieces of `color` captured so far, in the order they were taken.
    pub fn captured_pieces(&self, color: Color) -> Vec<Piece> {
        self.undo_stack
            .iter()
            .filter_map(|record| record.mv.captured_piece)
            .filter(|piece| piece.color == color)
            .collect()
    }

    /// Copy of the position without its history, for legality simulation.
    pub(crate) fn scratch_copy(&self) -> Self {
        Self {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            undo_stack: Vec::new(),
        }
    }

    /// Check the structural invariants: one king per color and every piece
    /// recorded on the square that holds it.
    pub fn validate(&self) -> ChessResult<()> {
        for (index, slot) in self.board.iter().enumerate() {
            if let Some(piece) = slot {
                if piece.square.index() != index {
                    return Err(ChessErrors::InvariantViolation(format!(
                        "{} {:?} on index {index} believes it stands on {}",
                        piece.color, piece.kind, piece.square
                    )));
                }
            }
        }

        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces_of_color(color)
                .filter(|piece| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessErrors::InvariantViolation(format!(
                    "{color} has {kings} kings"
                )));
            }
        }

        Ok(())
    }
}
