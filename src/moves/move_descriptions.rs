//! Move descriptors produced by the generators and consumed by the executor.

use std::fmt;

use crate::game_state::chess_types::{CastleWing, Piece, PieceKind, Square};

/// Special-move classification carried by every [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoubleStepPawn,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    PromotionTo(PieceKind),
}

/// A fully described move.
///
/// `piece_moved` is the piece as it stood before the move and
/// `captured_piece` carries its own square, which for en passant is not `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub captured_piece: Option<Piece>,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::PromotionTo(kind) => Some(kind),
            _ => None,
        }
    }

    #[inline]
    pub fn castle_wing(&self) -> Option<CastleWing> {
        match self.kind {
            MoveKind::CastleKingside => Some(CastleWing::Kingside),
            MoveKind::CastleQueenside => Some(CastleWing::Queenside),
            _ => None,
        }
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind};
    use crate::game_state::chess_types::{CastleWing, Color, Piece, PieceKind, Square};

    #[test]
    fn display_uses_long_algebraic() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::at(6, 4));
        let mv = Move {
            from: pawn.square,
            to: Square::at(7, 4),
            piece_moved: pawn,
            captured_piece: None,
            kind: MoveKind::PromotionTo(PieceKind::Knight),
        };
        assert_eq!(mv.to_string(), "e7e8n");
        assert_eq!(mv.promotion(), Some(PieceKind::Knight));
        assert_eq!(mv.castle_wing(), None);
    }

    #[test]
    fn castle_kinds_map_to_wings() {
        let king = Piece::new(PieceKind::King, Color::Black, Square::at(7, 4));
        let mv = Move {
            from: king.square,
            to: Square::at(7, 2),
            piece_moved: king,
            captured_piece: None,
            kind: MoveKind::CastleQueenside,
        };
        assert_eq!(mv.castle_wing(), Some(CastleWing::Queenside));
        assert!(!mv.is_capture());
    }
}
