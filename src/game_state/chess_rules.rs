//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting layout and the fixed king and
//! rook squares that castling is defined over.

use crate::game_state::chess_types::{CastleWing, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

const KING_FILE: u8 = 4;

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    Square::at(color.back_rank(), KING_FILE)
}

#[inline]
pub const fn rook_home_square(color: Color, wing: CastleWing) -> Square {
    match wing {
        CastleWing::Kingside => Square::at(color.back_rank(), 7),
        CastleWing::Queenside => Square::at(color.back_rank(), 0),
    }
}

/// Where king and rook land after castling: `(king_to, rook_to)`.
#[inline]
pub const fn castled_squares(color: Color, wing: CastleWing) -> (Square, Square) {
    let rank = color.back_rank();
    match wing {
        CastleWing::Kingside => (Square::at(rank, 6), Square::at(rank, 5)),
        CastleWing::Queenside => (Square::at(rank, 2), Square::at(rank, 3)),
    }
}

/// Files strictly between king and rook, which must be empty to castle.
#[inline]
pub const fn castling_gap_files(wing: CastleWing) -> &'static [u8] {
    match wing {
        CastleWing::Kingside => &[5, 6],
        CastleWing::Queenside => &[1, 2, 3],
    }
}

/// Files the king stands on or crosses while castling, origin included.
#[inline]
pub const fn castling_king_path_files(wing: CastleWing) -> &'static [u8] {
    match wing {
        CastleWing::Kingside => &[4, 5, 6],
        CastleWing::Queenside => &[4, 3, 2],
    }
}

/// The castling wing a rook home square belongs to, if any.
pub fn wing_of_rook_home(color: Color, square: Square) -> Option<CastleWing> {
    CastleWing::BOTH
        .into_iter()
        .find(|wing| rook_home_square(color, *wing) == square)
}
