use crate::game_state::chess_types::{Color, Square};

/// Diagonal squares a pawn of `color` on `square` attacks. Occupancy plays no
/// part: an empty diagonal is still attacked.
#[inline]
pub fn pawn_attack_squares(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_rank = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| square.offset(d_rank, d_file))
}
