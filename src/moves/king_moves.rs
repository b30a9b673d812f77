//! King step offsets.

use crate::game_state::chess_types::Square;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Adjacent on-board squares, regardless of occupancy. Castling is not a
/// king step and is never produced here.
#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_rank, d_file)| square.offset(d_rank, d_file))
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_targets_from_a1_has_three_targets() {
        assert_eq!(king_targets(Square::at(0, 0)).count(), 3);
    }

    #[test]
    fn king_targets_from_e4_has_eight_targets() {
        assert_eq!(king_targets(Square::at(3, 4)).count(), 8);
    }
}
