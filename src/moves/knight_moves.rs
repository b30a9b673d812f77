//! Knight jump offsets.

use crate::game_state::chess_types::Square;

/// The eight L-shaped `(rank, file)` jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// On-board squares a knight on `square` jumps to, regardless of occupancy.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_rank, d_file)| square.offset(d_rank, d_file))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_targets_from_d4_has_eight_targets() {
        let d4 = Square::at(3, 3);
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_targets_from_a1_has_two_targets() {
        let targets: Vec<Square> = knight_targets(Square::at(0, 0)).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::at(2, 1)));
        assert!(targets.contains(&Square::at(1, 2)));
    }
}
