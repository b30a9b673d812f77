use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Rook and bishop directions combined.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[cfg(test)]
mod tests {
    use super::QUEEN_DIRECTIONS;
    use crate::game_state::chess_types::Square;
    use crate::moves::rook_moves::trace_ray;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let total: usize = QUEEN_DIRECTIONS
            .iter()
            .map(|(dr, df)| trace_ray(Square::at(3, 3), *dr, *df).count())
            .sum();
        assert_eq!(total, 27);
    }
}
