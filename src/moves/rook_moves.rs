use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares along one direction from `square` (exclusive) to the board edge.
/// Callers stop the walk at the first occupied square.
#[inline]
pub fn trace_ray(square: Square, d_rank: i8, d_file: i8) -> impl Iterator<Item = Square> {
    std::iter::successors(square.offset(d_rank, d_file), move |sq| {
        sq.offset(d_rank, d_file)
    })
}

#[cfg(test)]
mod tests {
    use super::{trace_ray, ROOK_DIRECTIONS};
    use crate::game_state::chess_types::Square;

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let d4 = Square::at(3, 3);
        let total: usize = ROOK_DIRECTIONS
            .iter()
            .map(|(dr, df)| trace_ray(d4, *dr, *df).count())
            .sum();
        assert_eq!(total, 14);
    }

    #[test]
    fn ray_runs_to_the_edge_in_order() {
        let ray: Vec<Square> = trace_ray(Square::at(0, 5), 0, 1).collect();
        assert_eq!(ray, vec![Square::at(0, 6), Square::at(0, 7)]);
    }
}
