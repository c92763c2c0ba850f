//! Live-neighbor counting on a toroidal grid.
//!
//! Cells are stored row-major in a flat slice of length `dimension * dimension`.
//! Neighbor indices wrap around both axes, so every cell has exactly eight
//! neighbors and no bounds check can fail.

/// Offsets of the eight Moore neighbors, expressed as `(d_row, d_col)` shifted
/// by +1 so they stay unsigned. `(1, 1)` is the cell itself and is excluded.
const NEIGHBOR_OFFSETS: [(usize, usize); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

/// Count live cells among the eight toroidally wrapped neighbors of (row, col).
///
/// Output range: [0, 8]. Indices outside `[0, dimension)` are reduced modulo
/// `dimension` first.
#[inline]
pub fn live_neighbors(cells: &[bool], dimension: usize, row: usize, col: usize) -> u8 {
    debug_assert_eq!(cells.len(), dimension * dimension);
    let row = row % dimension;
    let col = col % dimension;

    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| {
            let r = (row + dimension + dr - 1) % dimension;
            let c = (col + dimension + dc - 1) % dimension;
            cells[r * dimension + c]
        })
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_with(dimension: usize, live: &[(usize, usize)]) -> Vec<bool> {
        let mut cells = vec![false; dimension * dimension];
        for &(r, c) in live {
            cells[r * dimension + c] = true;
        }
        cells
    }

    #[test]
    fn test_empty_grid_has_no_neighbors() {
        let cells = grid_with(5, &[]);
        for r in 0..5 {
            for c in 0..5 {
                assert_eq!(live_neighbors(&cells, 5, r, c), 0);
            }
        }
    }

    #[test]
    fn test_cell_does_not_count_itself() {
        let cells = grid_with(5, &[(2, 2)]);
        assert_eq!(live_neighbors(&cells, 5, 2, 2), 0);
        assert_eq!(live_neighbors(&cells, 5, 1, 1), 1);
        assert_eq!(live_neighbors(&cells, 5, 3, 3), 1);
        assert_eq!(live_neighbors(&cells, 5, 0, 0), 0);
    }

    #[test]
    fn test_corner_wraps_around() {
        let d = 6;
        // Neighbors of (0, 0) on a torus come from rows/cols d-1, 0 and 1.
        let cells = grid_with(
            d,
            &[(d - 1, d - 1), (d - 1, 0), (d - 1, 1), (0, d - 1), (0, 1), (1, d - 1), (1, 0), (1, 1)],
        );
        assert_eq!(live_neighbors(&cells, d, 0, 0), 8);

        let only_far_corner = grid_with(d, &[(d - 1, d - 1)]);
        assert_eq!(live_neighbors(&only_far_corner, d, 0, 0), 1);
    }

    #[test]
    fn test_full_grid_counts_eight() {
        let cells = vec![true; 16];
        assert_eq!(live_neighbors(&cells, 4, 0, 3), 8);
        assert_eq!(live_neighbors(&cells, 4, 2, 1), 8);
    }

    #[test]
    fn test_tiny_grid_counts_repeated_neighbors() {
        // On a 1x1 torus every neighbor is the cell itself.
        assert_eq!(live_neighbors(&[true], 1, 0, 0), 8);
        // On a 2x2 torus each neighbor appears twice.
        let cells = grid_with(2, &[(0, 1)]);
        assert_eq!(live_neighbors(&cells, 2, 0, 0), 2);
    }

    proptest! {
        #[test]
        fn prop_count_within_bounds(
            (dimension, cells, row, col) in (1usize..12).prop_flat_map(|d| (
                Just(d),
                proptest::collection::vec(any::<bool>(), d * d),
                0..d,
                0..d,
            ))
        ) {
            let n = live_neighbors(&cells, dimension, row, col);
            prop_assert!(n <= 8);
        }
    }
}
