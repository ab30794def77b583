//! Life rule (B3/S23) on a toroidal grid.
//!
//! Neighbour rows and columns wrap modulo the grid dimensions, so every
//! cell has exactly eight neighbours.

use super::BitGrid;

/// Count live cells among the eight toroidal neighbours of (row, col).
#[inline]
pub fn live_neighbor_count(grid: &BitGrid, row: u32, col: u32) -> u8 {
    let (north, south) = wrap_adjacent(row, grid.height());
    let (west, east) = wrap_adjacent(col, grid.width());

    [
        (north, west),
        (north, col),
        (north, east),
        (row, west),
        (row, east),
        (south, west),
        (south, col),
        (south, east),
    ]
    .into_iter()
    .map(|(r, c)| grid.get(grid.index(r, c)) as u8)
    .sum()
}

/// Previous and next coordinate along an axis of length `len`, modulo `len`.
#[inline]
fn wrap_adjacent(v: u32, len: u32) -> (u32, u32) {
    let (v, len) = (v as u64, len as u64);
    (((v + len - 1) % len) as u32, ((v + 1) % len) as u32)
}

/// Next state of a cell given its current state and live neighbour count.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute one generation of `current` into `next`.
///
/// `next` must have the same dimensions as `current`. Only `next` is
/// written.
pub fn step_into(current: &BitGrid, next: &mut BitGrid) {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    for row in 0..current.height() {
        for col in 0..current.width() {
            let idx = current.index(row, col);
            let neighbors = live_neighbor_count(current, row, col);
            next.set(idx, next_state(current.get(idx), neighbors));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: u32, height: u32, alive: &[(u32, u32)]) -> BitGrid {
        let mut grid = BitGrid::new(width, height).unwrap();
        for &(r, c) in alive {
            let idx = grid.index(r, c);
            grid.set(idx, true);
        }
        grid
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_corner_sees_all_cells_on_3x3() {
        // Every other cell of a 3x3 torus neighbours (0, 0).
        let mut grid = BitGrid::new(3, 3).unwrap();
        grid.fill(true);
        assert_eq!(live_neighbor_count(&grid, 0, 0), 8);
        assert_eq!(live_neighbor_count(&grid, 2, 2), 8);

        let grid = grid_with(3, 3, &[(2, 2)]);
        assert_eq!(live_neighbor_count(&grid, 0, 0), 1);
        assert_eq!(live_neighbor_count(&grid, 2, 2), 0);
    }

    #[test]
    fn test_edges_wrap() {
        let grid = grid_with(5, 5, &[(0, 0), (4, 4), (0, 4), (4, 0)]);
        // Corners of a torus touch each other.
        assert_eq!(live_neighbor_count(&grid, 0, 0), 3);
        // Centre sees nothing.
        assert_eq!(live_neighbor_count(&grid, 2, 2), 0);
    }

    #[test]
    fn test_step_reads_only_current() {
        // A blinker: if step_into read partially written output the
        // result would not be the perpendicular blinker.
        let current = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let mut next = BitGrid::new(5, 5).unwrap();
        step_into(&current, &mut next);
        assert_eq!(next, grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_step_overwrites_stale_next() {
        let current = BitGrid::new(4, 4).unwrap();
        let mut next = BitGrid::new(4, 4).unwrap();
        next.fill(true);
        step_into(&current, &mut next);
        assert_eq!(next.count_alive(), 0);
    }
}
