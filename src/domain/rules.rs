//! Conway's B3/S23 step rule over a flat, row-major, toroidal grid.
//!
//! Everything here is a pure function of its inputs so the engine can be
//! checked cell by cell against a brute-force reference.

use rayon::prelude::*;

use super::Cell;

/// Count live neighbors using toroidal wrapping (grid wraps like a torus)
pub fn live_neighbor_count(cells: &[Cell], width: u32, height: u32, row: u32, col: u32) -> u8 {
    let (w, h) = (width as usize, height as usize);
    let (row, col) = (row as usize, col as usize);
    let mut count = 0u8;

    // Offsets of h-1 and w-1 are -1 modulo the dimension. The centre is
    // skipped by position, not value: on a 1-wide torus w-1 is also 0.
    for (i, drow) in [h - 1, 0, 1].into_iter().enumerate() {
        for (j, dcol) in [w - 1, 0, 1].into_iter().enumerate() {
            if i == 1 && j == 1 {
                continue;
            }
            let nrow = (row + drow) % h;
            let ncol = (col + dcol) % w;
            count += cells[nrow * w + ncol] as u8;
        }
    }

    count
}

/// Compute one output row of the next generation from `cells`.
fn step_row(cells: &[Cell], width: u32, height: u32, row: u32, out: &mut [Cell]) {
    let base = row as usize * width as usize;
    for (col, next) in out.iter_mut().enumerate() {
        let neighbors = live_neighbor_count(cells, width, height, row, col as u32);
        *next = cells[base + col].evolve(neighbors);
    }
}

/// Write the next generation of `current` into `next` (serial).
///
/// Reads only from `current`, so no cell ever observes a neighbor's
/// already-updated state.
pub fn step(current: &[Cell], next: &mut [Cell], width: u32, height: u32) {
    debug_assert_eq!(current.len(), width as usize * height as usize);
    debug_assert_eq!(current.len(), next.len());

    next.chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, out)| step_row(current, width, height, row as u32, out));
}

/// Parallel variant of [`step`]: rows are computed on the rayon pool.
/// Produces output identical to the serial version.
pub fn step_parallel(current: &[Cell], next: &mut [Cell], width: u32, height: u32) {
    debug_assert_eq!(current.len(), width as usize * height as usize);
    debug_assert_eq!(current.len(), next.len());

    next.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, out)| step_row(current, width, height, row as u32, out));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference neighbor counter using signed offsets and rem_euclid.
    fn brute_force_count(cells: &[Cell], width: u32, height: u32, row: u32, col: u32) -> u8 {
        let (w, h) = (width as i64, height as i64);
        let mut count = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let r = (row as i64 + dy).rem_euclid(h);
                let c = (col as i64 + dx).rem_euclid(w);
                if cells[(r * w + c) as usize].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    fn grid_from(width: u32, height: u32, alive: &[(u32, u32)]) -> Vec<Cell> {
        let mut cells = vec![Cell::Dead; (width * height) as usize];
        for &(r, c) in alive {
            cells[(r * width + c) as usize] = Cell::Alive;
        }
        cells
    }

    /// Deterministic pseudo-random fill, no RNG needed.
    fn scrambled(width: u32, height: u32) -> Vec<Cell> {
        (0..width * height)
            .map(|i| Cell::from((i.wrapping_mul(2_654_435_761) >> 7) % 3 == 0))
            .collect()
    }

    #[test]
    fn test_count_matches_brute_force() {
        for (w, h) in [(1, 1), (2, 3), (5, 5), (7, 4), (16, 9)] {
            let cells = scrambled(w, h);
            for row in 0..h {
                for col in 0..w {
                    assert_eq!(
                        live_neighbor_count(&cells, w, h, row, col),
                        brute_force_count(&cells, w, h, row, col),
                        "{w}x{h} at ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_neighbor_count_follows_rule_table() {
        // 3x3 torus: the centre's neighbors are exactly the other 8 cells.
        let ring = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        for center in [Cell::Dead, Cell::Alive] {
            for n in 0..=8usize {
                let mut cells = grid_from(3, 3, &ring[..n]);
                cells[4] = center;
                let mut next = vec![Cell::Dead; 9];
                step(&cells, &mut next, 3, 3);

                assert_eq!(brute_force_count(&cells, 3, 3, 1, 1), n as u8);
                let expected = match (center, n) {
                    (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
                assert_eq!(next[4], expected, "{center:?} with {n} neighbors");
            }
        }
    }

    #[test]
    fn test_corner_wraps_to_opposite_edges() {
        let (w, h) = (6, 4);
        let cells = grid_from(w, h, &[(h - 1, w - 1), (h - 1, 0), (0, w - 1)]);
        assert_eq!(live_neighbor_count(&cells, w, h, 0, 0), 3);
    }

    #[test]
    fn test_step_matches_brute_force_rule() {
        let (w, h) = (13, 11);
        let cells = scrambled(w, h);
        let mut next = vec![Cell::Dead; cells.len()];
        step(&cells, &mut next, w, h);

        for row in 0..h {
            for col in 0..w {
                let idx = (row * w + col) as usize;
                let n = brute_force_count(&cells, w, h, row, col);
                assert_eq!(next[idx], cells[idx].evolve(n), "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let (w, h) = (50, 37);
        let cells = scrambled(w, h);
        let mut serial = vec![Cell::Dead; cells.len()];
        let mut parallel = vec![Cell::Alive; cells.len()];

        step(&cells, &mut serial, w, h);
        step_parallel(&cells, &mut parallel, w, h);

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_step_is_deterministic() {
        let (w, h) = (20, 20);
        let cells = scrambled(w, h);
        let mut a = vec![Cell::Dead; cells.len()];
        let mut b = vec![Cell::Dead; cells.len()];
        step(&cells, &mut a, w, h);
        step(&cells, &mut b, w, h);
        assert_eq!(a, b);
    }
}
