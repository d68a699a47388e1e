use crate::{Grid, Position, BOX_SIDE, EMPTY, SIDE};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Number of cells cleared when turning a solved grid into a puzzle
/// (three quarters of the 81 cells).
pub const REMOVED_CELLS: usize = SIDE * SIDE * 3 / 4;

/// Randomized puzzle generator.
///
/// Builds a solved grid by applying symmetry-preserving permutations to a
/// fixed base pattern, then blanks [`REMOVED_CELLS`] cells chosen uniformly
/// without replacement. The puzzle is always completable back to the solved
/// grid it was cut from; a unique solution is not guaranteed.
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create an entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible puzzles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle: a solved grid with [`REMOVED_CELLS`] cells blanked.
    pub fn generate(&mut self) -> Grid {
        let mut grid = self.generate_solved();
        self.remove_cells(&mut grid);
        grid
    }

    /// Generate a completely filled rule-valid grid.
    ///
    /// Starts from the base pattern, which is already a valid arrangement of
    /// the indices 0..9, and randomizes it through operations that preserve
    /// validity: permuting the three row bands, the rows within each band,
    /// likewise for columns, and the digit alphabet itself.
    pub fn generate_solved(&mut self) -> Grid {
        let rows = self.shuffled_axis();
        let cols = self.shuffled_axis();

        let mut digits: [u8; SIDE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(&mut self.rng);

        let mut grid = Grid::empty();
        for pos in Position::all() {
            let value = digits[base_pattern(rows[pos.row], cols[pos.col])];
            grid.set(pos, value);
        }
        grid
    }

    /// One axis of the grid as a permuted index sequence: the three bands in
    /// shuffled order, each band's three lines independently shuffled.
    fn shuffled_axis(&mut self) -> [usize; SIDE] {
        let mut bands = [0, 1, 2];
        bands.shuffle(&mut self.rng);

        let mut axis = [0; SIDE];
        let mut next = 0;
        for band in bands {
            let mut lines = [0, 1, 2];
            lines.shuffle(&mut self.rng);
            for line in lines {
                axis[next] = band * BOX_SIDE + line;
                next += 1;
            }
        }
        axis
    }

    /// Blank [`REMOVED_CELLS`] cells chosen uniformly without replacement.
    fn remove_cells(&mut self, grid: &mut Grid) {
        let mut positions: Vec<Position> = Position::all().collect();
        positions.shuffle(&mut self.rng);
        for &pos in positions.iter().take(REMOVED_CELLS) {
            grid.set(pos, EMPTY);
        }
    }
}

/// Base pattern: a deterministic valid filled arrangement of indices 0..9.
///
/// Row-shifting each band by one and each row within a band by three keeps
/// every row, column, and box a permutation of 0..9.
fn base_pattern(row: usize, col: usize) -> usize {
    (BOX_SIDE * (row % BOX_SIDE) + row / BOX_SIDE + col) % SIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_pattern_is_valid_arrangement() {
        let mut grid = Grid::empty();
        for pos in Position::all() {
            grid.set(pos, base_pattern(pos.row, pos.col) as u8 + 1);
        }
        assert!(grid.is_solved());
    }

    #[test]
    fn test_generated_solved_grids_are_valid() {
        for seed in 0..25 {
            let mut generator = Generator::with_seed(seed);
            let grid = generator.generate_solved();
            assert!(grid.is_solved(), "seed {} produced an invalid grid", seed);
        }
    }

    #[test]
    fn test_removal_blanks_exactly_the_configured_count() {
        let mut generator = Generator::with_seed(42);
        let solved = generator.generate_solved();
        let mut puzzle = solved;
        generator.remove_cells(&mut puzzle);

        assert_eq!(REMOVED_CELLS, 60);
        assert_eq!(puzzle.empty_count(), REMOVED_CELLS);
        for pos in Position::all() {
            if puzzle.get(pos) != EMPTY {
                assert_eq!(puzzle.get(pos), solved.get(pos));
            }
        }
    }

    #[test]
    fn test_generate_produces_a_puzzle() {
        let mut generator = Generator::with_seed(7);
        let puzzle = generator.generate();
        assert_eq!(puzzle.empty_count(), REMOVED_CELLS);
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Generator::with_seed(1234).generate();
        let b = Generator::with_seed(1234).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffled_axis_is_a_band_respecting_permutation() {
        let mut generator = Generator::with_seed(9);
        for _ in 0..10 {
            let axis = generator.shuffled_axis();

            let mut sorted = axis;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8]);

            // Each band of the output draws from a single input band.
            for band in 0..BOX_SIDE {
                let chunk = &axis[band * BOX_SIDE..(band + 1) * BOX_SIDE];
                assert!(chunk.iter().all(|line| line / BOX_SIDE == chunk[0] / BOX_SIDE));
            }
        }
    }
}
