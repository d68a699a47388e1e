use crate::{Grid, EMPTY};

/// Backtracking solver. Stateless unit struct, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the completed grid if a solution exists.
    ///
    /// The input is left untouched; the search runs on a copy.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = *grid;
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Solve `grid` in place. Returns `true` and leaves the grid completed
    /// on success; returns `false` with the grid fully restored when no
    /// completion exists.
    ///
    /// Depth-first search over empty cells in row-major order, trying
    /// candidates 1..=9 in ascending order and pruning with
    /// [`Grid::is_valid_move`]. Deterministic for a fixed input: the first
    /// completion in candidate order is returned, which need not be the only
    /// one when the puzzle admits several.
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };

        for value in 1..=9 {
            if grid.is_valid_move(pos, value) {
                grid.set(pos, value);
                if self.solve_in_place(grid) {
                    return true;
                }
                grid.set(pos, EMPTY);
            }
        }
        false
    }
}
