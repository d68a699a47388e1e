//! Sudoku engine.
//!
//! The [`Grid`] value type carries the 9×9 board, [`Generator`] produces
//! randomized rule-valid puzzles, and [`Solver`] completes partial grids by
//! backtracking search. Move legality is checked by [`Grid::is_valid_move`],
//! which both the solver and interactive front ends share.

#![allow(clippy::needless_range_loop)]

mod generator;
mod solver;

pub use generator::{Generator, REMOVED_CELLS};
pub use solver::Solver;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the grid.
pub const SIDE: usize = 9;
/// Side length of one 3×3 box.
pub const BOX_SIDE: usize = 3;
/// Cell value denoting an empty cell.
pub const EMPTY: u8 = 0;

/// A 0-indexed cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Both coordinates must be below [`SIDE`].
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIDE && col < SIDE);
        Self { row, col }
    }

    /// Iterate over all 81 cell positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIDE).flat_map(|row| (0..SIDE).map(move |col| Position { row, col }))
    }

    /// Top-left corner of the 3×3 box containing this position.
    pub fn box_origin(self) -> Position {
        Position {
            row: self.row - self.row % BOX_SIDE,
            col: self.col - self.col % BOX_SIDE,
        }
    }
}

/// A 9×9 Sudoku grid. `0` is an empty cell, `1..=9` a placed digit.
///
/// Plain value type: cheap to copy, no interior bookkeeping. A fully
/// generated grid satisfies the Sudoku invariant (each row, column, and box
/// holds 1..=9 exactly once); after cell removal it is a partial assignment
/// that the generator guarantees is completable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; SIDE]; SIDE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// An all-empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [[EMPTY; SIDE]; SIDE],
        }
    }

    /// Build a grid from raw row-major cell values.
    pub fn from_rows(cells: [[u8; SIDE]; SIDE]) -> Self {
        Self { cells }
    }

    /// Parse an 81-character puzzle line. `0` and `.` mark empty cells.
    ///
    /// Returns `None` if the string is not exactly 81 cells of `0-9`/`.`.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Self::empty();
        let mut count = 0;
        for (i, ch) in s.trim().chars().enumerate() {
            if i >= SIDE * SIDE {
                return None;
            }
            let value = match ch {
                '.' | '0' => EMPTY,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            grid.cells[i / SIDE][i % SIDE] = value;
            count += 1;
        }
        if count == SIDE * SIDE {
            Some(grid)
        } else {
            None
        }
    }

    /// Render as an 81-character puzzle line, `.` for empty cells.
    pub fn to_string_compact(&self) -> String {
        let mut s = String::with_capacity(SIDE * SIDE);
        for pos in Position::all() {
            let v = self.get(pos);
            if v == EMPTY {
                s.push('.');
            } else {
                s.push((b'0' + v) as char);
            }
        }
        s
    }

    /// Value at `pos` (`0` when empty).
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Write `value` at `pos`. Caller contract: `value <= 9`.
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value as usize <= SIDE);
        self.cells[pos.row][pos.col] = value;
    }

    /// Clear the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = EMPTY;
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos) == EMPTY)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos) == EMPTY).count()
    }

    /// True when no cell is empty (says nothing about rule validity).
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// True when the grid is completely filled and every row, column, and
    /// 3×3 box contains each of 1..=9 exactly once.
    pub fn is_solved(&self) -> bool {
        const FULL: u16 = 0b11_1111_1110; // bits 1..=9 set

        for i in 0..SIDE {
            let mut row_seen = 0u16;
            let mut col_seen = 0u16;
            for j in 0..SIDE {
                row_seen |= 1 << self.cells[i][j];
                col_seen |= 1 << self.cells[j][i];
            }
            if row_seen != FULL || col_seen != FULL {
                return false;
            }
        }
        for band in 0..BOX_SIDE {
            for stack in 0..BOX_SIDE {
                let mut seen = 0u16;
                for r in 0..BOX_SIDE {
                    for c in 0..BOX_SIDE {
                        seen |= 1 << self.cells[band * BOX_SIDE + r][stack * BOX_SIDE + c];
                    }
                }
                if seen != FULL {
                    return false;
                }
            }
        }
        true
    }

    /// Check whether placing `value` at `pos` respects the Sudoku rules:
    /// `value` must not already appear in the same row, column, or 3×3 box.
    ///
    /// Pure; the grid is not modified. Caller contract: `value` in `1..=9`.
    ///
    /// The scan does not exclude `pos` itself, so probing a cell that
    /// already holds `value` reports `false`. The solver only ever probes
    /// empty cells, where the distinction cannot arise, but callers
    /// inspecting filled cells should expect this.
    pub fn is_valid_move(&self, pos: Position, value: u8) -> bool {
        debug_assert!((1..=SIDE as u8).contains(&value));

        for i in 0..SIDE {
            if self.cells[pos.row][i] == value {
                return false;
            }
        }
        for i in 0..SIDE {
            if self.cells[i][pos.col] == value {
                return false;
            }
        }
        let origin = pos.box_origin();
        for r in origin.row..origin.row + BOX_SIDE {
            for c in origin.col..origin.col + BOX_SIDE {
                if self.cells[r][c] == value {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    /// Text block rendering: `.` for empty cells, `|`/`-` box separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row % BOX_SIDE == 0 && row != 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..SIDE {
                if col % BOX_SIDE == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                let v = self.cells[row][col];
                if v == EMPTY {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", v)?;
                }
                if col != SIDE - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
