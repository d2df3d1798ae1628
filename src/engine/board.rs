use super::color::Color;
use super::coord::Coord;
use super::prelude::*;

/// The observed R×C grid (§3). Cells set to Red, Blue, or White are ground
/// truth; only Gray cells may ever change.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<Vec<Color>>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Allocates an all-Gray board of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Board {
        Board {
            cells: vec![vec![Color::Gray; cols]; rows],
            rows,
            cols,
        }
    }

    /// Builds a board directly from a fully-painted grid, as produced by
    /// the generator's ground truth (§6). Unlike `new`, no cell is
    /// guaranteed to be Gray.
    pub fn from_grid(cells: Vec<Vec<Color>>) -> Board {
        let rows = cells.len();
        let cols = cells.first().map_or(0, |row| row.len());
        Board { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// The color at a cell. Panics if out of bounds; callers are expected to
    /// have checked `in_bounds` first (the engine never calls this
    /// out-of-bounds internally).
    pub fn color(&self, coord: Coord) -> Color {
        self.cells[coord.row][coord.col]
    }

    /// Writes a cell's color, enforcing the Board invariant (§7): a same-
    /// color rewrite of a non-Gray cell is a silent no-op, a different-
    /// color rewrite is rejected, and writing any color over Gray succeeds.
    pub fn set(&mut self, coord: Coord, color: Color) -> Result<()> {
        if !self.in_bounds(coord) {
            return Err(anyhow!(
                "cell ({}, {}) is out of bounds for a {}x{} board",
                coord.row,
                coord.col,
                self.rows,
                self.cols
            ));
        }
        let existing = self.cells[coord.row][coord.col];
        if existing.is_gray() || existing == color {
            self.cells[coord.row][coord.col] = color;
            Ok(())
        } else {
            Err(anyhow!(
                "cell ({}, {}) is already {} and cannot be overwritten with {}",
                coord.row,
                coord.col,
                existing,
                color
            ))
        }
    }

    /// The number of cells already known to be Red or Blue, used by the
    /// enumerator's pruning rule (§4.3).
    pub fn known_bodies(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, Color::Red | Color::Blue))
            .count() as u32
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &color)| (Coord::new(row, col), color))
        })
    }
}
