use std::ops::AddAssign;

/// Per-cell counts of how many enumerated combinations painted a cell Red,
/// Blue, or left it White (§3).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frequency {
    pub red: u64,
    pub blue: u64,
    pub white: u64,
}

impl Frequency {
    pub fn sum(&self) -> u64 {
        self.red + self.blue + self.white
    }
}

impl AddAssign for Frequency {
    fn add_assign(&mut self, rhs: Frequency) {
        self.red += rhs.red;
        self.blue += rhs.blue;
        self.white += rhs.white;
    }
}

/// An R×C grid of `Frequency`, aggregated across every worker's share of the
/// enumeration. `+=` is commutative and associative, so workers may
/// accumulate privately and the coordinator reduces once (§9).
#[derive(Clone, Debug)]
pub struct Heatmap {
    cells: Vec<Vec<Frequency>>,
    rows: usize,
    cols: usize,
}

impl Heatmap {
    pub fn new(rows: usize, cols: usize) -> Heatmap {
        Heatmap {
            cells: vec![vec![Frequency::default(); cols]; rows],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Frequency {
        self.cells[row][col]
    }

    pub fn record_red(&mut self, row: usize, col: usize) {
        self.cells[row][col].red += 1;
    }

    pub fn record_blue(&mut self, row: usize, col: usize) {
        self.cells[row][col].blue += 1;
    }

    /// Total number of enumerated combinations, derived from any cell's
    /// painted counts plus the deferred white count once finalized; before
    /// finalization this sums only red+blue, which is not yet meaningful as
    /// a combination count.
    pub fn finalize(&mut self, total_combinations: u64) {
        for row in self.cells.iter_mut() {
            for freq in row.iter_mut() {
                freq.white = total_combinations - freq.red - freq.blue;
            }
        }
    }
}

impl AddAssign<&Heatmap> for Heatmap {
    fn add_assign(&mut self, rhs: &Heatmap) {
        debug_assert_eq!(self.rows, rhs.rows);
        debug_assert_eq!(self.cols, rhs.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.cells[row][col] += rhs.cells[row][col];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_makes_every_cell_sum_to_the_total() {
        let mut heatmap = Heatmap::new(2, 2);
        heatmap.record_red(0, 0);
        heatmap.record_blue(0, 0);
        heatmap.record_blue(1, 1);
        heatmap.finalize(5);
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(heatmap.get(row, col).sum(), 5);
            }
        }
    }

    #[test]
    fn summation_is_commutative() {
        let mut a = Heatmap::new(2, 2);
        a.record_red(0, 0);
        let mut b = Heatmap::new(2, 2);
        b.record_blue(0, 0);
        b.record_red(1, 1);

        let mut lhs = a.clone();
        lhs += &b;
        let mut rhs = b.clone();
        rhs += &a;

        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(lhs.get(row, col), rhs.get(row, col));
            }
        }
    }
}
