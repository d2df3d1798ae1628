use rand::Rng;

use super::board::Board;
use super::color::Color;
use super::coord::Coord;
use super::placer::{fresh_occupancy, Placer};
use super::prelude::*;
use super::shape::{AIRCRAFT_SIZE, NUM_DIRECTIONS};

/// Produces synthetic ground-truth boards for testing and benchmarking
/// (§6): `num_aircraft` aircraft placed uniformly at random via reject-and-
/// retry, every painted cell colored Red (head) or Blue (body), and every
/// unpainted cell White.
pub struct Generator {
    rows: usize,
    cols: usize,
    num_aircraft: usize,
}

impl Generator {
    pub fn new(rows: usize, cols: usize, num_aircraft: usize) -> Result<Generator> {
        if rows == 0 || cols == 0 {
            return Err(anyhow!("rows and cols must be positive"));
        }
        if num_aircraft == 0 {
            return Err(anyhow!("num_aircraft must be positive"));
        }
        if num_aircraft * AIRCRAFT_SIZE > rows * cols {
            return Err(anyhow!(
                "{num_aircraft} aircraft of size {AIRCRAFT_SIZE} cannot fit on a {rows}x{cols} board"
            ));
        }
        Ok(Generator {
            rows,
            cols,
            num_aircraft,
        })
    }

    /// Generates one ground-truth board. The placer's board-consistency
    /// check always passes here because the scratch board behind it never
    /// carries any evidence; only the occupancy map constrains placement.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let scratch = Board::new(self.rows, self.cols);
        let placer = Placer::new(&scratch);
        let mut occupancy = fresh_occupancy(self.rows, self.cols);
        let mut colors = vec![vec![Color::White; self.cols]; self.rows];

        for _ in 0..self.num_aircraft {
            loop {
                let anchor = Coord::new(
                    rng.random_range(0..self.rows),
                    rng.random_range(0..self.cols),
                );
                let dir = rng.random_range(0..NUM_DIRECTIONS);
                let mut placed = Vec::with_capacity(AIRCRAFT_SIZE);
                if placer.try_land(anchor, dir, &mut occupancy, &mut placed) {
                    for (i, cell) in placed.into_iter().enumerate() {
                        colors[cell.row][cell.col] = if i == 0 { Color::Red } else { Color::Blue };
                    }
                    break;
                }
                placer.lift(&mut occupancy, &mut placed);
            }
        }

        Board::from_grid(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn generates_exactly_num_aircraft_heads() {
        let generator = Generator::new(10, 10, 2).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let board = generator.generate(&mut rng);
        let heads = board
            .iter_cells()
            .filter(|(_, color)| *color == Color::Red)
            .count();
        assert_eq!(heads, 2);
    }

    #[test]
    fn every_cell_is_red_blue_or_white_never_gray() {
        let generator = Generator::new(10, 10, 2).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let board = generator.generate(&mut rng);
        for (_, color) in board.iter_cells() {
            assert!(!color.is_gray());
        }
    }

    #[test]
    fn same_seed_produces_the_same_board() {
        let generator = Generator::new(10, 10, 2).unwrap();
        let mut rng_a = SmallRng::seed_from_u64(99);
        let mut rng_b = SmallRng::seed_from_u64(99);
        let board_a = generator.generate(&mut rng_a);
        let board_b = generator.generate(&mut rng_b);
        let cells_a: Vec<_> = board_a.iter_cells().collect();
        let cells_b: Vec<_> = board_b.iter_cells().collect();
        assert_eq!(cells_a, cells_b);
    }

    #[test]
    fn rejects_configurations_that_cannot_fit() {
        assert!(Generator::new(3, 3, 1).is_err());
    }
}
