use super::board::Board;
use super::color::Color;
use super::coord::Coord;
use super::shape::{ShapeLibrary, AIRCRAFT_SIZE};

/// Trial-places aircraft onto an occupancy scratch map, honoring board
/// evidence (§4.2). Holds only a borrowed, read-only reference to the
/// observed board.
pub struct Placer<'a> {
    board: &'a Board,
    shapes: &'static ShapeLibrary,
}

impl<'a> Placer<'a> {
    pub fn new(board: &'a Board) -> Placer<'a> {
        Placer {
            board,
            shapes: ShapeLibrary::get(),
        }
    }

    /// Attempts to paint the aircraft anchored at `anchor` in orientation
    /// `dir` onto `occupancy`. On success every painted cell is marked
    /// occupied and appended to `placed_out`, in order, and `true` is
    /// returned. On failure some prefix of cells may already have been
    /// painted; the caller must always call `lift` with the same
    /// `placed_out`, whether or not `try_land` succeeded, to restore the
    /// pre-call state (§4.2).
    pub fn try_land(
        &self,
        anchor: Coord,
        dir: usize,
        occupancy: &mut [Vec<bool>],
        placed_out: &mut Vec<Coord>,
    ) -> bool {
        for offset in self.shapes.body(dir) {
            let Some(cell) = offset.translate(anchor) else {
                return false;
            };
            if !self.board.in_bounds(cell) {
                return false;
            }
            if occupancy[cell.row][cell.col] {
                return false;
            }
            let painted = if *offset == super::coord::Offset::new(0, 0) {
                Color::Red
            } else {
                Color::Blue
            };
            if !self.board.color(cell).consistent_with(painted) {
                return false;
            }
            occupancy[cell.row][cell.col] = true;
            placed_out.push(cell);
        }
        true
    }

    /// Undoes every cell in `placed_out`, restoring `occupancy` and
    /// `placed_out` to their pre-`try_land` state (§4.2).
    pub fn lift(&self, occupancy: &mut [Vec<bool>], placed_out: &mut Vec<Coord>) {
        for cell in placed_out.drain(..) {
            occupancy[cell.row][cell.col] = false;
        }
    }
}

pub fn fresh_occupancy(rows: usize, cols: usize) -> Vec<Vec<bool>> {
    vec![vec![false; cols]; rows]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_restores_occupancy_on_success() {
        let board = Board::new(10, 10);
        let placer = Placer::new(&board);
        let mut occupancy = fresh_occupancy(10, 10);
        let before = occupancy.clone();
        let mut placed = vec![];

        let landed = placer.try_land(Coord::new(0, 2), 0, &mut occupancy, &mut placed);
        assert!(landed);
        assert_eq!(placed.len(), AIRCRAFT_SIZE);
        assert_ne!(occupancy, before);

        placer.lift(&mut occupancy, &mut placed);
        assert_eq!(occupancy, before);
        assert!(placed.is_empty());
    }

    #[test]
    fn round_trip_restores_occupancy_on_failure() {
        let board = Board::new(10, 10);
        let placer = Placer::new(&board);
        let mut occupancy = fresh_occupancy(10, 10);
        let before = occupancy.clone();
        let mut placed = vec![];

        // Anchored near the bottom-right corner in direction 0, this shape
        // runs off the board and must fail, but partial paints may still
        // have happened before the boundary check triggered.
        let landed = placer.try_land(Coord::new(9, 9), 0, &mut occupancy, &mut placed);
        assert!(!landed);

        placer.lift(&mut occupancy, &mut placed);
        assert_eq!(occupancy, before);
        assert!(placed.is_empty());
    }

    #[test]
    fn rejects_overlap_with_existing_occupancy() {
        let board = Board::new(10, 10);
        let placer = Placer::new(&board);
        let mut occupancy = fresh_occupancy(10, 10);
        let mut placed = vec![];
        assert!(placer.try_land(Coord::new(0, 2), 0, &mut occupancy, &mut placed));

        let mut placed2 = vec![];
        assert!(!placer.try_land(Coord::new(0, 2), 1, &mut occupancy, &mut placed2));
        placer.lift(&mut occupancy, &mut placed2);
    }

    #[test]
    fn rejects_placements_inconsistent_with_board_evidence() {
        let mut board = Board::new(10, 10);
        board.set(Coord::new(1, 0), Color::White).unwrap();
        let placer = Placer::new(&board);
        let mut occupancy = fresh_occupancy(10, 10);
        let mut placed = vec![];
        // Direction 0 at anchor (0, 2) paints (1, 0) Blue, which conflicts
        // with the White evidence above.
        assert!(!placer.try_land(Coord::new(0, 2), 0, &mut occupancy, &mut placed));
        placer.lift(&mut occupancy, &mut placed);
    }

    #[test]
    fn every_in_bounds_anchor_and_direction_paints_exactly_ten_cells() {
        let board = Board::new(12, 12);
        let placer = Placer::new(&board);
        let mut painted_somewhere = 0;
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                for dir in 0..4 {
                    let mut occupancy = fresh_occupancy(board.rows(), board.cols());
                    let mut placed = vec![];
                    if placer.try_land(Coord::new(row, col), dir, &mut occupancy, &mut placed) {
                        assert_eq!(placed.len(), AIRCRAFT_SIZE);
                        painted_somewhere += 1;
                    }
                    placer.lift(&mut occupancy, &mut placed);
                    assert_eq!(occupancy, fresh_occupancy(board.rows(), board.cols()));
                }
            }
        }
        assert!(painted_somewhere > 0);
    }
}
