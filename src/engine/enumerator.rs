use super::board::Board;
use super::coord::Coord;
use super::heatmap::Heatmap;
use super::placer::{fresh_occupancy, Placer};
use super::shape::{ShapeLibrary, AIRCRAFT_SIZE, NUM_DIRECTIONS};
use super::workqueue::WorkQueue;

/// One aircraft's placement within a combination being assembled by the DFS.
#[derive(Clone, Copy, Debug)]
struct Placement {
    anchor: Coord,
    dir: usize,
}

/// The result of one worker's share of the enumeration: its private heatmap
/// plus the number of full combinations it found, so the coordinator can
/// finalize white counts once every worker's contribution is in (§4.3).
struct WorkerResult {
    heatmap: Heatmap,
    combinations: u64,
}

/// Parallel DFS over ordered N-tuples of mutually non-overlapping, board-
/// consistent placements (§4.3). One `Enumerator` is built per
/// `get_cell_to_bomb` call and discarded afterward; all its working state
/// lives on the stack of `compute_heatmap` and the workers it spawns.
pub struct Enumerator<'a> {
    board: &'a Board,
    num_aircraft: usize,
}

impl<'a> Enumerator<'a> {
    pub fn new(board: &'a Board, num_aircraft: usize) -> Enumerator<'a> {
        Enumerator { board, num_aircraft }
    }

    /// Runs the full parallel enumeration and returns the aggregate heatmap
    /// together with the total number of combinations found (M). M = 0
    /// means the board's evidence is self-contradictory (§7).
    pub fn compute_heatmap(&self) -> (Heatmap, u64) {
        let rows = self.board.rows();
        let cols = self.board.cols();
        let queue = WorkQueue::seeded(rows, cols);

        let num_workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        let mut aggregate = Heatmap::new(rows, cols);
        let mut total_combinations = 0u64;

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..num_workers)
                .map(|_| scope.spawn(|| self.worker(&queue)))
                .collect();
            for handle in handles {
                let result = handle.join().expect("enumeration worker panicked");
                aggregate += &result.heatmap;
                total_combinations += result.combinations;
            }
        });

        aggregate.finalize(total_combinations);
        log::debug!(
            "enumeration across {num_workers} workers found {total_combinations} combinations"
        );
        (aggregate, total_combinations)
    }

    /// One worker's task: pop seeds from the shared queue until it is empty,
    /// and for each successful first placement, DFS the remaining N-1
    /// placements without touching the queue (§4.3).
    fn worker(&self, queue: &WorkQueue) -> WorkerResult {
        let rows = self.board.rows();
        let cols = self.board.cols();
        let placer = Placer::new(self.board);
        let mut occupancy = fresh_occupancy(rows, cols);
        let mut stack: Vec<Placement> = Vec::with_capacity(self.num_aircraft);
        let mut heatmap = Heatmap::new(rows, cols);
        let known_bodies = self.board.known_bodies();
        let mut combinations = 0u64;

        while let Some(seed) = queue.pop() {
            let mut placed = Vec::with_capacity(AIRCRAFT_SIZE);
            if placer.try_land(seed.anchor, seed.dir, &mut occupancy, &mut placed) {
                let covered = self.count_known(&placed);
                stack.push(Placement {
                    anchor: seed.anchor,
                    dir: seed.dir,
                });
                combinations += self.dfs(
                    &placer,
                    &mut occupancy,
                    &mut stack,
                    known_bodies.saturating_sub(covered),
                    &mut heatmap,
                );
                stack.pop();
            }
            placer.lift(&mut occupancy, &mut placed);
        }

        WorkerResult {
            heatmap,
            combinations,
        }
    }

    /// Recurses over anchors strictly greater (lexicographically, by row
    /// then column) than the most recently placed aircraft's anchor (§4.3).
    fn dfs(
        &self,
        placer: &Placer,
        occupancy: &mut [Vec<bool>],
        stack: &mut Vec<Placement>,
        remaining_known_bodies: u32,
        heatmap: &mut Heatmap,
    ) -> u64 {
        let placed_count = stack.len();
        if ((self.num_aircraft - placed_count) * AIRCRAFT_SIZE) < remaining_known_bodies as usize
        {
            return 0;
        }
        if placed_count == self.num_aircraft {
            self.record_leaf(stack, heatmap);
            return 1;
        }

        let prev_anchor = stack.last().expect("dfs invoked with no placements").anchor;
        let mut combinations = 0u64;
        for row in 0..self.board.rows() {
            for col in 0..self.board.cols() {
                let anchor = Coord::new(row, col);
                if anchor <= prev_anchor {
                    continue;
                }
                for dir in 0..NUM_DIRECTIONS {
                    let mut placed = Vec::with_capacity(AIRCRAFT_SIZE);
                    if placer.try_land(anchor, dir, occupancy, &mut placed) {
                        let covered = self.count_known(&placed);
                        stack.push(Placement { anchor, dir });
                        combinations += self.dfs(
                            placer,
                            occupancy,
                            stack,
                            remaining_known_bodies.saturating_sub(covered),
                            heatmap,
                        );
                        stack.pop();
                    }
                    placer.lift(occupancy, &mut placed);
                }
            }
        }
        combinations
    }

    /// How many of the just-painted cells were already known (non-Gray) on
    /// the board, for the pruning bound (§4.3).
    fn count_known(&self, placed: &[Coord]) -> u32 {
        placed
            .iter()
            .filter(|&&cell| !self.board.color(cell).is_gray())
            .count() as u32
    }

    fn record_leaf(&self, stack: &[Placement], heatmap: &mut Heatmap) {
        let shapes = ShapeLibrary::get();
        for placement in stack {
            for (i, offset) in shapes.body(placement.dir).iter().enumerate() {
                let cell = offset
                    .translate(placement.anchor)
                    .expect("placement was already validated in bounds");
                if i == 0 {
                    heatmap.record_red(cell.row, cell.col);
                } else {
                    heatmap.record_blue(cell.row, cell.col);
                }
            }
        }
    }
}
