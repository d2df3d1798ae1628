use super::board::Board;
use super::color::Color;
use super::coord::Coord;
use super::enumerator::Enumerator;
use super::heatmap::Heatmap;
use super::prelude::*;
use super::selector;
use super::selector::Probability;
use super::shape::AIRCRAFT_SIZE;

/// The top-level decision engine (§4.5). Owns the observed board and is the
/// only object an external REPL or benchmark needs.
pub struct Engine {
    board: Board,
    num_aircraft: usize,
    /// Combination count from the most recent `get_cell_to_bomb` call, for
    /// callers that want to detect the contradiction case (§7) without the
    /// engine propagating NaN through a normal return value.
    last_combinations: Option<u64>,
    /// The heatmap behind the most recent suggestion, kept around so a
    /// renderer can show per-cell probabilities without re-enumerating.
    last_heatmap: Option<Heatmap>,
}

impl Engine {
    /// Allocates an all-Gray `rows`x`cols` board for `num_aircraft`
    /// aircraft. Rejects non-positive dimensions/counts and counts that
    /// cannot possibly fit the board (§7).
    pub fn new(rows: usize, cols: usize, num_aircraft: usize) -> Result<Engine> {
        if rows == 0 {
            return Err(anyhow!("rows must be positive, got {rows}"));
        }
        if cols == 0 {
            return Err(anyhow!("cols must be positive, got {cols}"));
        }
        if num_aircraft == 0 {
            return Err(anyhow!("num_aircraft must be positive, got {num_aircraft}"));
        }
        if num_aircraft * AIRCRAFT_SIZE > rows * cols {
            return Err(anyhow!(
                "{num_aircraft} aircraft of size {AIRCRAFT_SIZE} cannot fit on a {rows}x{cols} board"
            ));
        }
        Ok(Engine {
            board: Board::new(rows, cols),
            num_aircraft,
            last_combinations: None,
            last_heatmap: None,
        })
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Records a cell's observed color (§4.5, §7). A same-color rewrite of
    /// an already-known cell is tolerated as a no-op; a conflicting
    /// rewrite is rejected and the board is left unchanged.
    pub fn set_color(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        self.board
            .set(Coord::new(row, col), color)
            .with_context(|| format!("rejecting SetColor({row}, {col}, {color})"))
    }

    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        let coord = Coord::new(row, col);
        self.board.in_bounds(coord).then(|| self.board.color(coord))
    }

    /// Runs the enumerator then the selector and returns the chosen cell.
    /// Pure with respect to the board — it never mutates `self.board`.
    pub fn get_cell_to_bomb(&mut self) -> Result<(usize, usize)> {
        let enumerator = Enumerator::new(&self.board, self.num_aircraft);
        let (heatmap, combinations) = enumerator.compute_heatmap();
        self.last_combinations = Some(combinations);
        let coord = selector::select_cell(&heatmap, &self.board);
        self.last_heatmap = Some(heatmap);
        Ok((coord.row, coord.col))
    }

    /// Whether the most recent `get_cell_to_bomb` call found the board's
    /// evidence to be self-contradictory (zero consistent placements). This
    /// is `None` until the first call.
    pub fn last_call_was_contradiction(&self) -> Option<bool> {
        self.last_combinations.map(|m| m == 0)
    }

    /// The outcome distribution for `(row, col)` as of the most recent
    /// `get_cell_to_bomb` call. `None` before the first call or if the
    /// coordinates are out of bounds.
    pub fn probability_at(&self, row: usize, col: usize) -> Option<Probability> {
        let coord = Coord::new(row, col);
        if !self.board.in_bounds(coord) {
            return None;
        }
        self.last_heatmap
            .as_ref()
            .map(|heatmap| Probability::from_frequency(heatmap.get(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions_and_counts() {
        assert!(Engine::new(0, 10, 1).is_err());
        assert!(Engine::new(10, 0, 1).is_err());
        assert!(Engine::new(10, 10, 0).is_err());
    }

    #[test]
    fn rejects_aircraft_counts_that_cannot_fit() {
        assert!(Engine::new(3, 3, 1).is_err());
    }

    #[test]
    fn accepts_a_tight_fit() {
        assert!(Engine::new(2, 5, 1).is_ok());
    }

    #[test]
    fn get_cell_to_bomb_is_deterministic() {
        let mut engine = Engine::new(10, 10, 1).unwrap();
        let first = engine.get_cell_to_bomb().unwrap();
        let second = engine.get_cell_to_bomb().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn forced_single_head_is_found_without_contradiction() {
        let mut engine = Engine::new(10, 10, 1).unwrap();
        // (0, 7) is the one anchor whose direction-0 body stays in bounds
        // from the top edge, so this Red forces exactly one placement.
        engine.set_color(0, 7, Color::Red).unwrap();
        let _ = engine.get_cell_to_bomb().unwrap();
        assert_eq!(engine.last_call_was_contradiction(), Some(false));
    }

    #[test]
    fn contradictory_evidence_is_reported_and_still_returns_a_cell() {
        let mut engine = Engine::new(4, 4, 1).unwrap();
        engine.set_color(0, 0, Color::Red).unwrap();
        engine.set_color(3, 3, Color::Red).unwrap();
        let cell = engine.get_cell_to_bomb().unwrap();
        assert_eq!(engine.last_call_was_contradiction(), Some(true));
        assert!(cell.0 < 4 && cell.1 < 4);
    }

    #[test]
    fn probability_at_is_none_until_first_suggestion() {
        let engine = Engine::new(5, 5, 1).unwrap();
        assert!(engine.probability_at(0, 0).is_none());
    }

    #[test]
    fn probability_at_matches_the_chosen_cell_after_a_suggestion() {
        let mut engine = Engine::new(5, 5, 1).unwrap();
        let (row, col) = engine.get_cell_to_bomb().unwrap();
        let prob = engine.probability_at(row, col).unwrap();
        assert!(prob.red >= 0.0 && prob.red <= 1.0);
    }

    #[test]
    fn set_color_rejects_conflicting_overwrite() {
        let mut engine = Engine::new(5, 5, 1).unwrap();
        engine.set_color(0, 0, Color::White).unwrap();
        assert!(engine.set_color(0, 0, Color::Blue).is_err());
        assert_eq!(engine.color_at(0, 0), Some(Color::White));
    }
}
