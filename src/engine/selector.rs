use super::board::Board;
use super::coord::Coord;
use super::heatmap::{Frequency, Heatmap};

/// Exploitation threshold (§4.4): once some Gray cell's red probability
/// reaches this, bombing it beats any exploration move.
const EXPLOIT_THRESHOLD: f64 = 0.5;

/// A cell's normalized outcome distribution and the Shannon entropy
/// (natural log) of that distribution (§4.4). A cell with frequency sum 0
/// (the contradiction case, §7) is given probability (0,0,0) and entropy 0
/// rather than propagating NaN.
#[derive(Clone, Copy, Debug)]
pub struct Probability {
    pub red: f64,
    pub blue: f64,
    pub white: f64,
}

impl Probability {
    pub(crate) fn from_frequency(freq: Frequency) -> Probability {
        let sum = freq.sum();
        if sum == 0 {
            return Probability {
                red: 0.0,
                blue: 0.0,
                white: 0.0,
            };
        }
        let sum = sum as f64;
        Probability {
            red: freq.red as f64 / sum,
            blue: freq.blue as f64 / sum,
            white: freq.white as f64 / sum,
        }
    }

    /// Shannon entropy in nats, summed only over non-zero components so a
    /// zero probability never contributes a NaN `0 * ln(0)` term.
    pub fn entropy(&self) -> f64 {
        [self.red, self.blue, self.white]
            .into_iter()
            .filter(|&p| p > 0.0)
            .map(|p| -p * p.ln())
            .sum()
    }
}

/// Normalizes the aggregate heatmap and applies the two-branch ranking rule
/// (§4.4) to choose the next cell to bomb.
pub fn select_cell(heatmap: &Heatmap, board: &Board) -> Coord {
    if let Some(coord) = exploit_candidate(heatmap, board) {
        return coord;
    }
    explore_candidate(heatmap, board)
}

/// The Gray cell with the largest red probability, if that probability
/// meets the exploitation threshold. Ties resolve to the row-major-first
/// cell.
fn exploit_candidate(heatmap: &Heatmap, board: &Board) -> Option<Coord> {
    let mut best: Option<(Coord, f64)> = None;
    for (coord, color) in board.iter_cells() {
        if !color.is_gray() {
            continue;
        }
        let p_red = Probability::from_frequency(heatmap.get(coord.row, coord.col)).red;
        let better = match best {
            None => true,
            Some((_, best_red)) => p_red > best_red,
        };
        if better {
            best = Some((coord, p_red));
        }
    }
    best.filter(|(_, p_red)| *p_red >= EXPLOIT_THRESHOLD)
        .map(|(coord, _)| coord)
}

/// Ranks every cell by (entropy desc, Gray-before-known, p_red desc),
/// resolving remaining ties to row-major order, and returns the winner.
fn explore_candidate(heatmap: &Heatmap, board: &Board) -> Coord {
    let mut best: Option<(Coord, f64, bool, f64)> = None;
    for (coord, color) in board.iter_cells() {
        let prob = Probability::from_frequency(heatmap.get(coord.row, coord.col));
        let entropy = prob.entropy();
        let is_gray = color.is_gray();
        let better = match best {
            None => true,
            Some((_, best_entropy, best_gray, best_red)) => {
                if entropy != best_entropy {
                    entropy > best_entropy
                } else if is_gray != best_gray {
                    is_gray
                } else {
                    prob.red > best_red
                }
            }
        };
        if better {
            best = Some((coord, entropy, is_gray, prob.red));
        }
    }
    best.expect("board has at least one cell").0
}
