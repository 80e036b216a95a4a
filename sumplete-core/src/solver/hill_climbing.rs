use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::board::Board;
use crate::constraints;
use crate::error::Result;
use crate::seeded_rng;
use crate::solver::{normalize_undetermined, Attempt, CancelToken, SolveStatus, Solver};

// sweep budget scales linearly with grid size
const SWEEP_BUDGET_FACTOR: usize = 1000;
const RESTART_FLIP_PROBABILITY: f64 = 0.3;

/// Greedy toggle sweeps over the violation count, escaping stalls with a
/// random restart. Incomplete: terminates at the sweep budget with the best
/// state reached.
pub struct HillClimbingSolver {
    rng: StdRng,
}

impl HillClimbingSolver {
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: seeded_rng(seed) }
    }
}

impl Solver for HillClimbingSolver {
    fn name(&self) -> &str {
        "hill climbing"
    }

    fn attempt(&mut self, board: &mut Board, cancel: &CancelToken) -> Result<Attempt> {
        let mut moves = normalize_undetermined(board)?;
        let mut best = constraints::violation_count(board)?;

        for _ in 0..SWEEP_BUDGET_FACTOR * board.size() {
            if best == 0 || cancel.is_cancelled() {
                break;
            }
            let mut improved = false;
            for row in 0..board.size() {
                for col in 0..board.size() {
                    board.toggle(row, col)?;
                    moves += 1;
                    let violations = constraints::violation_count(board)?;
                    if violations < best {
                        best = violations;
                        improved = true;
                    } else {
                        board.toggle(row, col)?;
                        moves += 1;
                    }
                }
            }
            if best == 0 {
                break;
            }
            if !improved {
                debug!("sweep stalled at {best} violations, restarting");
                for row in 0..board.size() {
                    for col in 0..board.size() {
                        if self.rng.gen_bool(RESTART_FLIP_PROBABILITY) {
                            board.toggle(row, col)?;
                            moves += 1;
                        }
                    }
                }
                best = constraints::violation_count(board)?;
            }
        }

        let status = if board.is_solved() {
            SolveStatus::Solved
        } else if cancel.is_cancelled() {
            SolveStatus::Aborted
        } else {
            SolveStatus::BudgetExhausted
        };
        Ok(Attempt { status, moves })
    }
}
