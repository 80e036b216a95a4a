use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cell::CellState;
use crate::error::Result;

mod annealing;
mod backtracking;
mod genetic;
mod hill_climbing;

pub use annealing::{AnnealingConfig, SimulatedAnnealingSolver};
pub use backtracking::{BacktrackingSolver, ValueOrdering, VariableOrdering};
pub use genetic::{GeneticConfig, GeneticSolver};
pub use hill_climbing::HillClimbingSolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    Solved,
    /// Systematic search exhausted the root decision. Unreachable for boards
    /// produced by the generator, whose hidden assignment is a witness.
    Unsolvable,
    /// A stochastic solver hit its iteration cap; the best-effort state is
    /// left on the board, not reverted.
    BudgetExhausted,
    Aborted,
}

impl SolveStatus {
    pub fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Solved => "solved",
            Self::Unsolvable => "no solution found",
            Self::BudgetExhausted => "iteration budget exhausted",
            Self::Aborted => "aborted",
        };
        f.write_str(text)
    }
}

/// Outcome of one solving attempt. `moves` counts the board state mutations
/// the solver performed (probe evaluations revert in place and are not
/// counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub status: SolveStatus,
    pub moves: usize,
}

/// Cooperative abort flag, polled once per iteration or backtrack step.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// One attempt to reach a solved board. Implementations keep their heuristics
/// private behind this seam.
pub trait Solver {
    fn name(&self) -> &str;

    fn attempt(&mut self, board: &mut Board, cancel: &CancelToken) -> Result<Attempt>;
}

// Local search flips cells between Included and Excluded; undetermined cells
// enter the search as excluded, which leaves every line sum unchanged.
pub(crate) fn normalize_undetermined(board: &mut Board) -> Result<usize> {
    let mut moves = 0;
    for row in 0..board.size() {
        for col in 0..board.size() {
            if board.state(row, col)?.is_undetermined() {
                board.set_state(row, col, CellState::Excluded)?;
                moves += 1;
            }
        }
    }
    Ok(moves)
}
