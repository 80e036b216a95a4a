use std::time::{Duration, Instant};

use log::info;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::Result;
use crate::solver::{CancelToken, SolveStatus, Solver};

/// The externally reported result of one puzzle attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub solver: String,
    pub status: SolveStatus,
    pub moves: usize,
    pub elapsed: Duration,
}

/// Runs one solver against one exclusively owned board. Single-threaded and
/// synchronous; the solver runs to completion or cancellation before control
/// returns.
pub struct SolveSession {
    board: Board,
    solver: Box<dyn Solver>,
    cancel: CancelToken,
}

impl SolveSession {
    pub fn new(board: Board, solver: Box<dyn Solver>) -> Self {
        Self { board, solver, cancel: CancelToken::new() }
    }

    /// Clone of the abort flag; trip it from another thread to stop a
    /// long-running search at its next step.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn run(&mut self) -> Result<SessionReport> {
        let started = Instant::now();
        let attempt = self.solver.attempt(&mut self.board, &self.cancel)?;
        let elapsed = started.elapsed();
        info!(
            "{}: {} after {} moves in {:.2?}",
            self.solver.name(),
            attempt.status,
            attempt.moves,
            elapsed
        );
        Ok(SessionReport {
            solver: self.solver.name().to_string(),
            status: attempt.status,
            moves: attempt.moves,
            elapsed,
        })
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}
