use rand::rngs::StdRng;
use rand::Rng;

use crate::board::Board;
use crate::constraints;
use crate::error::{GameError, Result};
use crate::seeded_rng;
use crate::solver::{normalize_undetermined, Attempt, CancelToken, SolveStatus, Solver};

#[derive(Debug, Clone, Copy)]
pub struct AnnealingConfig {
    pub initial_temperature: f64,
    /// Geometric cooling factor applied every iteration.
    pub cooling_rate: f64,
    pub max_iterations: usize,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self { initial_temperature: 100.0, cooling_rate: 0.99, max_iterations: 1000 }
    }
}

/// Metropolis search over the total absolute deviation from the targets.
pub struct SimulatedAnnealingSolver {
    config: AnnealingConfig,
    rng: StdRng,
}

impl SimulatedAnnealingSolver {
    pub fn new(config: AnnealingConfig, seed: Option<u64>) -> Result<Self> {
        if config.initial_temperature <= 0.0 {
            return Err(GameError::InvalidConfig("initial temperature must be positive"));
        }
        if !(config.cooling_rate > 0.0 && config.cooling_rate < 1.0) {
            return Err(GameError::InvalidConfig("cooling rate must lie within (0, 1)"));
        }
        Ok(Self { config, rng: seeded_rng(seed) })
    }

    fn accept(&mut self, current: u32, candidate: u32, temperature: f64) -> bool {
        if candidate < current {
            return true;
        }
        let delta = current as f64 - candidate as f64;
        self.rng.gen::<f64>() < (delta / temperature).exp()
    }
}

impl Solver for SimulatedAnnealingSolver {
    fn name(&self) -> &str {
        "simulated annealing"
    }

    fn attempt(&mut self, board: &mut Board, cancel: &CancelToken) -> Result<Attempt> {
        let mut moves = normalize_undetermined(board)?;
        let mut error = constraints::total_deviation(board)?;
        let mut temperature = self.config.initial_temperature;

        for _ in 0..self.config.max_iterations {
            if error == 0 || cancel.is_cancelled() {
                break;
            }
            let row = self.rng.gen_range(0..board.size());
            let col = self.rng.gen_range(0..board.size());
            board.toggle(row, col)?;
            moves += 1;
            let candidate = constraints::total_deviation(board)?;
            if self.accept(error, candidate, temperature) {
                error = candidate;
            } else {
                board.toggle(row, col)?;
                moves += 1;
            }
            temperature *= self.config.cooling_rate;
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
