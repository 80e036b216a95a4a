use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::cell::CellState;
use crate::error::{GameError, Result};
use crate::seeded_rng;
use crate::solver::{Attempt, CancelToken, SolveStatus, Solver};

#[derive(Debug, Clone, Copy)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Fittest individuals carried over unchanged each generation.
    pub elite_size: usize,
    pub tournament_size: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self { population_size: 50, generations: 100, elite_size: 10, tournament_size: 25 }
    }
}

// a genome is a full inclusion assignment, row-major, independent of the
// board's current cell states
type Genome = Vec<bool>;

/// Population search over full inclusion assignments: tournament selection,
/// uniform crossover, single-gene mutation, elitism.
pub struct GeneticSolver {
    config: GeneticConfig,
    rng: StdRng,
}

impl GeneticSolver {
    pub fn new(config: GeneticConfig, seed: Option<u64>) -> Result<Self> {
        if config.population_size == 0 {
            return Err(GameError::InvalidConfig("population must not be empty"));
        }
        if config.elite_size > config.population_size {
            return Err(GameError::InvalidConfig("elite size exceeds the population"));
        }
        if config.tournament_size == 0 || config.tournament_size > config.population_size {
            return Err(GameError::InvalidConfig("tournament size must lie within the population"));
        }
        Ok(Self { config, rng: seeded_rng(seed) })
    }

    fn breed(&mut self, ranked: &[(u32, Genome)]) -> Result<Vec<Genome>> {
        let mut next: Vec<Genome> =
            ranked.iter().take(self.config.elite_size).map(|(_, g)| g.clone()).collect();
        while next.len() < self.config.population_size {
            let first = tournament(&mut self.rng, ranked, self.config.tournament_size)?;
            let second = tournament(&mut self.rng, ranked, self.config.tournament_size)?;
            let mut child: Genome = first
                .iter()
                .zip(second)
                .map(|(&a, &b)| if self.rng.gen_bool(0.5) { a } else { b })
                .collect();
            let gene = self.rng.gen_range(0..child.len());
            child[gene] = !child[gene];
            next.push(child);
        }
        Ok(next)
    }
}

impl Solver for GeneticSolver {
    fn name(&self) -> &str {
        "genetic algorithm"
    }

    fn attempt(&mut self, board: &mut Board, cancel: &CancelToken) -> Result<Attempt> {
        let genes = board.size() * board.size();
        let mut population: Vec<Genome> = (0..self.config.population_size)
            .map(|_| (0..genes).map(|_| self.rng.gen_bool(0.5)).collect())
            .collect();

        for generation in 0..self.config.generations {
            if cancel.is_cancelled() {
                break;
            }
            let ranked = rank(board, population)?;
            debug!("generation {generation}: best fitness {}", ranked[0].0);
            if ranked[0].0 == 0 {
                let moves = apply(board, &ranked[0].1)?;
                return Ok(Attempt { status: SolveStatus::Solved, moves });
            }
            population = self.breed(&ranked)?;
        }

        // budget exhausted: leave the fittest assignment on the board rather
        // than discarding the search
        let ranked = rank(board, population)?;
        let moves = apply(board, &ranked[0].1)?;
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

// Deviation of a genome's row/column sums from the targets; lower is fitter.
fn fitness(board: &Board, genome: &Genome) -> Result<u32> {
    let size = board.size();
    let mut error = 0;
    for i in 0..size {
        let mut row_sum = 0;
        let mut col_sum = 0;
        for j in 0..size {
            if genome[i * size + j] {
                row_sum += board.value(i, j)?;
            }
            if genome[j * size + i] {
                col_sum += board.value(j, i)?;
            }
        }
        error += row_sum.abs_diff(board.row_targets()[i]);
        error += col_sum.abs_diff(board.col_targets()[i]);
    }
    Ok(error)
}

fn rank(board: &Board, population: Vec<Genome>) -> Result<Vec<(u32, Genome)>> {
    let mut ranked = Vec::with_capacity(population.len());
    for genome in population {
        ranked.push((fitness(board, &genome)?, genome));
    }
    ranked.sort_by_key(|(score, _)| *score);
    Ok(ranked)
}

fn tournament<'a>(
    rng: &mut StdRng,
    ranked: &'a [(u32, Genome)],
    size: usize,
) -> Result<&'a Genome> {
    ranked
        .choose_multiple(rng, size)
        .min_by_key(|(score, _)| *score)
        .map(|(_, genome)| genome)
        .ok_or(GameError::InvalidConfig("population must not be empty"))
}

fn apply(board: &mut Board, genome: &Genome) -> Result<usize> {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let state = if genome[row * size + col] {
                CellState::Included
            } else {
                CellState::Excluded
            };
            board.set_state(row, col, state)?;
        }
    }
    Ok(size * size)
}
