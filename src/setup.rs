use anyhow::Result;
use clap::ValueEnum;
use sumplete_core::solver::{
    AnnealingConfig, BacktrackingSolver, GeneticConfig, GeneticSolver, HillClimbingSolver,
    SimulatedAnnealingSolver, Solver,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SolverChoice {
    /// No automated solver; just show the puzzle.
    Manual,
    Backtracking,
    BacktrackingMrv,
    BacktrackingLcv,
    HillClimbing,
    Annealing,
    Genetic,
}

/// Tuning knobs collected from the command line; defaults match the
/// reference settings.
#[derive(Clone, Debug)]
pub struct SolverParams {
    pub seed: Option<u64>,
    pub temperature: f64,
    pub cooling: f64,
    pub iterations: usize,
    pub population: usize,
    pub generations: usize,
    pub elite: usize,
    pub tournament: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            seed: None,
            temperature: 100.0,
            cooling: 0.99,
            iterations: 1000,
            population: 50,
            generations: 100,
            elite: 10,
            tournament: 25,
        }
    }
}

/// Maps a CLI choice to a boxed solver; `Manual` maps to no solver at all.
pub fn build_solver(choice: SolverChoice, params: &SolverParams) -> Result<Option<Box<dyn Solver>>> {
    let solver: Box<dyn Solver> = match choice {
        SolverChoice::Manual => return Ok(None),
        SolverChoice::Backtracking => Box::new(BacktrackingSolver::naive()),
        SolverChoice::BacktrackingMrv => Box::new(BacktrackingSolver::mrv_degree()),
        SolverChoice::BacktrackingLcv => Box::new(BacktrackingSolver::lcv()),
        SolverChoice::HillClimbing => Box::new(HillClimbingSolver::new(params.seed)),
        SolverChoice::Annealing => Box::new(SimulatedAnnealingSolver::new(
            AnnealingConfig {
                initial_temperature: params.temperature,
                cooling_rate: params.cooling,
                max_iterations: params.iterations,
            },
            params.seed,
        )?),
        SolverChoice::Genetic => Box::new(GeneticSolver::new(
            GeneticConfig {
                population_size: params.population,
                generations: params.generations,
                elite_size: params.elite,
                tournament_size: params.tournament,
            },
            params.seed,
        )?),
    };
    Ok(Some(solver))
}
