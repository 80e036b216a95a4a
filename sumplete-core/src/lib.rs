pub mod board;
pub mod cell;
pub mod constraints;
pub mod error;
pub mod generator;
pub mod report;
pub mod session;
pub mod solver;

pub use board::{Board, BoardObserver, StateChange};
pub use cell::{Cell, CellState};
pub use error::{GameError, Result};
pub use generator::{GeneratorConfig, PuzzleGenerator};
pub use session::{SessionReport, SolveSession};
pub use solver::{Attempt, CancelToken, SolveStatus, Solver};

pub(crate) fn seeded_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_entropy(),
    }
}
