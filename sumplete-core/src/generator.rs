use rand::rngs::StdRng;
use rand::Rng;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::{GameError, Result};
use crate::seeded_rng;

#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Inclusive bounds for cell values.
    pub value_range: (u32, u32),
    /// Probability that a cell belongs to the hidden assignment.
    pub inclusion_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { value_range: (1, 9), inclusion_probability: 0.6 }
    }
}

pub struct PuzzleGenerator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: seeded_rng(seed), config: GeneratorConfig::default() }
    }

    pub fn with_config(seed: Option<u64>, config: GeneratorConfig) -> Result<Self> {
        let (low, high) = config.value_range;
        if low < 1 || low > high {
            return Err(GameError::InvalidValueRange);
        }
        if !(0.0..=1.0).contains(&config.inclusion_probability) {
            return Err(GameError::InvalidProbability);
        }
        Ok(Self { rng: seeded_rng(seed), config })
    }

    /// Fills a fresh board with independent value and hidden-flag draws; the
    /// targets derived from the hidden flags make the puzzle satisfiable by
    /// construction.
    pub fn generate(&mut self, size: usize) -> Result<Board> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        let (low, high) = self.config.value_range;
        let mut cells = Vec::with_capacity(size * size);
        for _ in 0..size * size {
            let value = self.rng.gen_range(low..=high);
            let solution = self.rng.gen_bool(self.config.inclusion_probability);
            cells.push(Cell::new(value, solution));
        }
        Board::from_cells(size, cells)
    }
}
