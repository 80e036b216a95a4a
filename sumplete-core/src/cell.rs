use serde::{Deserialize, Serialize};

/// Player/solver-visible marking of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Undetermined,
    Included,
    Excluded,
}

impl CellState {
    pub fn is_undetermined(self) -> bool {
        matches!(self, Self::Undetermined)
    }

    pub fn is_included(self) -> bool {
        matches!(self, Self::Included)
    }

    pub fn is_excluded(self) -> bool {
        matches!(self, Self::Excluded)
    }

    /// The state a toggle moves to. Undetermined counts as excluded, so it
    /// toggles to Included; toggling never re-enters Undetermined.
    pub fn toggled(self) -> CellState {
        match self {
            Self::Included => Self::Excluded,
            Self::Undetermined | Self::Excluded => Self::Included,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Undetermined
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: u32,
    solution: bool,
    state: CellState,
}

impl Cell {
    pub fn new(value: u32, solution: bool) -> Self {
        Self { value, solution, state: CellState::Undetermined }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    // the hidden generation flag; only target derivation and reveal read it
    pub(crate) fn solution(&self) -> bool {
        self.solution
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}
