use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellState};
use crate::error::{GameError, Result};

/// Payload emitted to observers on every state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub row: usize,
    pub col: usize,
    pub old: CellState,
    pub new: CellState,
}

/// Receives state-change notifications. Presentation layers subscribe here;
/// nothing feeds back into solving logic.
pub trait BoardObserver {
    fn on_state_change(&mut self, change: StateChange);
}

/// The puzzle: an N x N grid of positive values with row/column target sums
/// derived once from the hidden generation assignment.
pub struct Board {
    size: usize,
    // row-major; idx = row * size + col
    cells: Vec<Cell>,
    row_targets: Vec<u32>,
    col_targets: Vec<u32>,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl Board {
    /// Builds a board from pre-drawn cells, deriving the targets from each
    /// cell's hidden flag.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        if cells.len() != size * size {
            return Err(GameError::ShapeMismatch);
        }
        if cells.iter().any(|c| c.value() == 0) {
            return Err(GameError::InvalidCellValue);
        }
        let mut row_targets = vec![0u32; size];
        let mut col_targets = vec![0u32; size];
        for row in 0..size {
            for col in 0..size {
                let cell = &cells[row * size + col];
                if cell.solution() {
                    row_targets[row] += cell.value();
                    col_targets[col] += cell.value();
                }
            }
        }
        Ok(Self { size, cells, row_targets, col_targets, observers: Vec::new() })
    }

    /// Convenience constructor from value and hidden-flag matrices.
    pub fn from_layout(values: Vec<Vec<u32>>, solution: Vec<Vec<bool>>) -> Result<Self> {
        let size = values.len();
        if solution.len() != size
            || values.iter().any(|row| row.len() != size)
            || solution.iter().any(|row| row.len() != size)
        {
            return Err(GameError::ShapeMismatch);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (value_row, flag_row) in values.iter().zip(&solution) {
            for (&value, &flag) in value_row.iter().zip(flag_row) {
                cells.push(Cell::new(value, flag));
            }
        }
        Self::from_cells(size, cells)
    }

    /// Builds an externally supplied puzzle with explicit targets. No hidden
    /// assignment exists behind such targets; they may be unsatisfiable.
    pub fn with_targets(
        values: Vec<Vec<u32>>,
        row_targets: Vec<u32>,
        col_targets: Vec<u32>,
    ) -> Result<Self> {
        let size = values.len();
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        if row_targets.len() != size
            || col_targets.len() != size
            || values.iter().any(|row| row.len() != size)
        {
            return Err(GameError::ShapeMismatch);
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in &values {
            for &value in row {
                if value == 0 {
                    return Err(GameError::InvalidCellValue);
                }
                cells.push(Cell::new(value, false));
            }
        }
        Ok(Self { size, cells, row_targets, col_targets, observers: Vec::new() })
    }

    /// Parses a puzzle from text: N value rows, then a row-target line, then
    /// a column-target line, all whitespace separated.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() < 3 {
            anyhow::bail!("expected value rows followed by row and column target lines");
        }
        let size = lines.len() - 2;
        let numbers = |line: &str| -> anyhow::Result<Vec<u32>> {
            line.split_whitespace()
                .map(|tok| tok.parse::<u32>().map_err(|_| anyhow::anyhow!("invalid number {tok:?}")))
                .collect()
        };
        let mut values = Vec::with_capacity(size);
        for line in &lines[..size] {
            let row = numbers(line)?;
            if row.len() != size {
                anyhow::bail!("expected {} values per row, got {}", size, row.len());
            }
            values.push(row);
        }
        let row_targets = numbers(lines[size])?;
        let col_targets = numbers(lines[size + 1])?;
        if row_targets.len() != size || col_targets.len() != size {
            anyhow::bail!("target lines must each hold {} numbers", size);
        }
        Ok(Self::with_targets(values, row_targets, col_targets)?)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row_targets(&self) -> &[u32] {
        &self.row_targets
    }

    pub fn col_targets(&self) -> &[u32] {
        &self.col_targets
    }

    pub fn subscribe(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    pub fn value(&self, row: usize, col: usize) -> Result<u32> {
        self.check(row, col)?;
        Ok(self.cells[row * self.size + col].value())
    }

    pub fn state(&self, row: usize, col: usize) -> Result<CellState> {
        self.check(row, col)?;
        Ok(self.cells[row * self.size + col].state())
    }

    /// Mutates exactly one cell. Targets may be violated transiently; only
    /// the coordinates are validated. Observers are notified on every call.
    pub fn set_state(&mut self, row: usize, col: usize, state: CellState) -> Result<StateChange> {
        self.check(row, col)?;
        let cell = &mut self.cells[row * self.size + col];
        let old = cell.state();
        cell.set_state(state);
        let change = StateChange { row, col, old, new: state };
        for observer in &mut self.observers {
            observer.on_state_change(change);
        }
        Ok(change)
    }

    /// Flips a cell between Included and Excluded (Undetermined toggles to
    /// Included).
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<StateChange> {
        let state = self.state(row, col)?.toggled();
        self.set_state(row, col, state)
    }

    /// Trial-assigns a state, evaluates, and restores the previous state on
    /// every exit path.
    pub fn probe<T>(
        &mut self,
        row: usize,
        col: usize,
        state: CellState,
        eval: impl FnOnce(&Board) -> Result<T>,
    ) -> Result<T> {
        let old = self.set_state(row, col, state)?.old;
        let outcome = eval(self);
        self.set_state(row, col, old)?;
        outcome
    }

    /// Sum of `value` over cells in the row whose state satisfies the
    /// predicate.
    pub fn row_sum(&self, row: usize, pred: impl Fn(CellState) -> bool) -> Result<u32> {
        self.check(row, 0)?;
        Ok(self.row(row).filter(|c| pred(c.state())).map(Cell::value).sum())
    }

    pub fn col_sum(&self, col: usize, pred: impl Fn(CellState) -> bool) -> Result<u32> {
        self.check(0, col)?;
        Ok(self.col(col).filter(|c| pred(c.state())).map(Cell::value).sum())
    }

    /// Number of cells in the row whose state satisfies the predicate.
    pub fn row_count(&self, row: usize, pred: impl Fn(CellState) -> bool) -> Result<usize> {
        self.check(row, 0)?;
        Ok(self.row(row).filter(|c| pred(c.state())).count())
    }

    pub fn col_count(&self, col: usize, pred: impl Fn(CellState) -> bool) -> Result<usize> {
        self.check(0, col)?;
        Ok(self.col(col).filter(|c| pred(c.state())).count())
    }

    pub fn is_fully_determined(&self) -> bool {
        self.cells.iter().all(|c| !c.state().is_undetermined())
    }

    /// The win check: fully determined and every row/column included-sum hits
    /// its target. Pure; repeated calls never change the board.
    pub fn is_solved(&self) -> bool {
        if !self.is_fully_determined() {
            return false;
        }
        (0..self.size).all(|i| {
            included_sum(self.row(i)) == self.row_targets[i]
                && included_sum(self.col(i)) == self.col_targets[i]
        })
    }

    /// Applies the assignment the targets were derived from. Boards built
    /// from explicit targets carry no such assignment and reveal to
    /// all-excluded.
    pub fn reveal_solution(&mut self) -> Result<()> {
        for row in 0..self.size {
            for col in 0..self.size {
                let state = if self.cells[row * self.size + col].solution() {
                    CellState::Included
                } else {
                    CellState::Excluded
                };
                self.set_state(row, col, state)?;
            }
        }
        Ok(())
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(())
    }

    fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        self.cells[row * self.size..(row + 1) * self.size].iter()
    }

    fn col(&self, col: usize) -> impl Iterator<Item = &Cell> {
        self.cells.iter().skip(col).step_by(self.size)
    }
}

fn included_sum<'a>(line: impl Iterator<Item = &'a Cell>) -> u32 {
    line.filter(|c| c.state().is_included()).map(Cell::value).sum()
}

impl Clone for Board {
    fn clone(&self) -> Self {
        // observers stay with the original
        Self {
            size: self.size,
            cells: self.cells.clone(),
            row_targets: self.row_targets.clone(),
            col_targets: self.col_targets.clone(),
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("cells", &self.cells)
            .field("row_targets", &self.row_targets)
            .field("col_targets", &self.col_targets)
            .finish_non_exhaustive()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = &self.cells[row * self.size + col];
                let marker = match cell.state() {
                    CellState::Included => '○',
                    CellState::Excluded => '×',
                    CellState::Undetermined => '·',
                };
                write!(f, "{:>3}{} ", cell.value(), marker)?;
            }
            writeln!(f, "| {}", self.row_targets[row])?;
        }
        for col in 0..self.size {
            write!(f, "{:>3}  ", self.col_targets[col])?;
        }
        writeln!(f)
    }
}
