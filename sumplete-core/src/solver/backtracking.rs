use crate::board::Board;
use crate::cell::CellState;
use crate::constraints;
use crate::error::Result;
use crate::solver::{Attempt, CancelToken, SolveStatus, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableOrdering {
    /// Row-major scan for the next undetermined cell.
    RowMajor,
    /// Fewest feasible values remaining, ties broken by the number of
    /// undetermined cells sharing a row or column.
    MrvDegree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrdering {
    /// Included first, then Excluded.
    Fixed,
    /// Least constraining value: the state overflowing fewer lines goes
    /// first.
    LeastConstraining,
}

/// Systematic depth-first search, complete on satisfiable puzzles.
pub struct BacktrackingSolver {
    variables: VariableOrdering,
    values: ValueOrdering,
    moves: usize,
}

impl BacktrackingSolver {
    pub fn new(variables: VariableOrdering, values: ValueOrdering) -> Self {
        Self { variables, values, moves: 0 }
    }

    pub fn naive() -> Self {
        Self::new(VariableOrdering::RowMajor, ValueOrdering::Fixed)
    }

    pub fn mrv_degree() -> Self {
        Self::new(VariableOrdering::MrvDegree, ValueOrdering::Fixed)
    }

    pub fn lcv() -> Self {
        Self::new(VariableOrdering::RowMajor, ValueOrdering::LeastConstraining)
    }

    fn search(&mut self, board: &mut Board, cancel: &CancelToken) -> Result<bool> {
        if cancel.is_cancelled() {
            return Ok(false);
        }
        let Some((row, col)) = self.select_cell(board)? else {
            return Ok(board.is_solved());
        };
        for state in self.order_values(board, row, col)? {
            board.set_state(row, col, state)?;
            self.moves += 1;
            if consistent(board, row, col)? && self.search(board, cancel)? {
                return Ok(true);
            }
            board.set_state(row, col, CellState::Undetermined)?;
        }
        Ok(false)
    }

    fn select_cell(&self, board: &mut Board) -> Result<Option<(usize, usize)>> {
        match self.variables {
            VariableOrdering::RowMajor => {
                for row in 0..board.size() {
                    for col in 0..board.size() {
                        if board.state(row, col)?.is_undetermined() {
                            return Ok(Some((row, col)));
                        }
                    }
                }
                Ok(None)
            }
            VariableOrdering::MrvDegree => {
                let mut selected = None;
                let mut fewest = usize::MAX;
                let mut best_degree = 0;
                for row in 0..board.size() {
                    for col in 0..board.size() {
                        if !board.state(row, col)?.is_undetermined() {
                            continue;
                        }
                        let remaining = feasible_values(board, row, col)?;
                        let degree = degree(board, row, col)?;
                        if remaining < fewest || (remaining == fewest && degree > best_degree) {
                            fewest = remaining;
                            best_degree = degree;
                            selected = Some((row, col));
                        }
                    }
                }
                Ok(selected)
            }
        }
    }

    fn order_values(&self, board: &mut Board, row: usize, col: usize) -> Result<[CellState; 2]> {
        match self.values {
            ValueOrdering::Fixed => Ok([CellState::Included, CellState::Excluded]),
            ValueOrdering::LeastConstraining => {
                let included = board.probe(row, col, CellState::Included, constraints::overflow_count)?;
                let excluded = board.probe(row, col, CellState::Excluded, constraints::overflow_count)?;
                // stable on ties: Included stays first
                if excluded < included {
                    Ok([CellState::Excluded, CellState::Included])
                } else {
                    Ok([CellState::Included, CellState::Excluded])
                }
            }
        }
    }
}

impl Solver for BacktrackingSolver {
    fn name(&self) -> &str {
        match (self.variables, self.values) {
            (VariableOrdering::RowMajor, ValueOrdering::Fixed) => "backtracking",
            (VariableOrdering::RowMajor, ValueOrdering::LeastConstraining) => "backtracking (LCV)",
            (VariableOrdering::MrvDegree, ValueOrdering::Fixed) => "backtracking (MRV+degree)",
            (VariableOrdering::MrvDegree, ValueOrdering::LeastConstraining) => {
                "backtracking (MRV+LCV)"
            }
        }
    }

    fn attempt(&mut self, board: &mut Board, cancel: &CancelToken) -> Result<Attempt> {
        self.moves = 0;
        let solved = self.search(board, cancel)?;
        let status = if solved {
            SolveStatus::Solved
        } else if cancel.is_cancelled() {
            SolveStatus::Aborted
        } else {
            SolveStatus::Unsolvable
        };
        Ok(Attempt { status, moves: self.moves })
    }
}

// Feasibility after an assignment: the touched row and column must stay under
// their targets, and a line with no undetermined cells left must hit its
// target exactly.
fn consistent(board: &Board, row: usize, col: usize) -> Result<bool> {
    if !constraints::is_row_feasible(board, row)? || !constraints::is_col_feasible(board, col)? {
        return Ok(false);
    }
    if constraints::is_row_complete(board, row)?
        && board.row_sum(row, CellState::is_included)? != board.row_targets()[row]
    {
        return Ok(false);
    }
    if constraints::is_col_complete(board, col)?
        && board.col_sum(col, CellState::is_included)? != board.col_targets()[col]
    {
        return Ok(false);
    }
    Ok(true)
}

// How many of Included/Excluded survive the feasibility check (0, 1, or 2).
fn feasible_values(board: &mut Board, row: usize, col: usize) -> Result<usize> {
    let mut count = 0;
    for state in [CellState::Included, CellState::Excluded] {
        let feasible = board.probe(row, col, state, |b| {
            Ok(constraints::is_row_feasible(b, row)? && constraints::is_col_feasible(b, col)?)
        })?;
        if feasible {
            count += 1;
        }
    }
    Ok(count)
}

// Undetermined cells sharing the row or column, the cell itself not counted.
fn degree(board: &Board, row: usize, col: usize) -> Result<usize> {
    let in_row = board.row_count(row, CellState::is_undetermined)?;
    let in_col = board.col_count(col, CellState::is_undetermined)?;
    Ok(in_row + in_col - 2)
}
