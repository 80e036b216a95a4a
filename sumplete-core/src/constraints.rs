//! Stateless constraint evaluation shared by every search strategy.

use crate::board::Board;
use crate::cell::CellState;
use crate::error::Result;

/// Number of rows and columns (0..2N) whose included-sum misses its target.
/// Undetermined cells count as excluded. Hill climbing's objective.
pub fn violation_count(board: &Board) -> Result<usize> {
    let mut violations = 0;
    for i in 0..board.size() {
        if board.row_sum(i, CellState::is_included)? != board.row_targets()[i] {
            violations += 1;
        }
        if board.col_sum(i, CellState::is_included)? != board.col_targets()[i] {
            violations += 1;
        }
    }
    Ok(violations)
}

/// Sum of absolute included-sum/target gaps over all rows and columns; the
/// smoother objective used by annealing and the genetic fitness.
pub fn total_deviation(board: &Board) -> Result<u32> {
    let mut error = 0;
    for i in 0..board.size() {
        error += board.row_sum(i, CellState::is_included)?.abs_diff(board.row_targets()[i]);
        error += board.col_sum(i, CellState::is_included)?.abs_diff(board.col_targets()[i]);
    }
    Ok(error)
}

/// Rows and columns whose included-sum already exceeds its target; the
/// least-constraining-value scoring signal.
pub fn overflow_count(board: &Board) -> Result<usize> {
    let mut overflows = 0;
    for i in 0..board.size() {
        if board.row_sum(i, CellState::is_included)? > board.row_targets()[i] {
            overflows += 1;
        }
        if board.col_sum(i, CellState::is_included)? > board.col_targets()[i] {
            overflows += 1;
        }
    }
    Ok(overflows)
}

// Necessary-but-not-sufficient pruning condition: only inclusion can grow a
// line sum, so a sum past its target can never recover.
pub fn is_row_feasible(board: &Board, row: usize) -> Result<bool> {
    Ok(board.row_sum(row, CellState::is_included)? <= board.row_targets()[row])
}

pub fn is_col_feasible(board: &Board, col: usize) -> Result<bool> {
    Ok(board.col_sum(col, CellState::is_included)? <= board.col_targets()[col])
}

/// A complete line warrants an exact-sum check instead of feasibility.
pub fn is_row_complete(board: &Board, row: usize) -> Result<bool> {
    Ok(board.row_count(row, CellState::is_undetermined)? == 0)
}

pub fn is_col_complete(board: &Board, col: usize) -> Result<bool> {
    Ok(board.col_count(col, CellState::is_undetermined)? == 0)
}
