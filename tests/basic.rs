use pretty_assertions::assert_eq;
use sumplete::setup::{build_solver, SolverChoice, SolverParams};
use sumplete_core::{PuzzleGenerator, SolveSession, SolveStatus};

#[test]
fn manual_choice_builds_no_solver() {
    let params = SolverParams::default();
    assert!(build_solver(SolverChoice::Manual, &params).unwrap().is_none());
}

#[test]
fn every_automated_choice_builds_a_solver() {
    let params = SolverParams::default();
    for choice in [
        SolverChoice::Backtracking,
        SolverChoice::BacktrackingMrv,
        SolverChoice::BacktrackingLcv,
        SolverChoice::HillClimbing,
        SolverChoice::Annealing,
        SolverChoice::Genetic,
    ] {
        assert!(build_solver(choice, &params).unwrap().is_some());
    }
}

#[test]
fn backtracking_end_to_end() {
    let params = SolverParams { seed: Some(7), ..SolverParams::default() };
    let solver = build_solver(SolverChoice::BacktrackingLcv, &params).unwrap().unwrap();
    let mut generator = PuzzleGenerator::new(Some(7));
    let board = generator.generate(3).unwrap();
    let mut session = SolveSession::new(board, solver);
    let report = session.run().unwrap();
    assert_eq!(report.status, SolveStatus::Solved);
    assert!(session.board().is_solved());
}
