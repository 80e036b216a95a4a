use sumplete_core::solver::{
    AnnealingConfig, BacktrackingSolver, GeneticConfig, GeneticSolver, HillClimbingSolver,
    SimulatedAnnealingSolver, ValueOrdering, VariableOrdering,
};
use sumplete_core::{
    Board, CancelToken, CellState, PuzzleGenerator, SolveSession, SolveStatus, Solver,
};

fn diagonal_board() -> Board {
    Board::from_layout(
        vec![vec![3, 5], vec![2, 4]],
        vec![vec![true, false], vec![false, true]],
    )
    .expect("layout")
}

fn single_cell_board(value: u32, included: bool) -> Board {
    Board::from_layout(vec![vec![value]], vec![vec![included]]).expect("layout")
}

fn backtracking_variants() -> Vec<BacktrackingSolver> {
    vec![
        BacktrackingSolver::naive(),
        BacktrackingSolver::mrv_degree(),
        BacktrackingSolver::lcv(),
        BacktrackingSolver::new(VariableOrdering::MrvDegree, ValueOrdering::LeastConstraining),
    ]
}

#[test]
fn backtracking_is_complete_on_generated_boards() {
    let cancel = CancelToken::new();
    for size in [2, 3, 4] {
        for seed in [1u64, 9, 23] {
            for mut solver in backtracking_variants() {
                let mut generator = PuzzleGenerator::new(Some(seed));
                let mut board = generator.generate(size).unwrap();
                let attempt = solver.attempt(&mut board, &cancel).unwrap();
                assert_eq!(
                    attempt.status,
                    SolveStatus::Solved,
                    "{} must solve a generated {size}x{size} board (seed {seed})",
                    solver.name()
                );
                assert!(board.is_solved());
                assert!(attempt.moves > 0);
            }
        }
    }
}

#[test]
fn backtracking_solves_the_worked_example() {
    let cancel = CancelToken::new();
    let mut board = diagonal_board();
    let attempt = BacktrackingSolver::naive().attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Solved);
    assert_eq!(board.row_sum(0, CellState::is_included).unwrap(), 3);
    assert_eq!(board.row_sum(1, CellState::is_included).unwrap(), 4);
    assert_eq!(board.col_sum(0, CellState::is_included).unwrap(), 3);
    assert_eq!(board.col_sum(1, CellState::is_included).unwrap(), 4);
}

#[test]
fn backtracking_reports_unsatisfiable_targets() {
    let cancel = CancelToken::new();
    let mut board = Board::with_targets(vec![vec![1]], vec![5], vec![5]).unwrap();
    let attempt = BacktrackingSolver::naive().attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Unsolvable);
}

#[test]
fn hill_climbing_descends_to_the_diagonal_solution() {
    // every greedy step on this board strictly improves, no restart needed
    let cancel = CancelToken::new();
    let mut board = diagonal_board();
    let attempt = HillClimbingSolver::new(Some(5)).attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Solved);
    assert!(board.is_solved());
}

#[test]
fn hill_climbing_solves_single_cell_boards_immediately() {
    let cancel = CancelToken::new();
    for included in [true, false] {
        let mut board = single_cell_board(7, included);
        let attempt = HillClimbingSolver::new(Some(1)).attempt(&mut board, &cancel).unwrap();
        assert_eq!(attempt.status, SolveStatus::Solved);
        assert!(board.is_solved());
    }
}

#[test]
fn annealing_solves_single_cell_boards_immediately() {
    let cancel = CancelToken::new();

    let mut board = single_cell_board(7, true);
    let mut solver = SimulatedAnnealingSolver::new(AnnealingConfig::default(), Some(1)).unwrap();
    let attempt = solver.attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Solved);
    assert_eq!(attempt.moves, 2);

    // target 0: already solved once normalized, before any toggle
    let mut board = single_cell_board(4, false);
    let attempt = solver.attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Solved);
    assert_eq!(attempt.moves, 1);
}

#[test]
fn annealing_keeps_best_effort_state_on_exhausted_budget() {
    let cancel = CancelToken::new();
    let config = AnnealingConfig { max_iterations: 0, ..AnnealingConfig::default() };
    let mut solver = SimulatedAnnealingSolver::new(config, Some(2)).unwrap();
    let mut board = diagonal_board();
    let attempt = solver.attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::BudgetExhausted);
    assert!(board.is_fully_determined());
    assert!(!board.is_solved());
}

#[test]
fn annealing_rejects_bad_configuration() {
    let bad_cooling = AnnealingConfig { cooling_rate: 1.0, ..AnnealingConfig::default() };
    assert!(SimulatedAnnealingSolver::new(bad_cooling, None).is_err());
    let bad_temperature =
        AnnealingConfig { initial_temperature: 0.0, ..AnnealingConfig::default() };
    assert!(SimulatedAnnealingSolver::new(bad_temperature, None).is_err());
}

#[test]
fn genetic_solves_single_cell_boards_in_the_first_generation() {
    let cancel = CancelToken::new();
    let mut board = single_cell_board(7, true);
    let mut solver = GeneticSolver::new(GeneticConfig::default(), Some(1)).unwrap();
    let attempt = solver.attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Solved);
    assert!(board.is_solved());
}

#[test]
fn genetic_evolves_the_diagonal_solution() {
    let cancel = CancelToken::new();
    let mut board = diagonal_board();
    let mut solver = GeneticSolver::new(GeneticConfig::default(), Some(3)).unwrap();
    let attempt = solver.attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Solved);
    assert!(board.is_solved());
}

#[test]
fn genetic_rejects_bad_configuration() {
    let oversized_tournament =
        GeneticConfig { tournament_size: 51, ..GeneticConfig::default() };
    assert!(GeneticSolver::new(oversized_tournament, None).is_err());
    let empty_population = GeneticConfig { population_size: 0, ..GeneticConfig::default() };
    assert!(GeneticSolver::new(empty_population, None).is_err());
}

#[test]
fn cancellation_aborts_before_any_search() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let mut board = diagonal_board();
    let attempt = BacktrackingSolver::naive().attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Aborted);

    let mut board = diagonal_board();
    let attempt = HillClimbingSolver::new(Some(1)).attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::Aborted);
}

#[test]
fn hill_climbing_exhausts_budget_on_unsatisfiable_targets() {
    let cancel = CancelToken::new();
    let mut board = Board::with_targets(vec![vec![1]], vec![5], vec![5]).unwrap();
    let attempt = HillClimbingSolver::new(Some(4)).attempt(&mut board, &cancel).unwrap();
    assert_eq!(attempt.status, SolveStatus::BudgetExhausted);
    assert!(board.is_fully_determined());
}

#[test]
fn session_reports_outcome_moves_and_time() {
    let mut generator = PuzzleGenerator::new(Some(11));
    let board = generator.generate(3).unwrap();
    let mut session = SolveSession::new(board, Box::new(BacktrackingSolver::lcv()));
    let report = session.run().unwrap();
    assert_eq!(report.status, SolveStatus::Solved);
    assert!(report.moves > 0);
    assert!(session.board().is_solved());
    assert_eq!(report.solver, "backtracking (LCV)");
}

#[test]
fn session_cancel_token_aborts_the_run() {
    let mut generator = PuzzleGenerator::new(Some(11));
    let board = generator.generate(3).unwrap();
    let mut session = SolveSession::new(board, Box::new(BacktrackingSolver::naive()));
    session.cancel_token().cancel();
    let report = session.run().unwrap();
    assert_eq!(report.status, SolveStatus::Aborted);
}
