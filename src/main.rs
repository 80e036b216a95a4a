use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use itertools::Itertools;
use std::{fs, path::PathBuf};
use sumplete::console;
use sumplete::setup::{build_solver, SolverChoice, SolverParams};
use sumplete_core::report::{self, HistoryEntry, ReportWriter};
use sumplete_core::{Board, BoardObserver, GeneratorConfig, PuzzleGenerator, SolveSession, StateChange};

#[derive(Parser, Debug)]
#[command(name = "sumplete", version, about = "Sumplete puzzle generator and solver suite")]
struct Cli {
    /// Grid size (N for an NxN puzzle)
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Seed for puzzle generation and stochastic solvers
    #[arg(long)]
    seed: Option<u64>,

    /// Puzzle file (N value rows, a row-target line, a column-target line).
    /// Replaces generation.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Solver to run
    #[arg(short = 'a', long, value_enum, default_value_t = SolverChoice::HillClimbing)]
    solver: SolverChoice,

    /// Number of puzzles to generate and solve
    #[arg(short = 'n', long, default_value_t = 1)]
    games: usize,

    /// Smallest cell value the generator draws
    #[arg(long, default_value_t = 1)]
    min_value: u32,

    /// Largest cell value the generator draws
    #[arg(long, default_value_t = 9)]
    max_value: u32,

    /// Probability that a cell belongs to the hidden assignment
    #[arg(long, default_value_t = 0.6)]
    inclusion: f64,

    /// Simulated annealing: initial temperature
    #[arg(long, default_value_t = 100.0)]
    temperature: f64,

    /// Simulated annealing: cooling rate per iteration
    #[arg(long, default_value_t = 0.99)]
    cooling: f64,

    /// Simulated annealing: iteration cap
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Genetic algorithm: population size
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// Genetic algorithm: generation cap
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Genetic algorithm: elite carryover per generation
    #[arg(long, default_value_t = 10)]
    elite: usize,

    /// Genetic algorithm: tournament sample size
    #[arg(long, default_value_t = 25)]
    tournament: usize,

    /// Print every cell state change while solving
    #[arg(long)]
    trace: bool,

    /// Directory for per-session markdown reports
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// JSON file accumulating session history across runs
    #[arg(long)]
    history: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

struct TracePrinter;

impl BoardObserver for TracePrinter {
    fn on_state_change(&mut self, change: StateChange) {
        let line = format!(
            "({}, {}) {:?} -> {:?}",
            change.row, change.col, change.old, change.new
        );
        println!("{}", line.dimmed());
    }
}

fn read_board(path: &PathBuf) -> Result<Board> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Board::parse(&text).context("parse puzzle")
}

fn print_puzzle(board: &Board) {
    println!("{board}");
    println!("row targets: {}", board.row_targets().iter().join(", "));
    println!("column targets: {}", board.col_targets().iter().join(", "));
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GeneratorConfig {
        value_range: (cli.min_value, cli.max_value),
        inclusion_probability: cli.inclusion,
    };
    let mut generator = PuzzleGenerator::with_config(cli.seed, config)?;
    let params = SolverParams {
        seed: cli.seed,
        temperature: cli.temperature,
        cooling: cli.cooling,
        iterations: cli.iterations,
        population: cli.population,
        generations: cli.generations,
        elite: cli.elite,
        tournament: cli.tournament,
    };
    let mut writer = match &cli.report_dir {
        Some(dir) => Some(ReportWriter::new(dir).context("create report directory")?),
        None => None,
    };

    for game in 1..=cli.games {
        let mut board = match &cli.input {
            Some(path) => read_board(path)?,
            None => generator.generate(cli.size)?,
        };
        if cli.trace {
            board.subscribe(Box::new(TracePrinter));
        }

        let Some(solver) = build_solver(cli.solver, &params)? else {
            print_puzzle(&board);
            continue;
        };

        let mut session = SolveSession::new(board, solver);
        let report = session.run()?;
        console::print_report(game, cli.games, &report, !cli.no_color);
        println!("{}", session.board());

        if let Some(writer) = writer.as_mut() {
            writer.write_report(&report, session.board()).context("write session report")?;
        }
        if let Some(path) = &cli.history {
            let mut entries = report::load_history(path);
            entries.push(HistoryEntry::new(&report, session.board().size(), cli.seed));
            report::save_history(path, &entries).context("save history")?;
        }
    }
    Ok(())
}
