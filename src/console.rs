use chrono::Local;
use colored::*;
use sumplete_core::{SessionReport, SolveStatus};

/// One timestamped result line per game.
pub fn print_report(game: usize, total: usize, report: &SessionReport, color: bool) {
    let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
    if color {
        let status = match report.status {
            SolveStatus::Solved => report.status.to_string().green().bold(),
            SolveStatus::Unsolvable => report.status.to_string().red().bold(),
            _ => report.status.to_string().yellow().bold(),
        };
        println!(
            "[{ts}] game {game}/{total} ({}): {status}, {} moves, {:.2?}",
            report.solver, report.moves, report.elapsed
        );
    } else {
        println!(
            "[{ts}] game {game}/{total} ({}): {}, {} moves, {:.2?}",
            report.solver, report.status, report.moves, report.elapsed
        );
    }
}
