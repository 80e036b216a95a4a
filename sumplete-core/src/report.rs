use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::board::Board;
use crate::session::SessionReport;

/// Writes numbered per-session markdown reports into a directory, continuing
/// the numbering across runs.
pub struct ReportWriter {
    root: PathBuf,
    index: usize,
}

impl ReportWriter {
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        // Determine next index by scanning existing files
        let mut max_idx = 0usize;
        if let Ok(rd) = fs::read_dir(&root) {
            for e in rd.flatten() {
                if let Some(name) = e.file_name().to_str() {
                    if let Some(num) = name
                        .strip_prefix("session")
                        .and_then(|s| s.strip_suffix(".md"))
                        .and_then(|n| n.parse::<usize>().ok())
                    {
                        if num > max_idx {
                            max_idx = num;
                        }
                    }
                }
            }
        }
        Ok(Self { root, index: max_idx })
    }

    fn next_file(&mut self) -> PathBuf {
        self.index += 1;
        self.root.join(format!("session{}.md", self.index))
    }

    pub fn write_report(
        &mut self,
        report: &SessionReport,
        board: &Board,
    ) -> std::io::Result<PathBuf> {
        let path = self.next_file();
        let mut f = OpenOptions::new().create(true).write(true).open(&path)?;
        let ts_fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        let now = OffsetDateTime::now_utc().format(&ts_fmt).unwrap_or_else(|_| "unknown".into());
        writeln!(f, "# {} session", report.solver)?;
        writeln!(f, "Timestamp: {} UTC", now)?;
        writeln!(f, "Status: {}", report.status)?;
        writeln!(f, "Moves: {}", report.moves)?;
        writeln!(f, "Elapsed: {:.3?}", report.elapsed)?;
        writeln!(f, "\n```\n{}```", board)?;
        Ok(path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub solver: String,
    pub size: usize,
    pub seed: Option<u64>,
    pub solved: bool,
    pub moves: usize,
    pub time_ms: u128,
    pub date_utc: String,
}

impl HistoryEntry {
    pub fn new(report: &SessionReport, size: usize, seed: Option<u64>) -> Self {
        let ts_fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        let date_utc =
            OffsetDateTime::now_utc().format(&ts_fmt).unwrap_or_else(|_| "unknown".into());
        Self {
            solver: report.solver.clone(),
            size,
            seed,
            solved: report.status.is_solved(),
            moves: report.moves,
            time_ms: report.elapsed.as_millis(),
            date_utc,
        }
    }
}

pub fn load_history<P: AsRef<Path>>(path: P) -> Vec<HistoryEntry> {
    match fs::read_to_string(path) {
        Ok(s) => serde_json::from_str::<Vec<HistoryEntry>>(&s).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

pub fn save_history<P: AsRef<Path>>(path: P, entries: &[HistoryEntry]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(entries).unwrap();
    fs::write(path, json)
}
