use std::time::Duration;

use sumplete_core::report::{load_history, save_history, HistoryEntry};
use sumplete_core::{SessionReport, SolveStatus};

#[test]
fn history_round_trips_through_json() {
    let path = std::env::temp_dir().join(format!("sumplete_history_{}.json", std::process::id()));

    let report = SessionReport {
        solver: "hill climbing".to_string(),
        status: SolveStatus::Solved,
        moves: 42,
        elapsed: Duration::from_millis(17),
    };
    let entries = vec![HistoryEntry::new(&report, 4, Some(7))];
    save_history(&path, &entries).unwrap();

    let loaded = load_history(&path);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].solver, "hill climbing");
    assert_eq!(loaded[0].size, 4);
    assert_eq!(loaded[0].seed, Some(7));
    assert!(loaded[0].solved);
    assert_eq!(loaded[0].moves, 42);
    assert_eq!(loaded[0].time_ms, 17);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_history_loads_as_empty() {
    let path = std::env::temp_dir().join("sumplete_history_does_not_exist.json");
    assert!(load_history(path).is_empty());
}
