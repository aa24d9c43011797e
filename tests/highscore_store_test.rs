use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tui_runner::core::{GameSession, ScoreStore, SessionConfig};
use tui_runner::store::FileScoreStore;
use tui_runner::types::TICK_MS;

fn temp_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir().join(format!(
        "tui-runner-{tag}-{}-{nanos}.txt",
        std::process::id()
    ))
}

#[test]
fn missing_file_loads_zero() {
    let path = temp_path("missing");
    let mut store = FileScoreStore::new(&path);
    assert_eq!(store.load(), 0);
    assert!(store.try_load().is_err());
}

#[test]
fn garbage_file_loads_zero() {
    let path = temp_path("garbage");
    fs::write(&path, "not a number").unwrap();
    let mut store = FileScoreStore::new(&path);
    assert_eq!(store.load(), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn save_overwrites_whole_file() {
    let path = temp_path("overwrite");
    fs::write(&path, "99999 stale trailing data\n").unwrap();
    let mut store = FileScoreStore::new(&path);
    assert_eq!(store.load(), 99999);

    store.save(120);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "120");
    assert_eq!(store.load(), 120);
    let _ = fs::remove_file(&path);
}

#[test]
fn save_to_unwritable_path_is_silent() {
    let path = std::env::temp_dir()
        .join("tui-runner-no-such-dir")
        .join("deeper")
        .join("highscore.txt");
    let mut store = FileScoreStore::new(&path);
    store.save(50);
    assert!(store.try_save(50).is_err());
    assert_eq!(store.load(), 0);
}

#[test]
fn session_reads_persisted_high_score() {
    let path = temp_path("session");
    fs::write(&path, "70").unwrap();

    let mut s = GameSession::new(SessionConfig::default(), FileScoreStore::new(&path));
    assert_eq!(s.high_score(), 70);

    // Score 0 never beats the record; the file stays as it was.
    while !s.game_over() {
        s.tick(TICK_MS);
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "70");
    let _ = fs::remove_file(&path);
}
