use std::collections::HashMap;
use std::path::PathBuf;

use tui_runner::config::{AppConfig, AudioMode};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.highscore_path, PathBuf::from("highscore.txt"));
    assert_eq!(cfg.journal_path, None);
    assert_eq!(cfg.audio, AudioMode::Bell);
    assert_eq!(cfg.tick_ms, 16);
    assert_eq!(cfg.session_config().base_scroll_speed, -6.0);
}

#[test]
fn overrides_are_applied() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("RUNNER_HIGHSCORE_PATH", "/tmp/hs.txt"),
        ("RUNNER_JOURNAL_PATH", " run.jsonl "),
        ("RUNNER_AUDIO", "off"),
        ("RUNNER_TICK_MS", "33"),
        ("RUNNER_START_SPEED", "8"),
    ]))
    .unwrap();
    assert_eq!(cfg.highscore_path, PathBuf::from("/tmp/hs.txt"));
    assert_eq!(cfg.journal_path, Some(PathBuf::from("run.jsonl")));
    assert_eq!(cfg.audio, AudioMode::Off);
    assert_eq!(cfg.tick_ms, 33);
    assert_eq!(cfg.session_config().base_scroll_speed, -8.0);
}

#[test]
fn blank_values_keep_defaults() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("RUNNER_JOURNAL_PATH", "   "),
        ("RUNNER_TICK_MS", ""),
    ]))
    .unwrap();
    assert_eq!(cfg.journal_path, None);
    assert_eq!(cfg.tick_ms, 16);
}

#[test]
fn invalid_values_are_errors() {
    for (key, value) in [
        ("RUNNER_AUDIO", "loud"),
        ("RUNNER_TICK_MS", "0"),
        ("RUNNER_TICK_MS", "101"),
        ("RUNNER_TICK_MS", "fast"),
        ("RUNNER_START_SPEED", "0"),
        ("RUNNER_START_SPEED", "-3"),
        ("RUNNER_START_SPEED", "10.5"),
        ("RUNNER_START_SPEED", "NaN"),
    ] {
        let err = AppConfig::from_lookup(lookup(&[(key, value)]));
        assert!(err.is_err(), "{key}={value} should be rejected");
    }
}

#[cfg(not(feature = "tone"))]
#[test]
fn tone_audio_needs_feature() {
    assert!(AppConfig::from_lookup(lookup(&[("RUNNER_AUDIO", "tone")])).is_err());
}
