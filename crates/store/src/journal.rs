//! Session journal: one JSON object per line.
//!
//! Records carry the session clock and the episode id next to the event
//! fields. Writing is best-effort; the first failed write turns the journal
//! off for the rest of the session.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameSession, ScoreStore};
use crate::types::SessionEvent;

/// Session lifecycle entries written around the gameplay events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Lifecycle {
    SessionStart { high_score: u32 },
    SessionQuit { score: u32, high_score: u32 },
}

#[derive(Serialize)]
struct Record<'a, E: Serialize> {
    t_ms: u64,
    episode: u32,
    #[serde(flatten)]
    entry: &'a E,
}

pub struct Journal<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
    written: u64,
}

impl Journal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening journal {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// A journal that drops everything.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            written: 0,
        }
    }
}

impl<W: Write> Journal<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
            written: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Number of records successfully written.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn event(&mut self, t_ms: u64, episode: u32, event: &SessionEvent) {
        self.write(t_ms, episode, event);
    }

    pub fn lifecycle(&mut self, t_ms: u64, episode: u32, entry: Lifecycle) {
        self.write(t_ms, episode, &entry);
    }

    /// Record `event` stamped with the session's own clock and episode.
    pub fn session_event<S: ScoreStore>(&mut self, session: &GameSession<S>, event: &SessionEvent) {
        self.write(session.elapsed_ms(), session.episode_id(), event);
    }

    /// Record `entry` stamped with the session's own clock and episode.
    pub fn session_lifecycle<S: ScoreStore>(&mut self, session: &GameSession<S>, entry: Lifecycle) {
        self.write(session.elapsed_ms(), session.episode_id(), &entry);
    }

    fn write<E: Serialize>(&mut self, t_ms: u64, episode: u32, entry: &E) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        let record = Record {
            t_ms,
            episode,
            entry,
        };
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).and_then(|_| out.flush()).is_err() {
            self.out = None;
            return;
        }
        self.written += 1;
    }

    /// Stop journalling and hand back the writer, if it is still healthy.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(j: Journal<Vec<u8>>) -> Vec<serde_json::Value> {
        let bytes = j.into_inner().unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_event_record_shape() {
        let mut j = Journal::from_writer(Vec::new());
        j.event(1600, 2, &SessionEvent::ObstaclePassed { score: 30 });
        let recs = lines(j);
        assert_eq!(
            recs[0],
            serde_json::json!({"t_ms": 1600, "episode": 2, "event": "obstacle_passed", "score": 30})
        );
    }

    #[test]
    fn test_lifecycle_records() {
        let mut j = Journal::from_writer(Vec::new());
        j.lifecycle(0, 0, Lifecycle::SessionStart { high_score: 90 });
        j.event(16, 0, &SessionEvent::Jumped);
        j.lifecycle(
            5000,
            0,
            Lifecycle::SessionQuit {
                score: 20,
                high_score: 90,
            },
        );
        assert_eq!(j.written(), 3);
        let recs = lines(j);
        assert_eq!(recs[0]["event"], "session_start");
        assert_eq!(recs[1]["event"], "jumped");
        assert_eq!(recs[2]["event"], "session_quit");
        assert_eq!(recs[2]["score"], 20);
    }

    #[test]
    fn test_session_records_use_session_clock() {
        let mut s = GameSession::in_memory();
        for _ in 0..10 {
            s.tick(16);
        }
        let mut j = Journal::from_writer(Vec::new());
        j.session_lifecycle(&s, Lifecycle::SessionStart { high_score: 0 });
        j.session_event(&s, &SessionEvent::Jumped);
        let recs = lines(j);
        assert_eq!(recs[0]["t_ms"], 160);
        assert_eq!(recs[1]["t_ms"], 160);
        assert_eq!(recs[1]["episode"], 0);
    }

    #[test]
    fn test_write_failure_disables() {
        let mut j = Journal::from_writer(Broken);
        j.event(0, 0, &SessionEvent::Jumped);
        assert!(!j.is_enabled());
        assert_eq!(j.written(), 0);
        j.event(16, 0, &SessionEvent::Jumped);
        assert_eq!(j.written(), 0);
    }

    #[test]
    fn test_disabled_journal_is_silent() {
        let mut j = Journal::disabled();
        j.event(0, 0, &SessionEvent::Jumped);
        assert!(!j.is_enabled());
        assert_eq!(j.written(), 0);
    }
}
