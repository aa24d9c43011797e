//! High score persisted as a plain decimal integer in a text file.
//!
//! Reading is lenient: a missing, empty or garbled file counts as 0, and only
//! the first whitespace-separated token is considered. Writing replaces the
//! whole file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::ScoreStore;

pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.txt";

#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored value, surfacing I/O and parse errors.
    pub fn try_load(&self) -> io::Result<u32> {
        let text = fs::read_to_string(&self.path)?;
        parse_high_score(&text)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "no high score in file"))
    }

    /// Overwrite the file with `high_score`.
    pub fn try_save(&self, high_score: u32) -> io::Result<()> {
        fs::write(&self.path, format!("{high_score}\n"))
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORE_PATH)
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> u32 {
        self.try_load().unwrap_or(0)
    }

    fn save(&mut self, high_score: u32) {
        let _ = self.try_save(high_score);
    }
}

fn parse_high_score(text: &str) -> Option<u32> {
    text.split_whitespace().next()?.parse().ok()
}
