//! On-disk state for the runner: the high-score file and the session journal.

pub mod highscore;
pub mod journal;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use highscore::{FileScoreStore, DEFAULT_HIGHSCORE_PATH};
pub use journal::{Journal, Lifecycle};
