//! Runtime configuration from `RUNNER_*` environment variables.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::core::SessionConfig;
use crate::store::DEFAULT_HIGHSCORE_PATH;
use crate::types::{BASE_SCROLL_SPEED, MAX_SCROLL_SPEED, TICK_MS};

pub const ENV_HIGHSCORE_PATH: &str = "RUNNER_HIGHSCORE_PATH";
pub const ENV_JOURNAL_PATH: &str = "RUNNER_JOURNAL_PATH";
pub const ENV_AUDIO: &str = "RUNNER_AUDIO";
pub const ENV_TICK_MS: &str = "RUNNER_TICK_MS";
pub const ENV_START_SPEED: &str = "RUNNER_START_SPEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioMode {
    Off,
    Bell,
    Tone,
}

impl AudioMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Some(Self::Off),
            "bell" => Some(Self::Bell),
            "tone" => Some(Self::Tone),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub highscore_path: PathBuf,
    pub journal_path: Option<PathBuf>,
    pub audio: AudioMode,
    pub tick_ms: u32,
    /// Scroll speed magnitude at the start of every run.
    pub start_speed: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            journal_path: None,
            audio: AudioMode::Bell,
            tick_ms: TICK_MS,
            start_speed: BASE_SCROLL_SPEED.abs(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let mut cfg = Self::default();

        if let Some(path) = get(ENV_HIGHSCORE_PATH) {
            cfg.highscore_path = PathBuf::from(path);
        }
        cfg.journal_path = get(ENV_JOURNAL_PATH).map(PathBuf::from);

        if let Some(mode) = get(ENV_AUDIO) {
            cfg.audio = AudioMode::parse(&mode)
                .with_context(|| format!("{ENV_AUDIO}: expected off, bell or tone, got {mode:?}"))?;
        }
        if cfg.audio == AudioMode::Tone && !cfg!(feature = "tone") {
            bail!("{ENV_AUDIO}=tone needs a build with the `tone` feature");
        }

        if let Some(raw) = get(ENV_TICK_MS) {
            let tick: u32 = raw
                .parse()
                .with_context(|| format!("{ENV_TICK_MS}: not a number: {raw:?}"))?;
            if !(1..=100).contains(&tick) {
                bail!("{ENV_TICK_MS}: must be within 1..=100, got {tick}");
            }
            cfg.tick_ms = tick;
        }

        if let Some(raw) = get(ENV_START_SPEED) {
            let speed: f32 = raw
                .parse()
                .with_context(|| format!("{ENV_START_SPEED}: not a number: {raw:?}"))?;
            if !speed.is_finite() || speed <= 0.0 || speed > MAX_SCROLL_SPEED {
                bail!("{ENV_START_SPEED}: must be > 0 and <= {MAX_SCROLL_SPEED}, got {speed}");
            }
            cfg.start_speed = speed;
        }

        Ok(cfg)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default().with_base_speed(self.start_speed)
    }
}
