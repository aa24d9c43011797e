//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the simulation, the terminal
//! front end, the journal and the audio layer. Everything here is plain data.
//!
//! # Field Geometry
//!
//! The world is a fixed 500x400 field in world units (y grows downward):
//!
//! - **Ground line**: y = 300 (the bottom 100 units are ground art)
//! - **Character lane**: x = 50, 40x40 bounding box
//! - **Obstacles**: 30x30, spawned at x = 500 resting on the ground line
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame duration (~60 FPS) |
//! | `ANIMATION_FRAME_MS` | 200 | Run-cycle frame cadence |
//! | `SPAWN_INTERVAL_MS` | 2000 | Obstacle spawn cadence |
//! | `SPEED_INCREASE_INTERVAL_MS` | 10000 | Difficulty ramp cadence |
//!
//! # Physics (per tick)
//!
//! - `GRAVITY`: 0.5 units/tick²
//! - `JUMP_IMPULSE`: -14 units/tick
//! - Scroll speed starts at -6, ramps by 0.5 every interval, capped at -10
//!
//! # Examples
//!
//! ```
//! use tui_runner_types::{AudioCue, Intent, SessionEvent};
//!
//! assert_eq!(Intent::from_str("jump"), Some(Intent::Jump));
//!
//! let ev = SessionEvent::GameOver { score: 40, high_score: 40, new_record: true };
//! assert_eq!(ev.audio_cues(), &[AudioCue::BackgroundStop, AudioCue::GameOver]);
//! ```

use serde::Serialize;

/// Field width in world units
pub const FIELD_WIDTH: f32 = 500.0;

/// Field height in world units
pub const FIELD_HEIGHT: f32 = 400.0;

/// Height of the ground band at the bottom of the field
pub const GROUND_HEIGHT: f32 = 100.0;

/// The ground line: nothing rests below this y
pub const GROUND_Y: f32 = FIELD_HEIGHT - GROUND_HEIGHT;

/// Character spawn lane (left edge)
pub const CHARACTER_X: f32 = 50.0;

pub const CHARACTER_WIDTH: f32 = 40.0;
pub const CHARACTER_HEIGHT: f32 = 40.0;

pub const OBSTACLE_WIDTH: f32 = 30.0;
pub const OBSTACLE_HEIGHT: f32 = 30.0;

/// Downward acceleration applied every tick
pub const GRAVITY: f32 = 0.5;

/// Vertical velocity set by a jump (negative = upward)
pub const JUMP_IMPULSE: f32 = -14.0;

/// Frame duration in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Run-cycle animation cadence
pub const ANIMATION_FRAME_MS: u32 = 200;

/// Number of frames in the run cycle
pub const RUN_CYCLE_LEN: usize = 6;

/// A new obstacle appears once this much time has passed since the last one
pub const SPAWN_INTERVAL_MS: u32 = 2000;

/// Difficulty ramp cadence
pub const SPEED_INCREASE_INTERVAL_MS: u32 = 10_000;

/// Initial (and post-restart) scroll velocity; negative = leftward
pub const BASE_SCROLL_SPEED: f32 = -6.0;

/// Magnitude added to the scroll speed on every ramp step
pub const SCROLL_SPEED_INCREMENT: f32 = 0.5;

/// Scroll speed magnitude never exceeds this
pub const MAX_SCROLL_SPEED: f32 = 10.0;

/// Points per obstacle cleared
pub const SCORE_PER_OBSTACLE: u32 = 10;

/// Session phase
///
/// `GameOver` freezes the simulation; only a restart leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Playing,
    GameOver,
}

/// Player intents produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Jump (ignored while game over or airborne)
    Jump,
    /// Start a new run (honoured only while game over)
    Restart,
    /// Leave the program
    Quit,
}

impl Intent {
    /// Parse an intent name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jump" => Some(Intent::Jump),
            "restart" => Some(Intent::Restart),
            "quit" => Some(Intent::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Jump => "jump",
            Intent::Restart => "restart",
            Intent::Quit => "quit",
        }
    }
}

/// Cues for the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    BackgroundLoopStart,
    BackgroundStop,
    ObstaclePassed,
    GameOver,
}

/// Something observable that happened during a tick or intent.
///
/// Consumed by the audio layer (via [`SessionEvent::audio_cues`]) and by the
/// session journal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Jumped,
    ObstacleSpawned {
        x: f32,
    },
    /// An obstacle fell behind the character; `score` is the new total.
    ObstaclePassed {
        score: u32,
    },
    SpeedIncreased {
        speed: f32,
    },
    GameOver {
        score: u32,
        high_score: u32,
        new_record: bool,
    },
    Restarted {
        episode: u32,
    },
}

impl SessionEvent {
    /// Audio cues this event should trigger, in playback order.
    pub fn audio_cues(&self) -> &'static [AudioCue] {
        match self {
            SessionEvent::ObstaclePassed { .. } => &[AudioCue::ObstaclePassed],
            SessionEvent::GameOver { .. } => &[AudioCue::BackgroundStop, AudioCue::GameOver],
            SessionEvent::Restarted { .. } => &[AudioCue::BackgroundLoopStart],
            SessionEvent::Jumped
            | SessionEvent::ObstacleSpawned { .. }
            | SessionEvent::SpeedIncreased { .. } => &[],
        }
    }
}
