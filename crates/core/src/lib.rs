//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens in a run lives here: the character's
//! vertical physics, the obstacle stream, scoring, difficulty and the
//! `Playing`/`GameOver` state machine. Nothing in this crate touches the
//! terminal, the filesystem or an audio device; persistence goes through the
//! [`ScoreStore`] trait and presentation reads a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`geometry`]: axis-aligned rectangles with strict overlap
//! - [`config`]: session tuning (defaults come from [`types`])
//! - [`character`]: jump/gravity/ground clamp and the six-pose run cycle
//! - [`obstacles`]: timed spawning, scrolling, pass marking and reaping
//! - [`score_store`]: high-score persistence seam
//! - [`session`]: the per-frame update and intent handling
//! - [`snapshot`]: copy-out view for renderers
//!
//! # Example
//!
//! ```
//! use tui_runner_core::GameSession;
//! use tui_runner_types::{Intent, SessionEvent, TICK_MS};
//!
//! let mut game = GameSession::in_memory();
//! assert_eq!(game.apply_intent(Intent::Jump), Some(SessionEvent::Jumped));
//! game.tick(TICK_MS);
//! assert!(game.character().airborne());
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Physics is frame-locked: one call to [`GameSession::tick`] is one physics
//! step regardless of the elapsed time passed in. The elapsed time drives the
//! millisecond timers only (animation, spawning, speed ramp).

pub mod character;
pub mod config;
pub mod geometry;
pub mod obstacles;
pub mod score_store;
pub mod session;
pub mod snapshot;

pub use tui_runner_types as types;

pub use character::{Character, FrameId, RUN_CYCLE};
pub use config::SessionConfig;
pub use geometry::Rect;
pub use obstacles::{Obstacle, ObstacleField};
pub use score_store::{MemoryScoreStore, ScoreStore};
pub use session::{GameSession, TickEvents, MAX_TICK_EVENTS};
pub use snapshot::{CharacterSnapshot, GameSnapshot, ObstacleSnapshot, MAX_SNAPSHOT_OBSTACLES};
