//! Terminal input (session-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`crate::types::Intent`] and turns them into edge-triggered intents that
//! survive terminals without key-release events.

pub mod edge;
pub mod map;

pub use tui_runner_types as types;

pub use edge::EdgeTrigger;
pub use map::{map_key, should_quit};
