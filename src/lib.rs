//! Terminal endless runner (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_runner::{core, input, term, store, audio, types}`
//! and adds the runtime [`config`].

pub mod config;

pub use tui_runner_audio as audio;
pub use tui_runner_core as core;
pub use tui_runner_input as input;
pub use tui_runner_store as store;
pub use tui_runner_term as term;
pub use tui_runner_types as types;
