//! Terminal presentation for the runner.
//!
//! A small, game-oriented rendering layer: the playfield is painted into a
//! pixel canvas, composited into a framebuffer of styled cells using
//! half-block glyphs, and flushed to the terminal as a diff.
//!
//! - [`fb`]: cells, styles and the framebuffer
//! - [`canvas`]: pixel canvas with half-block compositing
//! - [`sprites`]: run-cycle poses and obstacle art
//! - [`game_view`]: snapshot to framebuffer (pure, no I/O)
//! - [`renderer`]: crossterm output with change-run diffing
//! - [`render_throttle`]: redraw gate for static frames

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod sprites;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, GAME_OVER_TEXT, MIN_VIEWPORT};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
