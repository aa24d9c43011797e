//! Audio cue playback.
//!
//! The session reports [`AudioCue`]s; a [`CueSink`] turns them into sound.
//! Sinks never fail the game: a sink that cannot play simply stays quiet.

pub mod synth;
#[cfg(feature = "tone")]
pub mod tone;

use std::io::{self, Write};

pub use tui_runner_types as types;

use crate::types::AudioCue;

#[cfg(feature = "tone")]
pub use tone::ToneSink;

pub trait CueSink {
    fn play(&mut self, cue: AudioCue);

    fn play_all(&mut self, cues: &[AudioCue]) {
        for &cue in cues {
            self.play(cue);
        }
    }
}

impl<S: CueSink + ?Sized> CueSink for Box<S> {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue)
    }
}

/// Drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl CueSink for SilentSink {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Keeps every cue it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    cues: Vec<AudioCue>,
}

impl RecordingSink {
    pub fn cues(&self) -> &[AudioCue] {
        &self.cues
    }
}

impl CueSink for RecordingSink {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

/// Rings the terminal bell for one-shot cues. The background loop has no
/// bell equivalent and is ignored.
pub struct BellSink<W: Write = io::Stdout> {
    out: W,
}

impl BellSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CueSink for BellSink<W> {
    fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::ObstaclePassed | AudioCue::GameOver => {
                let _ = self.out.write_all(b"\x07");
                let _ = self.out.flush();
            }
            AudioCue::BackgroundLoopStart | AudioCue::BackgroundStop => {}
        }
    }
}
