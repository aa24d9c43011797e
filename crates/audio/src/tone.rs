//! Synthesized cues through the default output device.

use anyhow::Result;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::synth::{Sweep, Theme};
use crate::types::AudioCue;
use crate::CueSink;

const THEME_VOLUME: f32 = 0.6;

pub struct ToneSink {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    theme: Option<Sink>,
}

impl ToneSink {
    /// Open the default output device.
    pub fn open() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            theme: None,
        })
    }

    fn start_theme(&mut self) {
        self.stop_theme();
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.set_volume(THEME_VOLUME);
        sink.append(Theme::new());
        self.theme = Some(sink);
    }

    fn stop_theme(&mut self) {
        if let Some(sink) = self.theme.take() {
            sink.stop();
        }
    }

    fn one_shot(&self, sweep: Sweep) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.append(sweep);
        sink.detach();
    }
}

impl CueSink for ToneSink {
    fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::BackgroundLoopStart => self.start_theme(),
            AudioCue::BackgroundStop => self.stop_theme(),
            AudioCue::ObstaclePassed => self.one_shot(Sweep::pass()),
            AudioCue::GameOver => self.one_shot(Sweep::game_over()),
        }
    }
}
