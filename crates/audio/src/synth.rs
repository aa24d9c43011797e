//! Sample generators for the cue sounds. Mono `f32` at [`SAMPLE_RATE`].

use std::f32::consts::TAU;

pub const SAMPLE_RATE: u32 = 44_100;

/// A sine sweep from `from_hz` to `to_hz` with a linear fade-out.
#[derive(Debug, Clone)]
pub struct Sweep {
    from_hz: f32,
    to_hz: f32,
    gain: f32,
    phase: f32,
    n: u32,
    len: u32,
}

impl Sweep {
    pub fn new(from_hz: f32, to_hz: f32, seconds: f32, gain: f32) -> Self {
        Self {
            from_hz,
            to_hz,
            gain,
            phase: 0.0,
            n: 0,
            len: (seconds * SAMPLE_RATE as f32) as u32,
        }
    }

    /// Short rising chirp for clearing an obstacle.
    pub fn pass() -> Self {
        Self::new(880.0, 1320.0, 0.08, 0.12)
    }

    /// Falling tone for the end of a run.
    pub fn game_over() -> Self {
        Self::new(400.0, 80.0, 0.5, 0.15)
    }

    pub fn len_samples(&self) -> u32 {
        self.len
    }
}

impl Iterator for Sweep {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.n >= self.len {
            return None;
        }
        let t = self.n as f32 / self.len as f32;
        let hz = self.from_hz + (self.to_hz - self.from_hz) * t;
        self.phase = (self.phase + hz / SAMPLE_RATE as f32).fract();
        self.n += 1;
        Some((self.phase * TAU).sin() * self.gain * (1.0 - t))
    }
}

/// Endless background loop: a plucked square-wave arpeggio.
#[derive(Debug, Clone)]
pub struct Theme {
    note: usize,
    n_in_note: u32,
    phase: f32,
}

const THEME_NOTES_HZ: [f32; 8] = [262.0, 330.0, 392.0, 330.0, 294.0, 349.0, 440.0, 349.0];
const THEME_NOTE_SAMPLES: u32 = SAMPLE_RATE / 6;
const THEME_GAIN: f32 = 0.04;

impl Theme {
    pub fn new() -> Self {
        Self {
            note: 0,
            n_in_note: 0,
            phase: 0.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Theme {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let hz = THEME_NOTES_HZ[self.note];
        self.phase = (self.phase + hz / SAMPLE_RATE as f32).fract();
        let envelope = 1.0 - self.n_in_note as f32 / THEME_NOTE_SAMPLES as f32;
        let square = if self.phase < 0.5 { 1.0 } else { -1.0 };

        self.n_in_note += 1;
        if self.n_in_note >= THEME_NOTE_SAMPLES {
            self.n_in_note = 0;
            self.note = (self.note + 1) % THEME_NOTES_HZ.len();
        }
        Some(square * envelope * THEME_GAIN)
    }
}

#[cfg(feature = "tone")]
mod source {
    use std::time::Duration;

    use rodio::Source;

    use super::{Sweep, Theme, SAMPLE_RATE};

    impl Source for Sweep {
        fn current_frame_len(&self) -> Option<usize> {
            Some(self.len.saturating_sub(self.n) as usize)
        }

        fn channels(&self) -> u16 {
            1
        }

        fn sample_rate(&self) -> u32 {
            SAMPLE_RATE
        }

        fn total_duration(&self) -> Option<Duration> {
            Some(Duration::from_secs_f32(
                self.len as f32 / SAMPLE_RATE as f32,
            ))
        }
    }

    impl Source for Theme {
        fn current_frame_len(&self) -> Option<usize> {
            None
        }

        fn channels(&self) -> u16 {
            1
        }

        fn sample_rate(&self) -> u32 {
            SAMPLE_RATE
        }

        fn total_duration(&self) -> Option<Duration> {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_is_finite_and_fades() {
        let sweep = Sweep::game_over();
        let len = sweep.len_samples() as usize;
        let samples: Vec<f32> = sweep.collect();
        assert_eq!(samples.len(), len);
        assert!(samples.iter().all(|s| s.abs() <= 0.15));
        let tail = samples[len - 100..].iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(tail < 0.01);
    }

    #[test]
    fn test_theme_never_ends() {
        let mut theme = Theme::new();
        let n = (THEME_NOTE_SAMPLES as usize) * THEME_NOTES_HZ.len() * 2;
        assert_eq!(theme.by_ref().take(n).count(), n);
        assert!(theme.next().is_some());
    }
}
