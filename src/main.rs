//! Terminal endless runner (default binary).
//!
//! crossterm for input, the half-block framebuffer renderer for output, a
//! fixed-cadence loop driving the session.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_runner::audio::{BellSink, CueSink, SilentSink};
use tui_runner::config::{AppConfig, AudioMode};
use tui_runner::core::{GameSession, GameSnapshot};
use tui_runner::input::EdgeTrigger;
use tui_runner::store::{FileScoreStore, Journal, Lifecycle};
use tui_runner::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_runner::types::{AudioCue, Intent, SessionEvent};

/// Refresh interval for the frozen game-over frame.
const STATIC_REFRESH_MS: u64 = 500;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let journal = match &config.journal_path {
        Some(path) => Journal::open(path)?,
        None => Journal::disabled(),
    };
    let audio = open_audio(config.audio);
    let session = GameSession::new(
        config.session_config(),
        FileScoreStore::new(&config.highscore_path),
    );

    let mut app = App {
        config,
        session,
        journal,
        audio,
        clock: Instant::now(),
    };

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| app.run(&mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn open_audio(mode: AudioMode) -> Box<dyn CueSink> {
    match mode {
        AudioMode::Off => Box::new(SilentSink),
        AudioMode::Bell => Box::new(BellSink::stdout()),
        #[cfg(feature = "tone")]
        AudioMode::Tone => match tui_runner::audio::ToneSink::open() {
            Ok(sink) => Box::new(sink),
            Err(_) => Box::new(BellSink::stdout()),
        },
        #[cfg(not(feature = "tone"))]
        AudioMode::Tone => Box::new(BellSink::stdout()),
    }
}

struct App {
    config: AppConfig,
    session: GameSession<FileScoreStore>,
    journal: Journal,
    audio: Box<dyn CueSink>,
    clock: Instant,
}

impl App {
    fn now_ms(&self) -> u64 {
        self.clock.elapsed().as_millis() as u64
    }

    fn report(&mut self, event: SessionEvent) {
        self.journal.session_event(&self.session, &event);
        self.audio.play_all(event.audio_cues());
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        self.journal.session_lifecycle(
            &self.session,
            Lifecycle::SessionStart {
                high_score: self.session.high_score(),
            },
        );
        self.audio.play(AudioCue::BackgroundLoopStart);

        let mut view = GameView::new();
        let mut fb = FrameBuffer::new(0, 0);
        let mut snap = GameSnapshot::default();
        let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
        let mut edges = EdgeTrigger::new();

        let tick_ms = self.config.tick_ms;
        let tick_duration = Duration::from_millis(tick_ms as u64);
        let mut last_tick = Instant::now();

        loop {
            // Render.
            self.session.snapshot_into(&mut snap);
            if throttle.should_render(self.now_ms(), snap.fingerprint(), snap.game_over) {
                let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
                view.render_into(&snap, Viewport::new(w, h), &mut fb);
                term.draw_swap(&mut fb)?;
            }

            // Input with timeout until next tick.
            let timeout = tick_duration.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => match edges.handle_key(key, self.now_ms()) {
                        Some(Intent::Quit) => break,
                        Some(intent) => {
                            if let Some(ev) = self.session.apply_intent(intent) {
                                self.report(ev);
                            }
                        }
                        None => {}
                    },
                    Event::Resize(_, _) => {
                        term.invalidate();
                        throttle.reset();
                    }
                    _ => {}
                }
            }
            edges.update(self.now_ms());

            // Tick.
            if last_tick.elapsed() >= tick_duration {
                last_tick = Instant::now();
                for ev in self.session.tick(tick_ms) {
                    self.report(ev);
                }
            }
        }

        self.audio.play(AudioCue::BackgroundStop);
        self.journal.session_lifecycle(
            &self.session,
            Lifecycle::SessionQuit {
                score: self.session.score(),
                high_score: self.session.high_score(),
            },
        );
        Ok(())
    }
}
