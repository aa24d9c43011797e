//! Edge-triggered intents for terminal environments.
//!
//! Most terminals report a held key as a stream of presses and never send a
//! release. An intent fires on the first press; further presses of the same
//! intent are treated as auto-repeat until the key has been quiet for the
//! release timeout (or a real release event arrives).

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::Intent;

const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, Copy, Default)]
struct Latch {
    held: bool,
    last_seen_ms: u64,
}

#[derive(Debug, Clone)]
pub struct EdgeTrigger {
    jump: Latch,
    restart: Latch,
    key_release_timeout_ms: u64,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self {
            jump: Latch::default(),
            restart: Latch::default(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    fn latch_mut(&mut self, intent: Intent) -> Option<&mut Latch> {
        match intent {
            Intent::Jump => Some(&mut self.jump),
            Intent::Restart => Some(&mut self.restart),
            Intent::Quit => None,
        }
    }

    /// Feed one key event observed at `now_ms`. Returns the intent on a rising edge.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) -> Option<Intent> {
        let intent = map_key(key)?;
        let timeout = self.key_release_timeout_ms;
        let Some(latch) = self.latch_mut(intent) else {
            // Quit is never debounced.
            return (key.kind != KeyEventKind::Release).then_some(intent);
        };

        match key.kind {
            KeyEventKind::Release => {
                latch.held = false;
                None
            }
            KeyEventKind::Repeat => {
                latch.last_seen_ms = now_ms;
                None
            }
            KeyEventKind::Press => {
                let repeat = latch.held && now_ms.saturating_sub(latch.last_seen_ms) <= timeout;
                latch.held = true;
                latch.last_seen_ms = now_ms;
                (!repeat).then_some(intent)
            }
        }
    }

    /// Auto-release latches whose key has been quiet longer than the timeout.
    pub fn update(&mut self, now_ms: u64) {
        let timeout = self.key_release_timeout_ms;
        for latch in [&mut self.jump, &mut self.restart] {
            if latch.held && now_ms.saturating_sub(latch.last_seen_ms) > timeout {
                latch.held = false;
            }
        }
    }

    pub fn reset(&mut self) {
        self.jump = Latch::default();
        self.restart = Latch::default();
    }
}

impl Default for EdgeTrigger {
    fn default() -> Self {
        Self::new()
    }
}
