//! Redraw gate for frames that are not changing.
//!
//! While a run is live every frame is drawn. Once the frame goes static
//! (game over) a redraw happens only when the snapshot fingerprint changes,
//! or as a periodic refresh every `min_static_interval_ms`.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    /// `(rendered_at_ms, fingerprint)` of the last drawn frame.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, fp)) if fp != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Forget the last frame so the next call renders (terminal resized).
    pub fn reset(&mut self) {
        self.last = None;
    }
}
