//! Character controller - vertical physics and run-cycle animation
//!
//! The character never moves horizontally; the world scrolls past it. Each
//! tick integrates gravity, clamps to the ground line, and advances the run
//! cycle on its own millisecond cadence.

use crate::config::SessionConfig;
use crate::geometry::Rect;
use crate::types::RUN_CYCLE_LEN;

/// Identifier of one pose in the run cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameId(pub u8);

/// The run cycle, in playback order.
pub const RUN_CYCLE: [FrameId; RUN_CYCLE_LEN] = [
    FrameId(0),
    FrameId(1),
    FrameId(2),
    FrameId(3),
    FrameId(4),
    FrameId(5),
];

#[derive(Debug, Clone)]
pub struct Character {
    x: f32,
    y: f32,
    velocity_y: f32,
    airborne: bool,
    frame_index: usize,
    frame_timer_ms: u32,
    width: f32,
    height: f32,
    ground_y: f32,
    gravity: f32,
    jump_impulse: f32,
    frame_ms: u32,
}

impl Character {
    /// Create a character standing on the ground at its spawn lane.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            x: config.character_x,
            y: config.ground_y - config.character_height,
            velocity_y: 0.0,
            airborne: false,
            frame_index: 0,
            frame_timer_ms: 0,
            width: config.character_width,
            height: config.character_height,
            ground_y: config.ground_y,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            frame_ms: config.animation_frame_ms,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn airborne(&self) -> bool {
        self.airborne
    }

    /// Resting y: top edge when standing on the ground line.
    pub fn ground_clamp_y(&self) -> f32 {
        self.ground_y - self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Current run-cycle pose.
    pub fn frame(&self) -> FrameId {
        RUN_CYCLE[self.frame_index % RUN_CYCLE.len()]
    }

    /// Start a jump. Returns false (and changes nothing) while airborne.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.velocity_y = self.jump_impulse;
        true
    }

    /// Advance physics by one step and the animation by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.velocity_y += self.gravity;
        self.y += self.velocity_y;

        if self.y + self.height >= self.ground_y {
            self.y = self.ground_clamp_y();
            self.velocity_y = 0.0;
            self.airborne = false;
        }

        self.frame_timer_ms = self.frame_timer_ms.saturating_add(elapsed_ms);
        if self.frame_timer_ms > self.frame_ms {
            self.frame_index = (self.frame_index + 1) % RUN_CYCLE.len();
            self.frame_timer_ms = 0;
        }
    }

    /// Back to the spawn lane, standing still.
    pub fn reset(&mut self) {
        self.y = self.ground_clamp_y();
        self.velocity_y = 0.0;
        self.airborne = false;
        self.frame_index = 0;
        self.frame_timer_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TICK_MS;

    fn character() -> Character {
        Character::new(&SessionConfig::default())
    }

    #[test]
    fn test_spawns_on_ground() {
        let c = character();
        assert_eq!(c.x(), 50.0);
        assert_eq!(c.y(), 260.0);
        assert_eq!(c.bounds().bottom(), 300.0);
        assert!(!c.airborne());
        assert_eq!(c.frame(), FrameId(0));
    }

    #[test]
    fn test_jump_sets_impulse() {
        let mut c = character();
        assert!(c.jump());
        assert!(c.airborne());
        assert_eq!(c.velocity_y(), -14.0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut c = character();
        c.jump();
        c.tick(TICK_MS);
        let v = c.velocity_y();
        assert!(!c.jump());
        assert_eq!(c.velocity_y(), v);
        assert!(c.airborne());
    }

    #[test]
    fn test_idle_tick_stays_clamped() {
        let mut c = character();
        for _ in 0..100 {
            c.tick(TICK_MS);
            assert_eq!(c.y(), c.ground_clamp_y());
            assert_eq!(c.velocity_y(), 0.0);
        }
    }

    #[test]
    fn test_jump_lands_exactly_on_ground() {
        let mut c = character();
        c.jump();
        let mut ticks = 0;
        let mut apex = c.y();
        while c.airborne() {
            c.tick(TICK_MS);
            apex = apex.min(c.y());
            assert!(c.bounds().bottom() <= 300.0);
            ticks += 1;
            assert!(ticks < 1000, "character never landed");
        }
        assert_eq!(c.y(), c.ground_clamp_y());
        assert_eq!(c.velocity_y(), 0.0);
        assert!(apex < c.ground_clamp_y() - 100.0);
    }

    #[test]
    fn test_animation_cycles_every_200ms() {
        let mut c = character();
        // 12 ticks of 16ms = 192ms: not yet past the cadence.
        for _ in 0..12 {
            c.tick(TICK_MS);
        }
        assert_eq!(c.frame(), FrameId(0));
        c.tick(TICK_MS);
        assert_eq!(c.frame(), FrameId(1));
    }

    #[test]
    fn test_animation_wraps() {
        let mut c = character();
        for _ in 0..RUN_CYCLE_LEN {
            c.tick(201);
        }
        assert_eq!(c.frame(), FrameId(0));
    }

    #[test]
    fn test_reset() {
        let mut c = character();
        c.jump();
        for _ in 0..5 {
            c.tick(250);
        }
        c.reset();
        assert_eq!(c.y(), c.ground_clamp_y());
        assert_eq!(c.velocity_y(), 0.0);
        assert!(!c.airborne());
        assert_eq!(c.frame(), FrameId(0));
        assert!(c.jump());
    }
}
