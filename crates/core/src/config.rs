//! Session tuning.
//!
//! Every knob the simulation reads lives here so tests and the binary can
//! change them without touching the shared constants.

use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub field_width: f32,
    pub ground_y: f32,
    pub character_x: f32,
    pub character_width: f32,
    pub character_height: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub animation_frame_ms: u32,
    pub spawn_interval_ms: u32,
    pub speed_increase_interval_ms: u32,
    /// Signed scroll velocity at session start and after every restart.
    pub base_scroll_speed: f32,
    /// Magnitude added per ramp step.
    pub scroll_speed_increment: f32,
    /// Upper bound on the scroll speed magnitude.
    pub max_scroll_speed: f32,
    pub score_per_obstacle: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            ground_y: GROUND_Y,
            character_x: CHARACTER_X,
            character_width: CHARACTER_WIDTH,
            character_height: CHARACTER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            animation_frame_ms: ANIMATION_FRAME_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            speed_increase_interval_ms: SPEED_INCREASE_INTERVAL_MS,
            base_scroll_speed: BASE_SCROLL_SPEED,
            scroll_speed_increment: SCROLL_SPEED_INCREMENT,
            max_scroll_speed: MAX_SCROLL_SPEED,
            score_per_obstacle: SCORE_PER_OBSTACLE,
        }
    }
}

impl SessionConfig {
    /// Same tuning with a different starting scroll magnitude (always leftward).
    pub fn with_base_speed(mut self, magnitude: f32) -> Self {
        self.base_scroll_speed = -magnitude.abs();
        self
    }

    /// Direction of travel for obstacles: -1 for leftward scrolling.
    pub(crate) fn scroll_direction(&self) -> f32 {
        if self.base_scroll_speed > 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}
