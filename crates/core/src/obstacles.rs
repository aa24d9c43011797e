//! Obstacle manager - spawning, scrolling, pass detection and reaping

use crate::config::SessionConfig;
use crate::geometry::Rect;

/// A rock on the ground line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    bounds: Rect,
    passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            passed: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the character has already cleared this obstacle.
    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// Ordered set of live obstacles (spawn order) plus the spawn timer.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    spawn_timer_ms: u32,
    spawn_interval_ms: u32,
    spawn_x: f32,
    spawn_y: f32,
    width: f32,
    height: f32,
}

impl ObstacleField {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            obstacles: Vec::with_capacity(8),
            spawn_timer_ms: 0,
            spawn_interval_ms: config.spawn_interval_ms,
            spawn_x: config.field_width,
            spawn_y: config.ground_y - config.obstacle_height,
            width: config.obstacle_width,
            height: config.obstacle_height,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn spawn_timer_ms(&self) -> u32 {
        self.spawn_timer_ms
    }

    /// Add `elapsed_ms` to the spawn timer; once it exceeds the spawn interval,
    /// append an obstacle at the right edge of the field and restart the timer.
    pub fn try_spawn(&mut self, elapsed_ms: u32) -> Option<Obstacle> {
        self.spawn_timer_ms = self.spawn_timer_ms.saturating_add(elapsed_ms);
        if self.spawn_timer_ms <= self.spawn_interval_ms {
            return None;
        }
        self.spawn_timer_ms = 0;
        let obstacle = Obstacle::new(self.spawn_x, self.spawn_y, self.width, self.height);
        self.obstacles.push(obstacle);
        Some(obstacle)
    }

    /// Insert an obstacle directly (scenario setup and benches).
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Scroll every obstacle by `scroll_speed`, then mark the ones whose right
    /// edge is now left of `character_left`. Returns how many were newly passed.
    pub fn tick(&mut self, scroll_speed: f32, character_left: f32) -> u32 {
        let mut newly_passed = 0;
        for obstacle in &mut self.obstacles {
            obstacle.bounds.x += scroll_speed;
            if !obstacle.passed && obstacle.bounds.right() < character_left {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    /// Drop obstacles whose right edge has left the field. Survivors keep their order.
    pub fn reap(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.bounds.right() >= 0.0);
        before - self.obstacles.len()
    }

    /// Index of the first obstacle (in spawn order) overlapping `rect`.
    pub fn first_colliding(&self, rect: &Rect) -> Option<usize> {
        self.obstacles
            .iter()
            .position(|o| o.bounds.intersects(rect))
    }

    /// Remove every obstacle and restart the spawn timer.
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_timer_ms = 0;
    }
}
