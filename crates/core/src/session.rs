//! Game session - the per-frame state machine
//!
//! Ties the character, the obstacle field and the high-score store together.
//! A session is either `Playing` or `GameOver`; game over freezes everything
//! until a restart intent arrives.

use arrayvec::ArrayVec;

use crate::character::Character;
use crate::config::SessionConfig;
use crate::obstacles::ObstacleField;
use crate::score_store::{MemoryScoreStore, ScoreStore};
use crate::snapshot::{CharacterSnapshot, GameSnapshot, ObstacleSnapshot};
use crate::types::*;

/// Upper bound on events produced by a single tick. The last slot is kept
/// for the game-over event.
pub const MAX_TICK_EVENTS: usize = 16;

pub type TickEvents = ArrayVec<SessionEvent, MAX_TICK_EVENTS>;

#[derive(Debug, Clone)]
pub struct GameSession<S: ScoreStore = MemoryScoreStore> {
    config: SessionConfig,
    character: Character,
    obstacles: ObstacleField,
    phase: Phase,
    score: u32,
    high_score: u32,
    /// Signed horizontal velocity applied to every obstacle each tick.
    scroll_speed: f32,
    speed_timer_ms: u32,
    distance: f32,
    elapsed_ms: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    store: S,
}

impl GameSession<MemoryScoreStore> {
    /// Session with default tuning and no stored high score.
    pub fn in_memory() -> Self {
        Self::new(SessionConfig::default(), MemoryScoreStore::default())
    }
}

impl<S: ScoreStore> GameSession<S> {
    /// Start a session in `Playing`, reading the high score from `store`.
    pub fn new(config: SessionConfig, mut store: S) -> Self {
        let high_score = store.load();
        Self {
            character: Character::new(&config),
            obstacles: ObstacleField::new(&config),
            phase: Phase::Playing,
            score: 0,
            high_score,
            scroll_speed: config.base_scroll_speed,
            speed_timer_ms: 0,
            distance: 0.0,
            elapsed_ms: 0,
            episode_id: 0,
            store,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a player intent. Returns the resulting event, if any.
    ///
    /// `Jump` only acts while playing; `Restart` only while game over;
    /// `Quit` is left to the caller.
    pub fn apply_intent(&mut self, intent: Intent) -> Option<SessionEvent> {
        match (intent, self.phase) {
            (Intent::Jump, Phase::Playing) => {
                if self.character.jump() {
                    Some(SessionEvent::Jumped)
                } else {
                    None
                }
            }
            (Intent::Restart, Phase::GameOver) => {
                self.restart();
                Some(SessionEvent::Restarted {
                    episode: self.episode_id,
                })
            }
            _ => None,
        }
    }

    /// Advance the simulation by one frame of `elapsed_ms`.
    ///
    /// Order: difficulty ramp, character, spawn, scroll + pass detection,
    /// reap, scoring, collision. Does nothing while game over.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickEvents {
        let mut events = TickEvents::new();
        if self.phase == Phase::GameOver {
            return events;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);

        self.speed_timer_ms = self.speed_timer_ms.saturating_add(elapsed_ms);
        let mut ramped = false;
        while self.speed_timer_ms >= self.config.speed_increase_interval_ms {
            self.speed_timer_ms -= self.config.speed_increase_interval_ms;
            ramped |= self.ramp_speed();
        }
        if ramped {
            push_droppable(
                &mut events,
                SessionEvent::SpeedIncreased {
                    speed: self.scroll_speed,
                },
            );
        }

        self.character.tick(elapsed_ms);

        if let Some(spawned) = self.obstacles.try_spawn(elapsed_ms) {
            push_droppable(
                &mut events,
                SessionEvent::ObstacleSpawned {
                    x: spawned.bounds().x,
                },
            );
        }

        let passed = self.obstacles.tick(self.scroll_speed, self.character.x());
        self.distance += self.scroll_speed.abs();
        self.obstacles.reap();

        for _ in 0..passed {
            self.score += self.config.score_per_obstacle;
            push_droppable(&mut events, SessionEvent::ObstaclePassed { score: self.score });
        }

        if self
            .obstacles
            .first_colliding(&self.character.bounds())
            .is_some()
        {
            // Never full: push_droppable leaves the last slot free.
            let _ = events.try_push(self.end_run());
        }

        events
    }

    /// Grow the scroll magnitude by one increment, capped. Returns whether it changed.
    fn ramp_speed(&mut self) -> bool {
        let magnitude = (self.scroll_speed.abs() + self.config.scroll_speed_increment)
            .min(self.config.max_scroll_speed);
        let next = self.config.scroll_direction() * magnitude;
        if next == self.scroll_speed {
            return false;
        }
        self.scroll_speed = next;
        true
    }

    fn end_run(&mut self) -> SessionEvent {
        self.phase = Phase::GameOver;
        let new_record = self.score > self.high_score;
        if new_record {
            self.high_score = self.score;
            self.store.save(self.high_score);
        }
        SessionEvent::GameOver {
            score: self.score,
            high_score: self.high_score,
            new_record,
        }
    }

    fn restart(&mut self) {
        self.obstacles.clear();
        self.character.reset();
        self.score = 0;
        self.scroll_speed = self.config.base_scroll_speed;
        self.speed_timer_ms = 0;
        self.distance = 0.0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = Phase::Playing;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.character = CharacterSnapshot::from(&self.character);
        out.obstacles.clear();
        for o in self.obstacles.obstacles() {
            if out.obstacles.try_push(ObstacleSnapshot::from(o)).is_err() {
                break;
            }
        }
        out.score = self.score;
        out.high_score = self.high_score;
        out.game_over = self.game_over();
        out.scroll_speed = self.scroll_speed;
        out.distance = self.distance;
        out.episode_id = self.episode_id;
        out.elapsed_ms = self.elapsed_ms;
        out.field_width = self.config.field_width;
        out.ground_y = self.config.ground_y;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Push an event that may be dropped when the frame is saturated.
fn push_droppable(events: &mut TickEvents, event: SessionEvent) {
    if events.len() < MAX_TICK_EVENTS - 1 {
        events.push(event);
    }
}

impl Default for GameSession<MemoryScoreStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}
