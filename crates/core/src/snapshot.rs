use arrayvec::ArrayVec;

use crate::character::{Character, FrameId};
use crate::obstacles::Obstacle;

/// Obstacles kept in a snapshot. The spawn cadence keeps at most a handful
/// alive at once; anything beyond this is dropped from the snapshot only.
pub const MAX_SNAPSHOT_OBSTACLES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharacterSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub frame: FrameId,
    pub airborne: bool,
}

impl From<&Character> for CharacterSnapshot {
    fn from(value: &Character) -> Self {
        let b = value.bounds();
        Self {
            x: b.x,
            y: b.y,
            width: b.width,
            height: b.height,
            frame: value.frame(),
            airborne: value.airborne(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObstacleSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub passed: bool,
}

impl From<&Obstacle> for ObstacleSnapshot {
    fn from(value: &Obstacle) -> Self {
        let b = value.bounds();
        Self {
            x: b.x,
            y: b.y,
            width: b.width,
            height: b.height,
            passed: value.passed(),
        }
    }
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub character: CharacterSnapshot,
    pub obstacles: ArrayVec<ObstacleSnapshot, MAX_SNAPSHOT_OBSTACLES>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub scroll_speed: f32,
    /// Total distance scrolled this episode (drives background art).
    pub distance: f32,
    pub episode_id: u32,
    pub elapsed_ms: u64,
    pub field_width: f32,
    pub ground_y: f32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.character = CharacterSnapshot::default();
        self.obstacles.clear();
        self.score = 0;
        self.high_score = 0;
        self.game_over = false;
        self.scroll_speed = 0.0;
        self.distance = 0.0;
        self.episode_id = 0;
        self.elapsed_ms = 0;
        self.field_width = crate::types::FIELD_WIDTH;
        self.ground_y = crate::types::GROUND_Y;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Stable FNV-1a fingerprint of everything that affects the rendered frame.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a::new();
        h.write_f32(self.character.x);
        h.write_f32(self.character.y);
        h.write_u32(self.character.frame.0 as u32);
        h.write_u32(self.obstacles.len() as u32);
        for o in &self.obstacles {
            h.write_f32(o.x);
            h.write_f32(o.y);
        }
        h.write_u32(self.score);
        h.write_u32(self.high_score);
        h.write_u32(self.game_over as u32);
        h.write_f32(self.distance);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            character: CharacterSnapshot::default(),
            obstacles: ArrayVec::new(),
            score: 0,
            high_score: 0,
            game_over: false,
            scroll_speed: 0.0,
            distance: 0.0,
            episode_id: 0,
            elapsed_ms: 0,
            field_width: 0.0,
            ground_y: 0.0,
        };
        s.clear();
        s
    }
}

struct Fnv1a(u64);

impl Fnv1a {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(Self::PRIME);
        }
    }

    fn write_u32(&mut self, v: u32) {
        self.write(&v.to_le_bytes());
    }

    fn write_f32(&mut self, v: f32) {
        self.write(&v.to_bits().to_le_bytes());
    }

    fn finish(&self) -> u64 {
        self.0
    }
}
