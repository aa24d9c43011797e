//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The playfield is painted on a pixel canvas
//! (two pixels per cell) stretched to fill the viewport below a one-row HUD.

use crate::canvas::Canvas;
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::sprites::{self, PUPPY_PALETTE, ROCK_PALETTE};
use crate::types::FIELD_HEIGHT;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub const MIN_VIEWPORT: Viewport = Viewport {
    width: 32,
    height: 8,
};

pub const GAME_OVER_TEXT: &str = "Game Over! Press R to Restart";

const SKY_TOP: Rgb = Rgb::new(70, 150, 215);
const SKY_BOT: Rgb = Rgb::new(200, 230, 245);
const HILL_FAR: Rgb = Rgb::new(130, 190, 120);
const HILL_NEAR: Rgb = Rgb::new(95, 165, 80);
const GRASS: Rgb = Rgb::new(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb::new(110, 200, 70);
const DIRT: Rgb = Rgb::new(170, 125, 75);
const DIRT_DARK: Rgb = Rgb::new(145, 105, 60);

const HUD: CellStyle = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(25, 25, 35)).bold();
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(150, 30, 30)).bold();

/// World-to-pixel mapping for one frame.
#[derive(Debug, Clone, Copy)]
struct Scale {
    x: f32,
    y: f32,
}

impl Scale {
    fn px(self, v: f32) -> i32 {
        (v * self.x).round() as i32
    }

    fn py(self, v: f32) -> i32 {
        (v * self.y).round() as i32
    }
}

/// Terminal renderer for the runner playfield.
#[derive(Debug, Clone)]
pub struct GameView {
    canvas: Canvas,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(0, 0),
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    ///
    /// Callers can reuse the framebuffer (and this view's canvas) across
    /// frames; nothing is allocated unless the viewport grows.
    pub fn render_into(&mut self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', HUD));

        if viewport.width < MIN_VIEWPORT.width || viewport.height < MIN_VIEWPORT.height {
            let msg = "Terminal too small";
            let x = viewport.width.saturating_sub(msg.len() as u16) / 2;
            fb.put_str(x, viewport.height / 2, msg, HUD);
            return;
        }

        let pw = viewport.width as usize;
        let ph = (viewport.height as usize - 1) * 2;
        self.canvas.resize(pw, ph);

        let scale = Scale {
            x: pw as f32 / snap.field_width.max(1.0),
            y: ph as f32 / FIELD_HEIGHT,
        };
        let ground = scale.py(snap.ground_y);
        let scroll = snap.distance * scale.x;

        self.draw_sky(ground);
        self.draw_hills(ground, scroll, scale);
        self.draw_ground(ground, scroll);

        let rock = sprites::rock();
        for o in &snap.obstacles {
            rock.blit_scaled(
                &mut self.canvas,
                scale.px(o.x),
                scale.py(o.y),
                scale.px(o.width).max(1),
                scale.py(o.height).max(1),
                &ROCK_PALETTE,
            );
        }

        let c = &snap.character;
        sprites::puppy(c.frame).blit_scaled(
            &mut self.canvas,
            scale.px(c.x),
            scale.py(c.y),
            scale.px(c.width).max(1),
            scale.py(c.height).max(1),
            &PUPPY_PALETTE,
        );

        self.canvas.compose_into(fb, 0, 1);
        draw_hud(fb, snap);

        if snap.game_over {
            draw_overlay(fb, viewport, GAME_OVER_TEXT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_sky(&mut self, ground: i32) {
        let h = ground.max(1);
        for y in 0..ground {
            let c = SKY_TOP.lerp(SKY_BOT, ((y * 256) / h) as u16);
            for x in 0..self.canvas.width() as i32 {
                self.canvas.set(x, y, c);
            }
        }
    }

    fn draw_hills(&mut self, ground: i32, scroll: f32, scale: Scale) {
        let amp = scale.y * 40.0;
        for x in 0..self.canvas.width() as i32 {
            let fx = (x as f32 + scroll * 0.2) * 0.05;
            let h = (fx.sin() * 0.5 + 0.5) * amp + (fx * 1.7).sin() * amp * 0.2 + amp * 0.3;
            self.canvas.vline(x, ground - h as i32, ground, HILL_FAR);
        }
        for x in 0..self.canvas.width() as i32 {
            let fx = (x as f32 + scroll * 0.4) * 0.08;
            let h = (fx.sin() * 0.5 + 0.5) * amp * 0.6 + amp * 0.15;
            self.canvas.vline(x, ground - h as i32, ground, HILL_NEAR);
        }
    }

    fn draw_ground(&mut self, ground: i32, scroll: f32) {
        let offset = scroll as i32;
        let w = self.canvas.width() as i32;
        let h = self.canvas.height() as i32;
        for x in 0..w {
            let alt = (x + offset).rem_euclid(6) < 3;
            self.canvas.set(x, ground, if alt { GRASS } else { GRASS_LIGHT });
            self.canvas.set(x, ground + 1, GRASS);
        }
        for y in (ground + 2)..h {
            for x in 0..w {
                let stripe = (x + offset + (y - ground) * 2).rem_euclid(12) < 6;
                self.canvas.set(x, y, if stripe { DIRT } else { DIRT_DARK });
            }
        }
    }
}

fn digits(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

fn draw_hud(fb: &mut FrameBuffer, snap: &GameSnapshot) {
    let x = fb.put_str(1, 0, "Score: ", HUD);
    fb.put_u32(x, 0, snap.score, HUD);

    let label = "High Score: ";
    let w = label.len() as u16 + digits(snap.high_score);
    let x = fb.width().saturating_sub(w + 1);
    let x = fb.put_str(x, 0, label, HUD);
    fb.put_u32(x, 0, snap.high_score, HUD);
}

fn draw_overlay(fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
    let text_w = text.chars().count() as u16 + 2;
    let x = viewport.width.saturating_sub(text_w) / 2;
    let y = viewport.height / 2;
    fb.fill_rect(x, y.saturating_sub(1), text_w, 3, ' ', OVERLAY);
    fb.put_str(x + 1, y, text, OVERLAY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharacterSnapshot, ObstacleSnapshot};
    use std::ops::Range;

    fn snapshot() -> GameSnapshot {
        let mut s = GameSnapshot::default();
        s.character = CharacterSnapshot {
            x: 50.0,
            y: 260.0,
            width: 40.0,
            height: 40.0,
            ..CharacterSnapshot::default()
        };
        s
    }

    fn region_has(fb: &FrameBuffer, cols: Range<u16>, rows: Range<u16>, c: Rgb) -> bool {
        rows.clone().any(|y| {
            cols.clone().any(|x| {
                fb.get(x, y)
                    .map(|cell| cell.style.fg == c || cell.style.bg == c)
                    .unwrap_or(false)
            })
        })
    }

    #[test]
    fn test_hud_shows_scores() {
        let mut snap = snapshot();
        snap.score = 40;
        snap.high_score = 120;
        let fb = GameView::new().render(&snap, Viewport::new(80, 24));
        let hud = fb.row_text(0);
        assert!(hud.contains("Score: 40"));
        assert!(hud.trim_end().ends_with("High Score: 120"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut view = GameView::new();
        let mut snap = snapshot();
        let vp = Viewport::new(80, 24);

        let fb = view.render(&snap, vp);
        assert!((0..24).all(|y| !fb.row_text(y).contains(GAME_OVER_TEXT)));

        snap.game_over = true;
        let fb = view.render(&snap, vp);
        assert!(fb.row_text(12).contains(GAME_OVER_TEXT));
    }

    #[test]
    fn test_small_viewport_message() {
        let fb = GameView::new().render(&snapshot(), Viewport::new(20, 4));
        assert!(fb.row_text(2).contains("Terminal too small"));
    }

    #[test]
    fn test_character_and_rock_drawn_in_place() {
        // 100 columns x 80 pixel rows: 0.2 pixels per world unit on both axes.
        let mut snap = snapshot();
        snap.obstacles.push(ObstacleSnapshot {
            x: 300.0,
            y: 270.0,
            width: 30.0,
            height: 30.0,
            passed: false,
        });
        let fb = GameView::new().render(&snap, Viewport::new(100, 41));

        assert!(region_has(&fb, 10..18, 27..31, PUPPY_PALETTE[1]));
        assert!(!region_has(&fb, 60..66, 27..31, PUPPY_PALETTE[1]));
        assert!(region_has(&fb, 60..66, 28..31, ROCK_PALETTE[2]));
    }

    #[test]
    fn test_background_scrolls_with_distance() {
        let mut view = GameView::new();
        let vp = Viewport::new(80, 24);
        let mut snap = snapshot();
        let a = view.render(&snap, vp);
        snap.distance = 90.0;
        let b = view.render(&snap, vp);
        assert_eq!(a.row_text(0), b.row_text(0));
        // Ground band (last row) differs once the stripes have moved.
        let last = vp.height - 1;
        let row = |fb: &FrameBuffer| -> Vec<Cell> {
            (0..vp.width).filter_map(|x| fb.get(x, last)).collect()
        };
        assert_ne!(row(&a), row(&b));
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let mut view = GameView::new();
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&snapshot(), Viewport::new(60, 20), &mut fb);
        assert_eq!((fb.width(), fb.height()), (60, 20));
    }
}
