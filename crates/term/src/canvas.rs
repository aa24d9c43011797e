//! Pixel canvas composited into terminal cells with half blocks.
//!
//! Each terminal cell holds two vertically stacked pixels: the upper one is
//! drawn as the foreground of `▀`, the lower one as the background.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const UPPER_HALF: char = '\u{2580}';

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    px: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            px: vec![Rgb::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.px.resize(width * height, Rgb::default());
    }

    pub fn fill(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.px[y as usize * self.width + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.px[y * self.width + x])
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h.max(0) {
            for dx in 0..w.max(0) {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Vertical run from `top` (inclusive) to `bottom` (exclusive).
    pub fn vline(&mut self, x: i32, top: i32, bottom: i32, c: Rgb) {
        for y in top..bottom {
            self.set(x, y, c);
        }
    }

    /// Write the canvas into `fb` with its top-left pixel at cell (`col`, `row`).
    pub fn compose_into(&self, fb: &mut FrameBuffer, col: u16, row: u16) {
        let rows = self.height / 2;
        for r in 0..rows {
            let Ok(y) = u16::try_from(r) else { break };
            let y = row.saturating_add(y);
            if y >= fb.height() {
                break;
            }
            for c in 0..self.width {
                let Ok(x) = u16::try_from(c) else { break };
                let x = col.saturating_add(x);
                if x >= fb.width() {
                    break;
                }
                let top = self.px[(r * 2) * self.width + c];
                let bottom = self.px[(r * 2 + 1) * self.width + c];
                let cell = if top == bottom {
                    Cell::new(' ', CellStyle::new(top, top))
                } else {
                    Cell::new(UPPER_HALF, CellStyle::new(top, bottom))
                };
                fb.set(x, y, cell);
            }
        }
    }
}
