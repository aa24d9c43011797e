//! Palette-indexed sprites, scaled onto the canvas with nearest-neighbour sampling.

use crate::canvas::Canvas;
use crate::core::FrameId;
use crate::fb::Rgb;

const PUPPY_W: usize = 10;
const PUPPY_H: usize = 8;

/// One pose per run-cycle frame. 0 is transparent.
#[rustfmt::skip]
const PUPPY_FRAMES: [[u8; PUPPY_W * PUPPY_H]; 6] = [
    [
        0, 0, 0, 0, 0, 0, 0, 2, 2, 0,
        2, 0, 0, 0, 0, 0, 2, 1, 1, 1,
        0, 0, 0, 0, 0, 0, 1, 1, 3, 1,
        0, 1, 1, 1, 1, 1, 1, 1, 1, 4,
        0, 1, 1, 2, 2, 1, 1, 1, 0, 0,
        0, 1, 1, 1, 1, 1, 1, 0, 0, 0,
        0, 1, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 2, 0, 0, 0, 0, 2, 0, 0, 0,
    ],
    [
        2, 0, 0, 0, 0, 0, 0, 2, 2, 0,
        0, 0, 0, 0, 0, 0, 2, 1, 1, 1,
        0, 0, 0, 0, 0, 0, 1, 1, 3, 1,
        0, 1, 1, 1, 1, 1, 1, 1, 1, 4,
        0, 1, 1, 2, 2, 1, 1, 1, 0, 0,
        0, 1, 1, 1, 1, 1, 1, 0, 0, 0,
        0, 1, 0, 0, 0, 0, 1, 0, 0, 0,
        2, 0, 0, 0, 0, 0, 0, 2, 0, 0,
    ],
    [
        0, 0, 0, 0, 0, 0, 0, 2, 2, 0,
        2, 0, 0, 0, 0, 0, 2, 1, 1, 1,
        0, 0, 0, 0, 0, 0, 1, 1, 3, 1,
        0, 1, 1, 1, 1, 1, 1, 1, 1, 4,
        0, 1, 1, 2, 2, 1, 1, 1, 0, 0,
        0, 1, 1, 1, 1, 1, 1, 0, 0, 0,
        0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
        0, 0, 2, 0, 0, 2, 0, 0, 0, 0,
    ],
    [
        2, 0, 0, 0, 0, 0, 0, 2, 2, 0,
        0, 0, 0, 0, 0, 0, 2, 1, 1, 1,
        0, 0, 0, 0, 0, 0, 1, 1, 3, 1,
        0, 1, 1, 1, 1, 1, 1, 1, 1, 4,
        0, 1, 1, 2, 2, 1, 1, 1, 0, 0,
        0, 1, 1, 1, 1, 1, 1, 0, 0, 0,
        0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        0, 0, 0, 2, 0, 0, 0, 2, 0, 0,
    ],
    [
        0, 0, 0, 0, 0, 0, 0, 2, 2, 0,
        2, 0, 0, 0, 0, 0, 2, 1, 1, 1,
        0, 0, 0, 0, 0, 0, 1, 1, 3, 1,
        0, 1, 1, 1, 1, 1, 1, 1, 1, 4,
        0, 1, 1, 2, 2, 1, 1, 1, 0, 0,
        0, 1, 1, 1, 1, 1, 1, 0, 0, 0,
        0, 1, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 2, 0, 0, 2, 0, 0, 0, 0,
    ],
    [
        2, 0, 0, 0, 0, 0, 0, 2, 2, 0,
        0, 0, 0, 0, 0, 0, 2, 1, 1, 1,
        0, 0, 0, 0, 0, 0, 1, 1, 3, 1,
        0, 1, 1, 1, 1, 1, 1, 1, 1, 4,
        0, 1, 1, 2, 2, 1, 1, 1, 0, 0,
        0, 1, 1, 1, 1, 1, 1, 0, 0, 0,
        0, 1, 0, 0, 0, 1, 0, 0, 0, 0,
        2, 0, 0, 0, 0, 0, 2, 0, 0, 0,
    ],
];

#[rustfmt::skip]
const ROCK: [u8; 8 * 5] = [
    0, 0, 2, 2, 2, 0, 0, 0,
    0, 2, 1, 1, 1, 2, 2, 0,
    2, 1, 1, 3, 1, 1, 1, 2,
    2, 1, 1, 1, 1, 1, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2,
];

pub const PUPPY_PALETTE: [Rgb; 5] = [
    Rgb::new(0, 0, 0),
    Rgb::new(222, 170, 105),
    Rgb::new(120, 72, 40),
    Rgb::new(20, 20, 20),
    Rgb::new(235, 110, 130),
];

pub const ROCK_PALETTE: [Rgb; 4] = [
    Rgb::new(0, 0, 0),
    Rgb::new(128, 124, 120),
    Rgb::new(82, 78, 76),
    Rgb::new(190, 186, 180),
];

#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    width: usize,
    height: usize,
    pixels: &'static [u8],
}

impl Sprite {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y * self.width + x]
    }

    /// Stretch the sprite over the `w`x`h` pixel rect at (`x`, `y`).
    pub fn blit_scaled(&self, canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, palette: &[Rgb]) {
        if w <= 0 || h <= 0 {
            return;
        }
        for dy in 0..h {
            let sy = (dy as usize * self.height) / h as usize;
            for dx in 0..w {
                let sx = (dx as usize * self.width) / w as usize;
                let idx = self.pixel(sx, sy) as usize;
                if idx == 0 {
                    continue;
                }
                if let Some(&c) = palette.get(idx) {
                    canvas.set(x + dx, y + dy, c);
                }
            }
        }
    }
}

/// Run-cycle pose for `frame`; ids past the cycle wrap around.
pub fn puppy(frame: FrameId) -> Sprite {
    Sprite {
        width: PUPPY_W,
        height: PUPPY_H,
        pixels: &PUPPY_FRAMES[frame.0 as usize % PUPPY_FRAMES.len()],
    }
}

pub fn rock() -> Sprite {
    Sprite {
        width: 8,
        height: 5,
        pixels: &ROCK,
    }
}
