//! Spatial fills: palettes, stripes, blocks, gradients and wipes

use heapless::Vec;
use rand::Rng;

use super::Pattern;
use crate::{
    color::{BLACK, Rgb, lerp_colors, random_color, rgb_from_u32},
    frame::StripLength,
    math::channel,
};

const MAX_PALETTE: usize = 6;

const BLOCK_RED_FREQ: f64 = 1.5;
const BLOCK_GREEN_FREQ: f64 = 2.3;
const BLOCK_BLUE_FREQ: f64 = 0.7;

const THEATER_SPACING: u32 = 10;
const THEATER_LIT: u32 = 3;
const THEATER_COLOR: Rgb = rgb_from_u32(0xFF_3200);

const COLLISION_STEP: usize = 2;
const COLLISION_LEFT: Rgb = rgb_from_u32(0xFF_0064);
const COLLISION_RIGHT: Rgb = rgb_from_u32(0x00_64FF);

/// Repeating palette: pixel `i` takes color `i mod n`
#[derive(Debug, Clone)]
pub struct Alternating {
    colors: Vec<Rgb, MAX_PALETTE>,
}

impl Alternating {
    /// Create from up to six colors. Extra colors are ignored; an empty
    /// palette renders black.
    pub fn new(colors: &[Rgb]) -> Self {
        Self {
            colors: colors.iter().copied().take(MAX_PALETTE).collect(),
        }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Pattern for Alternating {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let count = rng.gen_range(2..=MAX_PALETTE);
        let colors = (0..count).map(|_| random_color(rng)).collect();
        Self { colors }
    }

    fn render(&mut self, _frame: u32, leds: &mut [Rgb]) {
        if self.colors.is_empty() {
            leds.fill(BLACK);
            return;
        }
        for (i, led) in leds.iter_mut().enumerate() {
            *led = self.colors[i % self.colors.len()];
        }
    }
}

/// Blocks of `block_size` pixels, each colored from sines of its index
#[derive(Debug, Clone)]
pub struct Blocks {
    block_size: usize,
}

impl Blocks {
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
        }
    }
}

impl Pattern for Blocks {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        Self::new(rng.gen_range(5..35))
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, _frame: u32, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            let block = (i / self.block_size) as f64;
            *led = Rgb {
                r: channel(libm::sin(block * BLOCK_RED_FREQ) * 127.0 + 128.0),
                g: channel(libm::cos(block * BLOCK_GREEN_FREQ) * 127.0 + 128.0),
                b: channel(libm::sin(block * BLOCK_BLUE_FREQ) * 127.0 + 128.0),
            };
        }
    }
}

/// Two colors alternating every `width` pixels
#[derive(Debug, Clone)]
pub struct Stripes {
    width: usize,
    first: Rgb,
    second: Rgb,
}

impl Stripes {
    pub fn new(width: usize, first: Rgb, second: Rgb) -> Self {
        Self {
            width: width.max(1),
            first,
            second,
        }
    }

    fn sample_with_width<R: Rng + ?Sized>(rng: &mut R, width: usize) -> Self {
        let first = random_color(rng);
        let second = random_color(rng);
        Self::new(width, first, second)
    }
}

impl Pattern for Stripes {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let width = rng.gen_range(3..23);
        Self::sample_with_width(rng, width)
    }

    fn render(&mut self, _frame: u32, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if (i / self.width) % 2 == 0 {
                self.first
            } else {
                self.second
            };
        }
    }
}

/// Stripes with small cells
#[derive(Debug, Clone)]
pub struct Checker(Stripes);

impl Checker {
    pub fn new(size: usize, first: Rgb, second: Rgb) -> Self {
        Self(Stripes::new(size, first, second))
    }
}

impl Pattern for Checker {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let size = rng.gen_range(2..17);
        Self(Stripes::sample_with_width(rng, size))
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        self.0.render(frame, leds);
    }
}

/// Linear gradient from the first pixel to the last
#[derive(Debug, Clone)]
pub struct Gradient {
    start: Rgb,
    end: Rgb,
}

impl Gradient {
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }
}

impl Pattern for Gradient {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let start = random_color(rng);
        let end = random_color(rng);
        Self::new(start, end)
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, _frame: u32, leds: &mut [Rgb]) {
        let last = leds.len().saturating_sub(1).max(1) as f64;
        for (i, led) in leds.iter_mut().enumerate() {
            *led = lerp_colors(self.start, self.end, i as f64 / last);
        }
    }
}

/// Marquee chase: 3 lit pixels out of every 10, moving one pixel per frame
#[derive(Debug, Clone)]
pub struct TheaterChase {
    color: Rgb,
}

impl TheaterChase {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    /// Frames in one full period of the chase
    pub const fn period() -> u32 {
        THEATER_SPACING
    }
}

impl Default for TheaterChase {
    fn default() -> Self {
        Self::new(THEATER_COLOR)
    }
}

impl Pattern for TheaterChase {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self::default()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let offset = u64::from(frame % THEATER_SPACING);
        for (i, led) in leds.iter_mut().enumerate() {
            let phase = ((i as u64 + offset) % u64::from(THEATER_SPACING)) as u32;
            *led = if phase < THEATER_LIT { self.color } else { BLACK };
        }
    }
}

/// Two wipes, one from each end, advancing `step` pixels per frame until
/// they meet in the middle
#[derive(Debug, Clone)]
pub struct ColorCollision {
    step: usize,
}

impl ColorCollision {
    pub fn new(step: usize) -> Self {
        Self { step: step.max(1) }
    }

    /// Frames until the wipes meet on a strip of `len` pixels
    #[allow(clippy::cast_possible_truncation)]
    pub fn frames_to_meet(&self, len: usize) -> u32 {
        (len / 2).div_ceil(self.step) as u32
    }
}

impl Default for ColorCollision {
    fn default() -> Self {
        Self::new(COLLISION_STEP)
    }
}

impl Pattern for ColorCollision {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self::default()
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        let pos = (frame as usize).saturating_mul(self.step);
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if i <= pos {
                COLLISION_LEFT
            } else if i >= len.saturating_sub(pos) {
                COLLISION_RIGHT
            } else {
                BLACK
            };
        }
    }
}
