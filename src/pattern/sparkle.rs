//! Per-pixel noise patterns
//!
//! The randomness here is hashed from `(seed, frame, pixel)`, so rendering
//! the same frame twice gives the same pixels.

use rand::Rng;

use super::Pattern;
use crate::{
    color::{BLACK, Rgb, offset_color, random_color, rgb_from_u32},
    frame::StripLength,
    math::{channel, noise, ratio},
};

const SPARKLE_THRESHOLD: f64 = 0.85;

const GOLD_THRESHOLD: f64 = 0.92;
const GOLD: Rgb = rgb_from_u32(0xFF_D700);
const NIGHT_BLUE: Rgb = rgb_from_u32(0x14_143C);

const EXPLOSION_THRESHOLD: f64 = 0.7;

const STATIC_SPREAD: f64 = 100.0;

#[inline]
fn noisy_color(seed: u64, frame: u32, index: usize, scale: f64) -> Rgb {
    Rgb {
        r: channel(noise(seed, frame, index, 1) * scale),
        g: channel(noise(seed, frame, index, 2) * scale),
        b: channel(noise(seed, frame, index, 3) * scale),
    }
}

/// Every channel of every pixel uniformly random
#[derive(Debug, Clone)]
pub struct RandomPixels {
    seed: u64,
}

impl RandomPixels {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Pattern for RandomPixels {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        Self::new(rng.r#gen())
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = noisy_color(self.seed, frame, i, 256.0);
        }
    }
}

/// About 15% of pixels lit with a random color, the rest black
#[derive(Debug, Clone)]
pub struct Sparkle {
    seed: u64,
}

impl Sparkle {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Pattern for Sparkle {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        Self::new(rng.r#gen())
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if noise(self.seed, frame, i, 0) > SPARKLE_THRESHOLD {
                noisy_color(self.seed, frame, i, 256.0)
            } else {
                BLACK
            };
        }
    }
}

/// About 8% gold pixels over a dark blue base
#[derive(Debug, Clone)]
pub struct GoldSparkle {
    seed: u64,
}

impl GoldSparkle {
    /// Color of the unlit pixels
    pub const BASE: Rgb = NIGHT_BLUE;

    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Pattern for GoldSparkle {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        Self::new(rng.r#gen())
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if noise(self.seed, frame, i, 0) > GOLD_THRESHOLD {
                GOLD
            } else {
                Self::BASE
            };
        }
    }
}

/// About 30% of pixels lit with a random color at a random intensity
#[derive(Debug, Clone)]
pub struct ExplodingSparkles {
    seed: u64,
}

impl ExplodingSparkles {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Pattern for ExplodingSparkles {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        Self::new(rng.r#gen())
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if noise(self.seed, frame, i, 0) > EXPLOSION_THRESHOLD {
                let intensity = noise(self.seed, frame, i, 4);
                noisy_color(self.seed, frame, i, 255.0 * intensity)
            } else {
                BLACK
            };
        }
    }
}

/// Base color with up to ±50 of noise on every channel
#[derive(Debug, Clone)]
pub struct StaticNoise {
    base: Rgb,
    seed: u64,
}

impl StaticNoise {
    pub const fn new(base: Rgb, seed: u64) -> Self {
        Self { base, seed }
    }
}

impl Pattern for StaticNoise {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let base = random_color(rng);
        Self::new(base, rng.r#gen())
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            let offset = |salt| {
                libm::floor(noise(self.seed, frame, i, salt) * STATIC_SPREAD - STATIC_SPREAD / 2.0)
            };
            *led = offset_color(self.base, [offset(1), offset(2), offset(3)]);
        }
    }
}

/// Warm flicker, brightest in the middle of the strip
#[derive(Debug, Clone)]
pub struct Fire {
    seed: u64,
}

impl Fire {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Pattern for Fire {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        Self::new(rng.r#gen())
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let flicker = noise(self.seed, frame, i, 0) * 0.5 + 0.5;
            let base = libm::sin(ratio(i, len) * core::f64::consts::PI) * 0.3 + 0.7;
            *led = Rgb {
                r: channel(255.0 * flicker * base),
                g: channel(100.0 * flicker * base),
                b: channel(10.0 * flicker),
            };
        }
    }
}
