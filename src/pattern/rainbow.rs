//! Rainbow patterns built on the sinusoidal hue model

use heapless::Vec;
use rand::Rng;

use super::Pattern;
use crate::{
    color::{Rgb, hue_to_rgb, hue_to_rgb_scaled},
    frame::StripLength,
    math::{noise, ratio, unit_sine},
};

const DEFAULT_SWEEP_STEP: u32 = 5;
const JITTER_DEGREES: f64 = 60.0;
const BREATH_PERIOD: f64 = 10.0;
const DEFAULT_SEGMENTS: usize = 8;
const MAX_SEGMENTS: usize = 16;
const SEGMENT_STEP: u32 = 5;

/// Full hue circle spread over the strip, scrolling `step` pixels per frame
#[derive(Debug, Clone)]
pub struct HueSweep {
    step: u32,
}

impl HueSweep {
    pub const fn new(step: u32) -> Self {
        Self { step }
    }
}

impl Pattern for HueSweep {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self::new(DEFAULT_SWEEP_STEP)
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len() as f64;
        let offset = f64::from(frame) * f64::from(self.step);
        for (i, led) in leds.iter_mut().enumerate() {
            let hue = (i as f64 + offset) / len * 360.0;
            *led = hue_to_rgb(hue);
        }
    }
}

/// Rainbow spread over the strip with each pixel's hue pushed forward by a
/// random amount of up to 60°
#[derive(Debug, Clone)]
pub struct RainbowJitter {
    seed: u64,
}

impl RainbowJitter {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Pattern for RainbowJitter {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        Self::new(rng.r#gen())
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let jitter = noise(self.seed, frame, i, 0) * JITTER_DEGREES;
            *led = hue_to_rgb(ratio(i, len) * 360.0 + jitter);
        }
    }
}

/// Static rainbow whose brightness follows a slow sine
#[derive(Debug, Clone, Default)]
pub struct BreathingRainbow;

impl Pattern for BreathingRainbow {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let intensity = unit_sine(f64::from(frame) / BREATH_PERIOD);
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            *led = hue_to_rgb_scaled(ratio(i, len) * 360.0, intensity);
        }
    }
}

/// Strip cut into equally sized segments, each one hue of the rainbow,
/// rotating `step` pixels per frame
#[derive(Debug, Clone)]
pub struct RotatingSegments {
    colors: Vec<Rgb, MAX_SEGMENTS>,
    step: u32,
}

impl RotatingSegments {
    /// Create the pattern with `segments` rainbow colors (clamped to `1..=16`)
    #[allow(clippy::cast_precision_loss)]
    pub fn new(segments: usize, step: u32) -> Self {
        let segments = segments.clamp(1, MAX_SEGMENTS);
        let colors = (0..segments)
            .map(|i| hue_to_rgb(i as f64 / segments as f64 * 360.0))
            .collect();
        Self { colors, step }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Pattern for RotatingSegments {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self::new(DEFAULT_SEGMENTS, SEGMENT_STEP)
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }
        let segments = self.colors.len();
        let segment_len = len as f64 / segments as f64;
        let shift = (u64::from(frame) * u64::from(self.step)) % len as u64;
        for (i, led) in leds.iter_mut().enumerate() {
            let position = (i as u64 + shift) % len as u64;
            let segment = (libm::floor(position as f64 / segment_len) as usize).min(segments - 1);
            *led = self.colors[segment];
        }
    }
}
