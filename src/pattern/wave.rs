//! Sine driven patterns

use core::f64::consts::PI;

use rand::Rng;

use super::Pattern;
use crate::{
    color::{Rgb, rgb_from_u32, scale_color},
    frame::StripLength,
    math::{channel, noise, ratio, unit_sine},
};

const PULSE_PERIOD: f64 = 10.0;
const PULSE_RANGE: f64 = 128.0;
const PULSE_FLOOR: f64 = 50.0;

const SECTION_PERIOD: f64 = 8.0;
const SECTION_PHASE: f64 = 1.5;
const SECTION_PALETTE: [Rgb; 4] = [
    rgb_from_u32(0xFF_0064),
    rgb_from_u32(0x64_00FF),
    rgb_from_u32(0x00_FF50),
    rgb_from_u32(0xFF_5000),
];

/// Red/blue complementary sine wave with noisy green
#[derive(Debug, Clone)]
pub struct Wave {
    offset: f64,
    frequency: f64,
    seed: u64,
}

impl Wave {
    pub const fn new(offset: f64, frequency: f64, seed: u64) -> Self {
        Self {
            offset,
            frequency,
            seed,
        }
    }
}

impl Pattern for Wave {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let offset = rng.gen_range(0.0..100.0);
        let frequency = rng.gen_range(0.05..0.35);
        Self::new(offset, frequency, rng.r#gen())
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            let phase = i as f64 * self.frequency + self.offset;
            let intensity = channel(128.0 + 127.0 * libm::sin(phase));
            *led = Rgb {
                r: intensity,
                g: channel(noise(self.seed, frame, i, 0) * 128.0),
                b: 255 - intensity,
            };
        }
    }
}

/// Two counter-moving waves in ocean colors
#[derive(Debug, Clone, Default)]
pub struct Ocean;

impl Pattern for Ocean {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let t = f64::from(frame);
        for (i, led) in leds.iter_mut().enumerate() {
            let x = i as f64;
            let first = unit_sine(x / 50.0 + t / 10.0);
            let second = unit_sine(x / 30.0 - t / 15.0);
            let combined = (first + second) / 2.0;
            *led = Rgb {
                r: channel(10.0 * combined),
                g: channel(150.0 * combined + 50.0),
                b: channel(80.0 * combined + 55.0),
            };
        }
    }
}

/// Three drifting sine layers, one per channel
#[derive(Debug, Clone, Default)]
pub struct SmoothNoise;

impl Pattern for SmoothNoise {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let t = f64::from(frame);
        for (i, led) in leds.iter_mut().enumerate() {
            let x = i as f64;
            *led = Rgb {
                r: channel(255.0 * unit_sine(x / 50.0 + t / 10.0)),
                g: channel(255.0 * unit_sine(x / 30.0 - t / 15.0)),
                b: channel(255.0 * unit_sine(x / 70.0 + t / 20.0)),
            };
        }
    }
}

/// Classic plasma: four summed sines mapped through a phase-shifted palette
///
/// Negative palette lobes are clamped to zero.
#[derive(Debug, Clone, Default)]
pub struct Plasma;

impl Plasma {
    #[inline]
    fn value(x: f64, t: f64) -> f64 {
        libm::sin(x / 16.0)
            + libm::sin(t / 8.0)
            + libm::sin((x + t) / 16.0)
            + libm::sin(libm::sqrt(x * x + t * t) / 8.0)
    }
}

impl Pattern for Plasma {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let t = f64::from(frame);
        for (i, led) in leds.iter_mut().enumerate() {
            let normalized = (Self::value(i as f64, t) + 4.0) / 8.0;
            let phase = normalized * PI;
            *led = Rgb {
                r: channel(255.0 * libm::sin(phase)),
                g: channel(255.0 * libm::sin(phase + PI / 3.0)),
                b: channel(255.0 * libm::sin(phase + 2.0 * PI / 3.0)),
            };
        }
    }
}

/// Equal sections whose random per-pixel brightness pulses out of phase
#[derive(Debug, Clone)]
pub struct PulseSections {
    sections: usize,
    seed: u64,
}

impl PulseSections {
    pub fn new(sections: usize, seed: u64) -> Self {
        Self {
            sections: sections.max(1),
            seed,
        }
    }
}

impl Pattern for PulseSections {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let sections = rng.gen_range(3..8);
        Self::new(sections, rng.r#gen())
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        let t = f64::from(frame);
        for (i, led) in leds.iter_mut().enumerate() {
            let section = libm::floor(ratio(i, len) * self.sections as f64);
            let pulse = unit_sine(t / PULSE_PERIOD + section);
            let level = |salt| {
                channel(noise(self.seed, frame, i, salt) * PULSE_RANGE * pulse + PULSE_FLOOR)
            };
            *led = Rgb {
                r: level(0),
                g: level(1),
                b: level(2),
            };
        }
    }
}

/// Fixed palette sections pulsing out of phase
#[derive(Debug, Clone)]
pub struct SectionPulse {
    colors: [Rgb; 4],
}

impl SectionPulse {
    pub const fn new(colors: [Rgb; 4]) -> Self {
        Self { colors }
    }
}

impl Default for SectionPulse {
    fn default() -> Self {
        Self::new(SECTION_PALETTE)
    }
}

impl Pattern for SectionPulse {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self::default()
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        let sections = self.colors.len();
        let t = f64::from(frame);
        for (i, led) in leds.iter_mut().enumerate() {
            let section = (libm::floor(ratio(i, len) * sections as f64) as usize).min(sections - 1);
            let pulse = unit_sine(t / SECTION_PERIOD + section as f64 * SECTION_PHASE);
            *led = scale_color(self.colors[section], pulse);
        }
    }
}
