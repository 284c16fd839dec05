//! Moving lights: chasers, comets, bouncing and scanning eyes

use rand::Rng;

use super::Pattern;
use crate::{
    color::{BLACK, RED, Rgb, WHITE, random_color, rgb_from_u32, scale_color},
    frame::StripLength,
    math::falloff,
};

const CHASER_STEP: usize = 3;

const COMET_STEP: usize = 8;
const COMET_TRAIL: f64 = 40.0;
const COMET_BACKGROUND: Rgb = rgb_from_u32(0x0A_001E);

const BOUNCE_PERIOD: f64 = 15.0;

const SCANNER_STEP: usize = 4;
const SCANNER_WIDTH: f64 = 20.0;

/// Block of `size` lit pixels moving `step` pixels per frame, wrapping
/// around the end of the strip
#[derive(Debug, Clone)]
pub struct Chaser {
    size: usize,
    color: Rgb,
    step: usize,
}

impl Chaser {
    pub const fn new(size: usize, color: Rgb, step: usize) -> Self {
        Self { size, color, step }
    }
}

impl Pattern for Chaser {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let size = rng.gen_range(5..25);
        Self::new(size, random_color(rng), CHASER_STEP)
    }

    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }
        let head = (frame as usize % len) * (self.step % len) % len;
        for (i, led) in leds.iter_mut().enumerate() {
            let pos = (i + len - head) % len;
            *led = if pos < self.size { self.color } else { BLACK };
        }
    }
}

/// White comet with a linear trail on both sides over a dark background
#[derive(Debug, Clone)]
pub struct Comet {
    step: usize,
    trail: f64,
}

impl Comet {
    pub const fn new(step: usize, trail: f64) -> Self {
        Self { step, trail }
    }
}

impl Default for Comet {
    fn default() -> Self {
        Self::new(COMET_STEP, COMET_TRAIL)
    }
}

impl Pattern for Comet {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self::default()
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }
        let head = (frame as usize % len) * (self.step % len) % len;
        for (i, led) in leds.iter_mut().enumerate() {
            let distance = i.abs_diff(head) as f64;
            *led = match falloff(distance, self.trail) {
                Some(intensity) => scale_color(WHITE, intensity),
                None => COMET_BACKGROUND,
            };
        }
    }
}

/// Light bouncing between the strip ends following `abs(sin(t))`
#[derive(Debug, Clone)]
pub struct Bounce {
    color: Rgb,
    trail: f64,
}

impl Bounce {
    pub const fn new(color: Rgb, trail: f64) -> Self {
        Self { color, trail }
    }
}

impl Pattern for Bounce {
    fn sample<R: Rng + ?Sized>(rng: &mut R, _strip: StripLength) -> Self {
        let color = random_color(rng);
        let trail: u32 = rng.gen_range(10..40);
        Self::new(color, f64::from(trail))
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let len = leds.len() as f64;
        let pos = libm::fabs(libm::sin(f64::from(frame) / BOUNCE_PERIOD) * len);
        for (i, led) in leds.iter_mut().enumerate() {
            let distance = libm::fabs(i as f64 - pos);
            *led = match falloff(distance, self.trail) {
                Some(intensity) => scale_color(self.color, intensity),
                None => BLACK,
            };
        }
    }
}

/// Scanner eye sweeping from the first pixel to one past the last and back
#[derive(Debug, Clone)]
pub struct LarsonScanner {
    color: Rgb,
    step: usize,
    width: f64,
}

impl LarsonScanner {
    pub const fn new(color: Rgb, step: usize, width: f64) -> Self {
        let step = if step == 0 { 1 } else { step };
        Self { color, step, width }
    }

    /// Frames in one forward plus backward sweep over `len` pixels
    #[allow(clippy::cast_possible_truncation)]
    pub fn period(&self, len: usize) -> u32 {
        let (forward, backward) = self.legs(len);
        (forward + backward) as u32
    }

    /// Eye position for `frame`
    pub fn position(&self, frame: u32, len: usize) -> usize {
        let (forward, backward) = self.legs(len);
        let phase = frame as usize % (forward + backward);
        if phase < forward {
            phase * self.step
        } else {
            len - (phase - forward) * self.step
        }
    }

    /// Frame counts of the forward leg (`0, step, ..` below `len`) and the
    /// backward leg (`len, len - step, ..` down to 0)
    fn legs(&self, len: usize) -> (usize, usize) {
        (len.div_ceil(self.step).max(1), len / self.step + 1)
    }
}

impl Default for LarsonScanner {
    fn default() -> Self {
        Self::new(RED, SCANNER_STEP, SCANNER_WIDTH)
    }
}

impl Pattern for LarsonScanner {
    fn sample<R: Rng + ?Sized>(_rng: &mut R, _strip: StripLength) -> Self {
        Self::default()
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
        let pos = self.position(frame, leds.len());
        for (i, led) in leds.iter_mut().enumerate() {
            let distance = i.abs_diff(pos) as f64;
            *led = match falloff(distance, self.width) {
                Some(intensity) => scale_color(self.color, intensity),
                None => BLACK,
            };
        }
    }
}
