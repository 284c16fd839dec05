use core::f64::consts::PI;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Pattern;
use crate::{
    color::{Rgb, rgb_from_u32, scale_color},
    frame::StripLength,
};

const STAR_COLOR: Rgb = rgb_from_u32(0xFF_5064);
const MIN_SPEED: f64 = 0.02;
const MAX_SPEED: f64 = 0.12;

/// Brightness phase of one pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub brightness: f64,
    pub speed: f64,
}

impl Star {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            brightness: rng.gen_range(0.0..1.0),
            speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
        }
    }

    /// Advance one frame. Past full brightness the star restarts dark with
    /// a fresh speed.
    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.brightness += self.speed;
        if self.brightness > 1.0 {
            self.brightness = 0.0;
            self.speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
        }
    }
}

/// Every pixel a star fading in and out at its own speed
#[derive(Debug, Clone)]
pub struct Twinkle {
    stars: Vec<Star>,
    rng: StdRng,
    seed: u64,
    color: Rgb,
}

impl Twinkle {
    pub fn new(seed: u64, strip: StripLength) -> Self {
        let mut twinkle = Self {
            stars: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
            color: STAR_COLOR,
        };
        twinkle.populate(strip.get());
        twinkle
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    fn populate(&mut self, len: usize) {
        let rng = &mut self.rng;
        self.stars = (0..len).map(|_| Star::sample(rng)).collect();
    }
}

impl Pattern for Twinkle {
    const STATEFUL: bool = true;

    fn sample<R: Rng + ?Sized>(rng: &mut R, strip: StripLength) -> Self {
        Self::new(rng.r#gen(), strip)
    }

    fn render(&mut self, _frame: u32, leds: &mut [Rgb]) {
        if self.stars.len() != leds.len() {
            self.populate(leds.len());
        }
        for (star, led) in self.stars.iter_mut().zip(leds.iter_mut()) {
            star.step(&mut self.rng);
            *led = scale_color(self.color, libm::sin(star.brightness * PI));
        }
    }

    fn reset(&mut self) {
        let len = self.stars.len();
        self.rng = StdRng::seed_from_u64(self.seed);
        self.populate(len);
    }
}
