use rand::Rng;

use super::Pattern;
use crate::{
    color::{BLACK, Rgb},
    frame::StripLength,
    math::channel,
};

const DROP_COUNT: usize = 30;
const TRAIL_LENGTH: usize = 15;

/// Single falling drop: head position and pixels advanced per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainDrop {
    pub pos: usize,
    pub speed: usize,
}

/// Green drops with fading trails falling along the strip
///
/// Drop positions advance once per rendered frame and wrap around the
/// strip end, trails included.
#[derive(Debug, Clone)]
pub struct MatrixRain {
    drops: Vec<RainDrop>,
    initial: Vec<RainDrop>,
}

impl MatrixRain {
    pub fn new(drops: Vec<RainDrop>) -> Self {
        Self {
            initial: drops.clone(),
            drops,
        }
    }

    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn trail_color(trail: usize) -> Rgb {
        let intensity = 1.0 - trail as f64 / TRAIL_LENGTH as f64;
        Rgb {
            r: 0,
            g: channel(255.0 * intensity),
            b: channel(50.0 * intensity),
        }
    }
}

impl Pattern for MatrixRain {
    const STATEFUL: bool = true;

    fn sample<R: Rng + ?Sized>(rng: &mut R, strip: StripLength) -> Self {
        let drops = (0..DROP_COUNT)
            .map(|_| RainDrop {
                pos: rng.gen_range(0..strip.get()),
                speed: rng.gen_range(2..7),
            })
            .collect();
        Self::new(drops)
    }

    fn render(&mut self, _frame: u32, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }
        leds.fill(BLACK);
        for drop in &mut self.drops {
            for trail in 0..TRAIL_LENGTH {
                let pos = (drop.pos + len - trail % len) % len;
                leds[pos] = Self::trail_color(trail);
            }
            drop.pos = (drop.pos + drop.speed) % len;
        }
    }

    fn reset(&mut self) {
        self.drops.clone_from(&self.initial);
    }
}
