//! Sinusoidal hue model
//!
//! Each channel is a sine wave over the hue circle, phase shifted by 120°
//! (green) and 240° (blue). This is not HSV: the channels overlap and never
//! hit a hard zero plateau, which is what gives the strip its soft rainbow.

use crate::{
    color::Rgb,
    math::{channel, radians},
};

const GREEN_PHASE: f64 = 120.0;
const BLUE_PHASE: f64 = 240.0;

#[inline]
fn wave(hue: f64, phase: f64) -> f64 {
    255.0 * (1.0 + libm::sin(radians(hue + phase))) / 2.0
}

/// Convert a hue in degrees to a color. Any real hue is accepted.
pub fn hue_to_rgb(hue: f64) -> Rgb {
    Rgb {
        r: channel(wave(hue, 0.0)),
        g: channel(wave(hue, GREEN_PHASE)),
        b: channel(wave(hue, BLUE_PHASE)),
    }
}

/// Same as [`hue_to_rgb`], with every channel scaled by `intensity`
/// before flooring.
pub fn hue_to_rgb_scaled(hue: f64, intensity: f64) -> Rgb {
    Rgb {
        r: channel(wave(hue, 0.0) * intensity),
        g: channel(wave(hue, GREEN_PHASE) * intensity),
        b: channel(wave(hue, BLUE_PHASE) * intensity),
    }
}
