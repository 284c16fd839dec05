//! Floating point helpers shared by the patterns.
//!
//! All trigonometry goes through `libm` so that rendered frames are
//! bit-identical on every platform.

use core::f64::consts::PI;

/// Floor a channel value and clamp it to `0..=255`.
///
/// NaN maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn channel(value: f64) -> u8 {
    let floored = libm::floor(value);
    if floored.is_nan() || floored <= 0.0 {
        0
    } else if floored >= 255.0 {
        255
    } else {
        floored as u8
    }
}

/// Sine remapped from `-1..=1` to `0..=1`
#[inline]
pub fn unit_sine(x: f64) -> f64 {
    libm::sin(x) * 0.5 + 0.5
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Linear falloff around a point: 1 at the point, 0 at `width` and beyond
#[inline]
pub fn falloff(distance: f64, width: f64) -> Option<f64> {
    if distance < width {
        Some(1.0 - distance / width)
    } else {
        None
    }
}

/// SplitMix64 finalizer
#[inline]
pub const fn hash(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Deterministic noise in `0..1` for one pixel of one frame.
///
/// `salt` separates independent draws for the same pixel (one per channel,
/// one for a threshold, ...).
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn noise(seed: u64, frame: u32, index: usize, salt: u64) -> f64 {
    let position = (u64::from(frame) << 32) | (index as u64 & 0xFFFF_FFFF);
    let mixed = hash(seed ^ hash(position ^ hash(salt)));
    // Top 53 bits give a uniformly spaced f64 in 0..1
    (mixed >> 11) as f64 / (1u64 << 53) as f64
}

/// Position of `index` along a strip of `len` pixels as `0..1`
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(index: usize, len: usize) -> f64 {
    index as f64 / len as f64
}
