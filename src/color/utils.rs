use rand::Rng;

use crate::{color::Rgb, math::channel};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Linear interpolation between two colors
///
/// # Arguments
/// * `a` - Start color
/// * `b` - End color
/// * `ratio` - 0.0 = all a, 1.0 = all b
#[inline]
pub fn lerp_colors(a: Rgb, b: Rgb, ratio: f64) -> Rgb {
    let lerp = |from: u8, to: u8| {
        let from = f64::from(from);
        channel(from + (f64::from(to) - from) * ratio)
    };
    Rgb {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
    }
}

/// Scale every channel by `intensity`, flooring the result
#[inline]
pub fn scale_color(color: Rgb, intensity: f64) -> Rgb {
    Rgb {
        r: channel(f64::from(color.r) * intensity),
        g: channel(f64::from(color.g) * intensity),
        b: channel(f64::from(color.b) * intensity),
    }
}

/// Shift every channel by its own offset, saturating at both ends
#[inline]
pub fn offset_color(color: Rgb, offsets: [f64; 3]) -> Rgb {
    Rgb {
        r: channel(f64::from(color.r) + offsets[0]),
        g: channel(f64::from(color.g) + offsets[1]),
        b: channel(f64::from(color.b) + offsets[2]),
    }
}

/// Uniformly random color
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb {
        r: rng.r#gen(),
        g: rng.r#gen(),
        b: rng.r#gen(),
    }
}
