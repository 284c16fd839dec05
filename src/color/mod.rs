mod hex;
mod sine;
mod utils;

use smart_leds::RGB8;

pub use hex::{HexColor, HexColorError};
pub use sine::{hue_to_rgb, hue_to_rgb_scaled};
pub use utils::{lerp_colors, offset_color, random_color, rgb_from_u32, scale_color};

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
