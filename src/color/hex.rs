//! `#rrggbb` colors used by the strobe and breathe commands

use core::fmt;
use core::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{Rgb, rgb_from_u32};

/// Exclusive upper bound for randomly drawn colors
const RANDOM_COLOR_LIMIT: u32 = 0xFF_FFFF;

/// A color written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub Rgb);

/// Error returned for malformed hex colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    /// Input does not start with `#`
    MissingHash,
    /// Input is not exactly six hex digits after the `#`
    InvalidLength(usize),
    /// Input contains a non-hex digit
    InvalidDigit,
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "hex color must start with '#'"),
            Self::InvalidLength(len) => {
                write!(f, "hex color must have 6 digits, got {}", len)
            }
            Self::InvalidDigit => write!(f, "hex color contains a non-hex digit"),
        }
    }
}

impl std::error::Error for HexColorError {}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb { r, g, b })
    }

    pub const fn rgb(self) -> Rgb {
        self.0
    }

    /// Draw a random color in `#000000..#fffffe`
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rgb_from_u32(rng.gen_range(0..RANDOM_COLOR_LIMIT)))
    }
}

impl From<Rgb> for HexColor {
    fn from(color: Rgb) -> Self {
        Self(color)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(HexColorError::MissingHash)?;
        if digits.len() != 6 {
            return Err(HexColorError::InvalidLength(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit);
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| HexColorError::InvalidDigit)?;
        Ok(Self(rgb_from_u32(value)))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
