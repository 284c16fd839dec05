//! Pattern system with compile-time known pattern variants
//!
//! Every pattern is a small struct holding its (sampled) parameters and
//! implementing [`Pattern`]. [`PatternSlot`] wraps all of them in one enum
//! and [`PatternId`] names them.
//!
//! Parameter sampling and pixel computation are split: `Pattern::sample`
//! draws parameters from an explicit random source, `Pattern::render` is a
//! function of those parameters, the frame index and the strip length only.
//! The two stateful patterns ([`MatrixRain`], [`Twinkle`]) advance their
//! state once per rendered frame instead.

mod chase;
mod fill;
mod rain;
mod rainbow;
mod sparkle;
mod twinkle;
mod wave;

use core::fmt;
use core::str::FromStr;

use rand::Rng;

pub use chase::{Bounce, Chaser, Comet, LarsonScanner};
pub use fill::{Alternating, Blocks, Checker, ColorCollision, Gradient, Stripes, TheaterChase};
pub use rain::{MatrixRain, RainDrop};
pub use rainbow::{BreathingRainbow, HueSweep, RainbowJitter, RotatingSegments};
pub use sparkle::{ExplodingSparkles, Fire, GoldSparkle, RandomPixels, Sparkle, StaticNoise};
pub use twinkle::{Star, Twinkle};
pub use wave::{Ocean, Plasma, PulseSections, SectionPulse, SmoothNoise, Wave};

use crate::{
    color::Rgb,
    frame::{Frame, PatternError, StripLength},
};

pub trait Pattern {
    /// Set if rendering the same frame twice may give different pixels
    ///
    /// Stateless patterns are pure functions of the strip length, the frame
    /// index and their parameters.
    const STATEFUL: bool = false;

    /// Draw parameters for a strip of the given length
    fn sample<R: Rng + ?Sized>(rng: &mut R, strip: StripLength) -> Self
    where
        Self: Sized;

    /// Render a single frame
    fn render(&mut self, frame: u32, leds: &mut [Rgb]);

    /// Reset pattern state
    fn reset(&mut self) {}
}

/// Error returned when parsing an unknown pattern name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPattern(pub String);

impl fmt::Display for UnknownPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pattern '{}'", self.0)
    }
}

impl std::error::Error for UnknownPattern {}

macro_rules! patterns {
    ($( $(#[$doc:meta])* $variant:ident($ty:ty) => $name:literal, )*) => {
        /// Pattern slot - enum containing all possible patterns
        #[derive(Debug, Clone)]
        pub enum PatternSlot {
            $( $(#[$doc])* $variant($ty), )*
        }

        /// Known pattern ids that can be requested.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum PatternId {
            $( $(#[$doc])* $variant, )*
        }

        impl PatternId {
            /// Every pattern, in catalog order
            pub const ALL: &'static [Self] = &[$( Self::$variant, )*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            pub fn parse_from_str(s: &str) -> Option<Self> {
                match s {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }

            pub const fn is_stateful(self) -> bool {
                match self {
                    $( Self::$variant => <$ty as Pattern>::STATEFUL, )*
                }
            }

            /// Draw the parameters of this pattern and build its slot
            pub fn sample<R: Rng + ?Sized>(self, rng: &mut R, strip: StripLength) -> PatternSlot {
                match self {
                    $( Self::$variant => PatternSlot::$variant(<$ty>::sample(rng, strip)), )*
                }
            }
        }

        impl PatternSlot {
            /// Render the current pattern
            pub fn render(&mut self, frame: u32, leds: &mut [Rgb]) {
                match self {
                    $( Self::$variant(pattern) => pattern.render(frame, leds), )*
                }
            }

            /// Reset the pattern state
            pub fn reset(&mut self) {
                match self {
                    $( Self::$variant(pattern) => Pattern::reset(pattern), )*
                }
            }

            /// Get the pattern ID for external observation
            pub fn id(&self) -> PatternId {
                match self {
                    $( Self::$variant(_) => PatternId::$variant, )*
                }
            }
        }
    };
}

patterns! {
    /// Rainbow scrolling along the strip
    HueSweep(HueSweep) => "hue_sweep",
    /// Rainbow with per-pixel hue jitter
    RainbowJitter(RainbowJitter) => "rainbow_jitter",
    /// Static rainbow fading in and out
    BreathingRainbow(BreathingRainbow) => "breathing_rainbow",
    /// Rotating block of rainbow colored segments
    RotatingSegments(RotatingSegments) => "rotating_segments",
    /// Every channel of every pixel random
    RandomPixels(RandomPixels) => "random_pixels",
    /// Repeating palette of random colors
    Alternating(Alternating) => "alternating",
    /// Red/blue sine wave with green noise
    Wave(Wave) => "wave",
    /// Fixed-size blocks colored by sine of the block index
    Blocks(Blocks) => "blocks",
    /// Sparse random colored pixels on black
    Sparkle(Sparkle) => "sparkle",
    /// Two-color stripes
    Stripes(Stripes) => "stripes",
    /// Two-color narrow checker
    Checker(Checker) => "checker",
    /// Linear gradient between two colors
    Gradient(Gradient) => "gradient",
    /// Random noise around a base color
    StaticNoise(StaticNoise) => "static_noise",
    /// Colored block travelling along the strip
    Chaser(Chaser) => "chaser",
    /// Sections pulsing with random brightness
    PulseSections(PulseSections) => "pulse_sections",
    /// Light bouncing back and forth with a trail
    Bounce(Bounce) => "bounce",
    /// Random bursts of random intensity
    ExplodingSparkles(ExplodingSparkles) => "exploding_sparkles",
    /// Flickering fire
    Fire(Fire) => "fire",
    /// Green/blue waves
    Ocean(Ocean) => "ocean",
    /// White comet with a fading trail
    Comet(Comet) => "comet",
    /// Fixed palette sections pulsing out of phase
    SectionPulse(SectionPulse) => "section_pulse",
    /// Gold sparkles over dark blue
    GoldSparkle(GoldSparkle) => "gold_sparkle",
    /// Classic theater marquee chase
    TheaterChase(TheaterChase) => "theater_chase",
    /// Two wipes meeting in the middle
    ColorCollision(ColorCollision) => "color_collision",
    /// Three drifting sine layers, one per channel
    SmoothNoise(SmoothNoise) => "smooth_noise",
    /// Red scanner eye sweeping back and forth
    LarsonScanner(LarsonScanner) => "larson_scanner",
    /// 1D plasma
    Plasma(Plasma) => "plasma",
    /// Falling green drops with trails
    MatrixRain(MatrixRain) => "matrix_rain",
    /// Independently twinkling stars
    Twinkle(Twinkle) => "twinkle",
}

impl PatternSlot {
    /// Render a complete frame for the strip
    pub fn render_frame(&mut self, strip: StripLength, frame: u32) -> Frame {
        Frame::render(strip, |leds| self.render(frame, leds))
    }

    /// Render a frame for `pixel_count` pixels
    ///
    /// Fails for a zero pixel count instead of producing an empty frame.
    pub fn render_pixels(&mut self, pixel_count: usize, frame: u32) -> Result<Frame, PatternError> {
        let strip = StripLength::new(pixel_count)?;
        Ok(self.render_frame(strip, frame))
    }

    pub fn is_stateful(&self) -> bool {
        self.id().is_stateful()
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternId {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from_str(s).ok_or_else(|| UnknownPattern(s.to_owned()))
    }
}
