//! Strip length and frames
//!
//! A [`Frame`] always holds exactly as many pixels as the strip it was built
//! for. Frames are immutable once built: they are rendered, wrapped in an
//! explicit command, sent once and dropped.

use core::fmt;
use core::num::NonZeroUsize;

use crate::color::Rgb;

/// Pixel count of the strip the light controller drives
pub const DEFAULT_STRIP_LENGTH: usize = 640;

/// Errors raised when a frame precondition does not hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Strip length must be at least one pixel
    EmptyStrip,
    /// Pixel count differs from the strip length
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrip => write!(f, "strip length must be positive"),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "frame has {} pixels, strip has {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for PatternError {}

/// Non-zero number of pixels on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StripLength(NonZeroUsize);

impl StripLength {
    pub const DEFAULT: Self = match NonZeroUsize::new(DEFAULT_STRIP_LENGTH) {
        Some(len) => Self(len),
        None => unreachable!(),
    };

    /// Create a strip length, rejecting zero
    pub const fn new(len: usize) -> Result<Self, PatternError> {
        match NonZeroUsize::new(len) {
            Some(len) => Ok(Self(len)),
            None => Err(PatternError::EmptyStrip),
        }
    }

    /// Number of pixels
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for StripLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StripLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One complete set of pixel colors for the whole strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<Rgb>,
}

impl Frame {
    /// Wrap rendered pixels, checking them against the strip length
    pub fn from_pixels(pixels: Vec<Rgb>, strip: StripLength) -> Result<Self, PatternError> {
        if pixels.len() != strip.get() {
            return Err(PatternError::LengthMismatch {
                expected: strip.get(),
                actual: pixels.len(),
            });
        }
        Ok(Self { pixels })
    }

    /// Render a frame in place into a buffer sized for the strip
    pub fn render(strip: StripLength, render: impl FnOnce(&mut [Rgb])) -> Self {
        let mut pixels = vec![Rgb::default(); strip.get()];
        render(&mut pixels);
        Self { pixels }
    }

    /// Frame with every pixel set to `color`
    pub fn filled(color: Rgb, strip: StripLength) -> Self {
        Self {
            pixels: vec![color; strip.get()],
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for frames built through the public constructors
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check the frame against a strip length
    pub fn validate(&self, strip: StripLength) -> Result<(), PatternError> {
        if self.len() == strip.get() {
            Ok(())
        } else {
            Err(PatternError::LengthMismatch {
                expected: strip.get(),
                actual: self.len(),
            })
        }
    }
}
