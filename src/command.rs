//! Commands understood by the remote light controller
//!
//! Each [`Command`] variant maps to one endpoint and one JSON body shape.
//! Solid and explicit bodies carry numeric channels, the strobe, breathe and
//! rainbow bodies carry their numbers as strings.

use core::fmt;

use crate::{
    color::{HexColor, Rgb},
    frame::Frame,
};

/// A single request to the light controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the whole strip to one color
    SolidColor(Rgb),
    /// Flash `color` every `speed` ms for `duration` ms
    Strobe {
        color: HexColor,
        speed: u32,
        duration: u32,
    },
    /// Fade `color` in and out at `speed`
    Breathe { color: HexColor, speed: u32 },
    /// Controller side rainbow animation
    Rainbow {
        num_rainbows: u32,
        value: u32,
        speed: u32,
    },
    /// Per pixel colors for the whole strip
    Explicit(Frame),
}

/// Command discriminant, used for logging and routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    SolidColor,
    Strobe,
    Breathe,
    Rainbow,
    Explicit,
}

impl CommandKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SolidColor => "solid",
            Self::Strobe => "strobe",
            Self::Breathe => "breathe",
            Self::Rainbow => "rainbow",
            Self::Explicit => "explicit",
        }
    }

    /// Endpoint path on the controller
    pub const fn path(self) -> &'static str {
        match self {
            Self::SolidColor => "/update-led-color",
            Self::Strobe => "/animate-strobe",
            Self::Breathe => "/animate-breathe",
            Self::Rainbow => "/animate-rainbow",
            Self::Explicit => "/animate-explicit",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    pub const fn solid(r: u8, g: u8, b: u8) -> Self {
        Self::SolidColor(Rgb { r, g, b })
    }

    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::SolidColor(_) => CommandKind::SolidColor,
            Self::Strobe { .. } => CommandKind::Strobe,
            Self::Breathe { .. } => CommandKind::Breathe,
            Self::Rainbow { .. } => CommandKind::Rainbow,
            Self::Explicit(_) => CommandKind::Explicit,
        }
    }

    pub const fn path(&self) -> &'static str {
        self.kind().path()
    }

    /// Serialize the request body
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::SolidColor(color) => serde_json::to_string(&wire::SolidColorBody {
                rgb: (*color).into(),
            }),
            Self::Strobe {
                color,
                speed,
                duration,
            } => serde_json::to_string(&wire::StrobeBody {
                color: *color,
                speed: speed.to_string(),
                duration: duration.to_string(),
            }),
            Self::Breathe { color, speed } => serde_json::to_string(&wire::BreatheBody {
                color: *color,
                speed: speed.to_string(),
            }),
            Self::Rainbow {
                num_rainbows,
                value,
                speed,
            } => serde_json::to_string(&wire::RainbowBody {
                num_rainbows: num_rainbows.to_string(),
                value: value.to_string(),
                speed: speed.to_string(),
            }),
            Self::Explicit(frame) => serde_json::to_string(&wire::ExplicitBody {
                led_state: frame.pixels().iter().copied().map(Into::into).collect(),
            }),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SolidColor(c) => write!(f, "solid ({}, {}, {})", c.r, c.g, c.b),
            Self::Strobe {
                color,
                speed,
                duration,
            } => write!(f, "strobe {} every {}ms for {}ms", color, speed, duration),
            Self::Breathe { color, speed } => write!(f, "breathe {} at {}", color, speed),
            Self::Rainbow {
                num_rainbows,
                value,
                speed,
            } => write!(
                f,
                "rainbow x{} value {} speed {}",
                num_rainbows, value, speed
            ),
            Self::Explicit(frame) => write!(f, "explicit frame of {} pixels", frame.len()),
        }
    }
}

/// JSON bodies as they travel over the wire
pub mod wire {
    use serde::{Deserialize, Serialize};

    use crate::color::{HexColor, Rgb};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WireRgb {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }

    impl From<Rgb> for WireRgb {
        fn from(color: Rgb) -> Self {
            Self {
                r: color.r,
                g: color.g,
                b: color.b,
            }
        }
    }

    impl From<WireRgb> for Rgb {
        fn from(color: WireRgb) -> Self {
            Self {
                r: color.r,
                g: color.g,
                b: color.b,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SolidColorBody {
        pub rgb: WireRgb,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct StrobeBody {
        pub color: HexColor,
        pub speed: String,
        pub duration: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BreatheBody {
        pub color: HexColor,
        pub speed: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RainbowBody {
        pub num_rainbows: String,
        pub value: String,
        pub speed: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExplicitBody {
        pub led_state: Vec<WireRgb>,
    }
}
