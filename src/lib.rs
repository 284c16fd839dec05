//! Procedural LED strip animations delivered to a remote light controller
//!
//! Patterns render frames, routines turn frames and controller-side
//! animations into timed commands, and a session delivers them one at a
//! time through a [`Deliver`] client.

pub mod client;
pub mod color;
pub mod command;
pub mod config;
pub mod frame;
pub mod math;
pub mod pattern;
pub mod routine;
pub mod session;
pub mod show;

pub use client::{ClientConfig, Deliver, DeliveryError, HttpClient, RecordingClient};
pub use color::{HexColor, HexColorError, Rgb};
pub use command::{Command, CommandKind};
pub use config::{AppConfig, ConfigError, ConfigLayer, SessionCookie};
pub use frame::{Frame, PatternError, StripLength};
pub use pattern::{Pattern, PatternId, PatternSlot};
pub use routine::{Animation, Delay, Routine, Script, Step};
pub use session::{RunLimit, Session, SessionConfig, SessionReport, SessionState, StopSignal};
pub use show::{Show, ShowId, ShowSettings};

pub use embassy_time::Duration;

/// Convert a routine delay to the type tokio sleeps on
pub(crate) fn to_std_duration(duration: Duration) -> core::time::Duration {
    core::time::Duration::from_micros(duration.as_micros())
}
