//! Routines: sources of timed commands for a session
//!
//! A routine hands out one [`Step`] at a time. The session delivers the
//! step's command, then waits for its delay before asking for the next one.

mod animation;
mod script;

use embassy_time::Duration;
use rand::{Rng, RngCore};

pub use animation::Animation;
pub use script::Script;

use crate::command::Command;

/// Pause after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    Fixed(Duration),
    /// Drawn per step from `min..max`
    Random { min: Duration, max: Duration },
}

impl Delay {
    pub const ZERO: Self = Self::Fixed(Duration::from_ticks(0));

    pub const fn millis(ms: u64) -> Self {
        Self::Fixed(Duration::from_millis(ms))
    }

    pub const fn random_millis(min: u64, max: u64) -> Self {
        Self::Random {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    /// Concrete delay for one step. An empty random range yields `min`.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Duration {
        match *self {
            Self::Fixed(delay) => delay,
            Self::Random { min, max } if max <= min => min,
            Self::Random { min, max } => {
                Duration::from_micros(rng.gen_range(min.as_micros()..max.as_micros()))
            }
        }
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::ZERO
    }
}

/// One unit of work: an optional command followed by a delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: Option<Command>,
    pub delay: Delay,
}

impl Step {
    pub const fn send(command: Command, delay: Delay) -> Self {
        Self {
            command: Some(command),
            delay,
        }
    }

    /// Wait without sending anything
    pub const fn pause(delay: Delay) -> Self {
        Self {
            command: None,
            delay,
        }
    }
}

pub trait Routine: Send {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Next step, or `None` once the routine is exhausted
    fn next_step(&mut self, rng: &mut dyn RngCore) -> Option<Step>;
}
