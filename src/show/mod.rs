//! Named shows: composite routines built from scripts and animations
//!
//! A show is a list of segments. The list is rebuilt from the session's
//! random source at the start of every cycle, so repeating shows draw fresh
//! colors, counts and pattern parameters each time round.

mod catalog;

use core::fmt;
use core::str::FromStr;
use std::collections::VecDeque;

use embassy_time::Duration;
use log::info;
use rand::RngCore;

use crate::{
    frame::StripLength,
    routine::{Routine, Step},
};

const DEFAULT_TOGGLE_SPEED: Duration = Duration::from_millis(250);
const DEFAULT_TOGGLE_DURATION: Duration = Duration::from_secs(10);

/// One segment of a show
pub type Segment = Box<dyn Routine>;

type Builder = fn(&mut dyn RngCore, &ShowSettings) -> Vec<Segment>;

/// Error returned when parsing an unknown show name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShow(pub String);

impl fmt::Display for UnknownShow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown show '{}'", self.0)
    }
}

impl std::error::Error for UnknownShow {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowId {
    /// Controller side animations, played once
    Demo,
    /// Red/blue solid toggle for a fixed duration
    Toggle,
    /// Gentle fades, sparkles and waves
    Fun,
    /// Explicit frame animations only
    Explicit,
    /// Fast random flashes, strobes and frames
    Chaos,
}

impl ShowId {
    pub const ALL: &'static [Self] = &[
        Self::Demo,
        Self::Toggle,
        Self::Fun,
        Self::Explicit,
        Self::Chaos,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Toggle => "toggle",
            Self::Fun => "fun",
            Self::Explicit => "explicit",
            Self::Chaos => "chaos",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            "demo" => Some(Self::Demo),
            "toggle" => Some(Self::Toggle),
            "fun" => Some(Self::Fun),
            "explicit" => Some(Self::Explicit),
            "chaos" => Some(Self::Chaos),
            _ => None,
        }
    }

    /// Whether the show starts over once its segments are exhausted
    pub const fn repeats(self) -> bool {
        matches!(self, Self::Fun | Self::Explicit | Self::Chaos)
    }

    const fn builder(self) -> Builder {
        match self {
            Self::Demo => catalog::demo,
            Self::Toggle => catalog::toggle,
            Self::Fun => catalog::fun,
            Self::Explicit => catalog::explicit,
            Self::Chaos => catalog::chaos,
        }
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShowId {
    type Err = UnknownShow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from_str(s).ok_or_else(|| UnknownShow(s.to_owned()))
    }
}

/// Inputs shared by every show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowSettings {
    pub strip: StripLength,
    /// Time each toggle color stays on
    pub toggle_speed: Duration,
    /// Total toggle time
    pub toggle_duration: Duration,
}

impl ShowSettings {
    pub fn new(strip: StripLength) -> Self {
        Self {
            strip,
            toggle_speed: DEFAULT_TOGGLE_SPEED,
            toggle_duration: DEFAULT_TOGGLE_DURATION,
        }
    }

    #[must_use]
    pub fn with_toggle(mut self, speed: Duration, duration: Duration) -> Self {
        self.toggle_speed = speed;
        self.toggle_duration = duration;
        self
    }

    /// Number of red/blue pairs started before the toggle duration runs out
    ///
    /// A zero duration gives no pairs. A zero speed gives a single pair.
    pub fn toggle_pairs(&self) -> u64 {
        let duration = self.toggle_duration.as_micros();
        let pair = self.toggle_speed.as_micros().saturating_mul(2);
        match (duration, pair) {
            (0, _) => 0,
            (_, 0) => 1,
            _ => duration.div_ceil(pair),
        }
    }
}

impl Default for ShowSettings {
    fn default() -> Self {
        Self::new(StripLength::DEFAULT)
    }
}

/// Routine playing a named show
pub struct Show {
    id: ShowId,
    settings: ShowSettings,
    build: Builder,
    repeat: bool,
    segments: VecDeque<Segment>,
    current: Option<Segment>,
    cycles: u32,
    /// Set once the current cycle produced a step
    emitted: bool,
}

impl Show {
    pub fn new(id: ShowId, settings: ShowSettings) -> Self {
        Self {
            id,
            settings,
            build: id.builder(),
            repeat: id.repeats(),
            segments: VecDeque::new(),
            current: None,
            cycles: 0,
            emitted: false,
        }
    }

    /// Override whether the show starts over when it ends
    #[must_use]
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn id(&self) -> ShowId {
        self.id
    }

    /// Cycles started so far
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Start the next segment. Returns false when the show is over.
    fn advance(&mut self, rng: &mut dyn RngCore) -> bool {
        if self.segments.is_empty() {
            if self.cycles > 0 && (!self.repeat || !self.emitted) {
                return false;
            }
            self.emitted = false;
            self.segments = (self.build)(rng, &self.settings).into();
            self.cycles += 1;
            info!("show: {} cycle {}", self.id, self.cycles);
            if self.segments.is_empty() {
                return false;
            }
        }
        self.current = self.segments.pop_front();
        if let Some(segment) = &self.current {
            info!("show: {} -> {}", self.id, segment.name());
        }
        true
    }
}

impl fmt::Debug for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Show")
            .field("id", &self.id)
            .field("repeat", &self.repeat)
            .field("segments", &self.segments.len())
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}

impl Routine for Show {
    fn name(&self) -> &str {
        self.id.as_str()
    }

    fn next_step(&mut self, rng: &mut dyn RngCore) -> Option<Step> {
        loop {
            if let Some(step) = self.current.as_mut().and_then(|segment| segment.next_step(rng)) {
                self.emitted = true;
                return Some(step);
            }
            self.current = None;
            if !self.advance(rng) {
                return None;
            }
        }
    }
}
