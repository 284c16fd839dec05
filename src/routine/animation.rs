use rand::RngCore;

use super::{Delay, Routine, Step};
use crate::{
    command::Command,
    frame::StripLength,
    pattern::{PatternId, PatternSlot},
};

/// One pattern rendered frame after frame, each frame sent as an explicit
/// command
#[derive(Debug, Clone)]
pub struct Animation {
    pattern: PatternSlot,
    strip: StripLength,
    /// Unbounded when unset
    frames: Option<u32>,
    delay: Delay,
    frame: u32,
}

impl Animation {
    pub fn new(pattern: PatternSlot, strip: StripLength) -> Self {
        Self {
            pattern,
            strip,
            frames: None,
            delay: Delay::ZERO,
            frame: 0,
        }
    }

    /// Animation of `id` with freshly sampled parameters
    pub fn sample(id: PatternId, rng: &mut dyn RngCore, strip: StripLength) -> Self {
        Self::new(id.sample(rng, strip), strip)
    }

    #[must_use]
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = Some(frames);
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Delay) -> Self {
        self.delay = delay;
        self
    }

    pub fn pattern(&self) -> &PatternSlot {
        &self.pattern
    }

    /// Frames rendered so far
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Rewind to the first frame and reset pattern state
    pub fn rewind(&mut self) {
        self.frame = 0;
        self.pattern.reset();
    }
}

impl Routine for Animation {
    fn name(&self) -> &str {
        self.pattern.id().as_str()
    }

    fn next_step(&mut self, _rng: &mut dyn RngCore) -> Option<Step> {
        if self.frames.is_some_and(|frames| self.frame >= frames) {
            return None;
        }
        let frame = self.pattern.render_frame(self.strip, self.frame);
        self.frame = self.frame.wrapping_add(1);
        Some(Step::send(Command::Explicit(frame), self.delay))
    }
}
