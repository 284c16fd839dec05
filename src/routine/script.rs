use std::collections::VecDeque;

use rand::RngCore;

use super::{Routine, Step};

/// Fixed list of steps played once
#[derive(Debug, Clone)]
pub struct Script {
    name: String,
    steps: VecDeque<Step>,
}

impl Script {
    pub fn new(name: impl Into<String>, steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            name: name.into(),
            steps: steps.into_iter().collect(),
        }
    }

    /// Steps not played yet
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl Routine for Script {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_step(&mut self, _rng: &mut dyn RngCore) -> Option<Step> {
        self.steps.pop_front()
    }
}
