use std::collections::VecDeque;

use async_trait::async_trait;
use log::debug;

use super::{Deliver, DeliveryError, validate_command};
use crate::{command::Command, frame::StripLength};

const RECORDED_BODY: &str = "ok";

/// In-memory client that keeps delivered commands instead of sending them
#[derive(Debug, Clone)]
pub struct RecordingClient {
    strip: StripLength,
    history: VecDeque<Command>,
    capacity: Option<usize>,
    delivered: usize,
}

impl RecordingClient {
    /// Record every command
    pub fn new(strip: StripLength) -> Self {
        Self {
            strip,
            history: VecDeque::new(),
            capacity: None,
            delivered: 0,
        }
    }

    /// Keep only the last `capacity` commands
    pub fn bounded(strip: StripLength, capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new(strip)
        }
    }

    /// Recorded commands, oldest first
    pub fn commands(&self) -> impl ExactSizeIterator<Item = &Command> {
        self.history.iter()
    }

    pub fn last(&self) -> Option<&Command> {
        self.history.back()
    }

    /// Number of commands delivered, including the ones no longer kept
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

#[async_trait]
impl Deliver for RecordingClient {
    async fn deliver(&mut self, command: &Command) -> Result<String, DeliveryError> {
        validate_command(command, self.strip)?;
        command.to_json()?;
        debug!("recorder: {}", command);

        self.delivered += 1;
        match self.capacity {
            Some(0) => {}
            Some(capacity) => {
                while self.history.len() >= capacity {
                    self.history.pop_front();
                }
                self.history.push_back(command.clone());
            }
            None => self.history.push_back(command.clone()),
        }
        Ok(RECORDED_BODY.to_owned())
    }
}
