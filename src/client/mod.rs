//! Delivery of commands to the light controller

mod http;
mod recording;

use core::fmt;

use async_trait::async_trait;

pub use http::{ClientConfig, HttpClient};
pub use recording::RecordingClient;

use crate::{command::Command, frame::StripLength};

#[derive(Debug)]
pub enum DeliveryError {
    /// Connection level failure: DNS, refused, reset, TLS or timeout
    Transport(reqwest::Error),
    /// Explicit frame does not match the configured strip length
    FrameLength { expected: usize, actual: usize },
    /// Request body could not be serialized
    Encode(serde_json::Error),
    /// Session cookie contains bytes not allowed in a header
    InvalidCookie,
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport error: {}", err),
            Self::FrameLength { expected, actual } => write!(
                f,
                "explicit frame has {} pixels, strip has {}",
                actual, expected
            ),
            Self::Encode(err) => write!(f, "failed to encode command: {}", err),
            Self::InvalidCookie => write!(f, "session cookie is not a valid header value"),
        }
    }
}

impl std::error::Error for DeliveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::FrameLength { .. } | Self::InvalidCookie => None,
        }
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<serde_json::Error> for DeliveryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err)
    }
}

/// Sink for commands
///
/// `deliver` resolves once the controller response is fully received and
/// returns its body.
#[async_trait]
pub trait Deliver: Send {
    async fn deliver(&mut self, command: &Command) -> Result<String, DeliveryError>;
}

#[async_trait]
impl<D: Deliver + ?Sized> Deliver for Box<D> {
    async fn deliver(&mut self, command: &Command) -> Result<String, DeliveryError> {
        (**self).deliver(command).await
    }
}

/// Reject explicit frames that do not cover exactly the strip
pub fn validate_command(command: &Command, strip: StripLength) -> Result<(), DeliveryError> {
    match command {
        Command::Explicit(frame) if frame.len() != strip.get() => Err(DeliveryError::FrameLength {
            expected: strip.get(),
            actual: frame.len(),
        }),
        _ => Ok(()),
    }
}
