//! Layered configuration: command line over TOML file over defaults
//!
//! ```toml
//! base_url = "https://lights.example:443"
//! cookie = "session=..."
//! strip_length = 640
//! request_timeout_ms = 5000
//! seed = 42
//! ```

use core::fmt;
use core::time::Duration;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    client::ClientConfig,
    frame::{DEFAULT_STRIP_LENGTH, StripLength},
};

pub const DEFAULT_BASE_URL: &str = "https://localhost:443";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    /// No session cookie given and one is needed to talk to the controller
    MissingCookie,
    InvalidStripLength,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "invalid config file: {}", err),
            Self::MissingCookie => write!(
                f,
                "session cookie is not configured (set LIGHT_SESSION_COOKIE or `cookie`)"
            ),
            Self::InvalidStripLength => write!(f, "strip length must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::MissingCookie | Self::InvalidStripLength => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}

/// Session cookie sent with every request
///
/// Never printed: `Debug` shows a placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie(String);

impl SessionCookie {
    /// Wrap a cookie value, rejecting blank input
    pub fn new(value: String) -> Option<Self> {
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCookie(<redacted>)")
    }
}

/// One configuration source. Unset keys fall through to the next layer.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub base_url: Option<String>,
    pub cookie: Option<String>,
    pub strip_length: Option<usize>,
    pub request_timeout_ms: Option<u64>,
    pub seed: Option<u64>,
}

impl ConfigLayer {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Keys set here win, the rest come from `lower`
    #[must_use]
    pub fn or(self, lower: Self) -> Self {
        Self {
            base_url: self.base_url.or(lower.base_url),
            cookie: self.cookie.or(lower.cookie),
            strip_length: self.strip_length.or(lower.strip_length),
            request_timeout_ms: self.request_timeout_ms.or(lower.request_timeout_ms),
            seed: self.seed.or(lower.seed),
        }
    }
}

impl fmt::Debug for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLayer")
            .field("base_url", &self.base_url)
            .field("cookie", &self.cookie.as_ref().map(|_| "<redacted>"))
            .field("strip_length", &self.strip_length)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("seed", &self.seed)
            .finish()
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub cookie: Option<SessionCookie>,
    pub strip: StripLength,
    pub request_timeout: Option<Duration>,
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Merge `overrides` over the optional file layer and the defaults
    ///
    /// With `require_cookie` set a missing or blank cookie is an error.
    pub fn resolve(
        file: Option<ConfigLayer>,
        overrides: ConfigLayer,
        require_cookie: bool,
    ) -> Result<Self, ConfigError> {
        let layer = overrides.or(file.unwrap_or_default());
        let strip = StripLength::new(layer.strip_length.unwrap_or(DEFAULT_STRIP_LENGTH))
            .map_err(|_| ConfigError::InvalidStripLength)?;
        let cookie = layer.cookie.and_then(SessionCookie::new);
        if require_cookie && cookie.is_none() {
            return Err(ConfigError::MissingCookie);
        }
        Ok(Self {
            base_url: layer
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            cookie,
            strip,
            request_timeout: layer.request_timeout_ms.map(Duration::from_millis),
            seed: layer.seed,
        })
    }

    /// Settings for the HTTP client. Fails without a cookie.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let cookie = self.cookie.clone().ok_or(ConfigError::MissingCookie)?;
        Ok(ClientConfig {
            base_url: self.base_url.clone(),
            cookie,
            strip: self.strip,
            request_timeout: self.request_timeout,
        })
    }
}
