use core::fmt;
use core::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderValue};

use super::{Deliver, DeliveryError, validate_command};
use crate::{command::Command, config::SessionCookie, frame::StripLength};

/// Connection settings for [`HttpClient`]
#[derive(Clone)]
pub struct ClientConfig {
    /// Scheme, host and port, without a trailing slash
    pub base_url: String,
    pub cookie: SessionCookie,
    pub strip: StripLength,
    /// No timeout when unset
    pub request_timeout: Option<Duration>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("cookie", &self.cookie)
            .field("strip", &self.strip)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Posts commands to the light controller over HTTPS
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    cookie: HeaderValue,
    strip: StripLength,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, DeliveryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let mut cookie = HeaderValue::from_str(config.cookie.expose())
            .map_err(|_| DeliveryError::InvalidCookie)?;
        cookie.set_sensitive(true);
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            cookie,
            strip: config.strip,
        })
    }

    pub fn url(&self, command: &Command) -> String {
        format!("{}{}", self.base_url, command.path())
    }
}

#[async_trait]
impl Deliver for HttpClient {
    async fn deliver(&mut self, command: &Command) -> Result<String, DeliveryError> {
        validate_command(command, self.strip)?;
        let body = command.to_json()?;
        let url = self.url(command);
        debug!("client: POST {} ({})", url, command);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(COOKIE, self.cookie.clone())
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            info!("client: {} -> {}: {}", command.kind(), status, text);
        } else {
            warn!("client: {} -> {}: {}", command.kind(), status, text);
        }
        Ok(text)
    }
}
