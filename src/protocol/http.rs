// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the SwitchBot cloud API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::protocol::{Method, RawResponse, Signature, Transport};

const CONTENT_TYPE: &str = "application/json; charset=utf8";

// ============================================================================
// ClientConfig - Validated client configuration
// ============================================================================

/// Configuration for the SwitchBot cloud API client.
///
/// Tokens and secrets are issued in the SwitchBot app. Without a secret the
/// client sends the bare token, which only the legacy API accepts.
///
/// # Examples
///
/// ```
/// use switchbot_lib::protocol::ClientConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = ClientConfig::new("token").with_secret("secret");
///
/// // With all options
/// let config = ClientConfig::new("token")
///     .with_secret("secret")
///     .with_endpoint("https://api.switch-bot.com")
///     .with_timeout(Duration::from_secs(5))
///     .with_debug(true);
/// assert!(config.debug());
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    token: String,
    secret: Option<String>,
    endpoint: String,
    timeout: Duration,
    debug: bool,
}

impl ClientConfig {
    /// Default API endpoint.
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.switch-bot.com";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given open token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: None,
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    /// Sets the secret used to sign requests.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Sets a custom endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables logging of request and response bodies at debug level.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns the token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns `true` if requests will be signed.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    /// Returns the endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether body logging is enabled.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidConfig`] if the token is empty or the
    /// endpoint is not an `http://` or `https://` URL, and
    /// [`ProtocolError::Http`] if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, ProtocolError> {
        if self.token.trim().is_empty() {
            return Err(ProtocolError::InvalidConfig("token is required".to_string()));
        }
        if self.secret.as_deref().is_some_and(str::is_empty) {
            return Err(ProtocolError::InvalidConfig(
                "secret must not be empty".to_string(),
            ));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ProtocolError::InvalidConfig(format!(
                "endpoint must be an http or https URL: {}",
                self.endpoint
            )));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpTransport {
            base_url: self.endpoint.trim_end_matches('/').to_string(),
            client,
            token: self.token,
            secret: self.secret,
            debug: self.debug,
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}

// ============================================================================
// HttpTransport - reqwest-backed transport
// ============================================================================

/// HTTP transport that signs every request.
///
/// # Examples
///
/// ```no_run
/// use switchbot_lib::protocol::{ClientConfig, Method, Transport};
///
/// # async fn example() -> switchbot_lib::Result<()> {
/// let transport = ClientConfig::new("token").with_secret("secret").into_transport()?;
/// let response = transport.send(Method::Get, "/v1.1/devices", None).await?;
/// let devices: serde_json::Value = response.envelope()?.into_body()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
    token: String,
    secret: Option<String>,
    debug: bool,
}

impl HttpTransport {
    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("signed", &self.secret.is_some())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse, ProtocolError> {
        let url = format!("{}{path}", self.base_url);

        tracing::debug!(method = %method, url = %url, "Sending HTTP request");

        let mut request = self
            .request(method, &url)
            .header("Authorization", &self.token)
            .header("Content-Type", CONTENT_TYPE);

        if let Some(secret) = &self.secret {
            let signature = Signature::generate(&self.token, secret)?;
            request = request
                .header("sign", signature.sign)
                .header("nonce", signature.nonce)
                .header("t", signature.timestamp_ms.to_string());
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(ProtocolError::Serialize)?;
            if self.debug {
                tracing::debug!(body = %String::from_utf8_lossy(&bytes), "HTTP request body");
            }
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProtocolError::RateLimited);
        }

        if !status.is_success() {
            return Err(ProtocolError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(ProtocolError::Http)?;

        if self.debug {
            tracing::debug!(body = %String::from_utf8_lossy(&bytes), "Received HTTP response");
        }

        Ok(RawResponse::new(status.as_u16(), bytes.to_vec()))
    }
}
