// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for the SwitchBot cloud API.
//!
//! The [`Transport`] trait is the only seam between the resource services
//! and the network. It sends one request and hands back the status and raw
//! body; envelope decoding happens above it.
//!
//! # Transports
//!
//! - [`HttpTransport`]: signed HTTPS requests through `reqwest` (feature `http`)
//!
//! Tests and alternative runtimes can implement [`Transport`] directly.

#[cfg(feature = "http")]
mod http;
mod signing;

#[cfg(feature = "http")]
pub use http::{ClientConfig, HttpTransport};
pub use signing::{Signature, sign};

use std::fmt;

use serde_json::Value;

use crate::error::{ProtocolError, Result};
use crate::response::Envelope;

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`.
    Get,
    /// `POST`.
    Post,
    /// `DELETE`.
    Delete,
}

impl Method {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw response from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response from an HTTP status and body bytes.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Parses the body as a response envelope.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the body is not an envelope.
    pub fn envelope(&self) -> Result<Envelope> {
        Envelope::from_slice(&self.body)
    }
}

/// Trait for transports that can carry API requests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends one request and returns the raw response.
    ///
    /// `path` starts with `/`, e.g. `/v1.1/devices`. Implementations map
    /// non-2xx HTTP statuses to errors and never retry.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the HTTP status is
    /// not a success.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> std::result::Result<RawResponse, ProtocolError>;
}
