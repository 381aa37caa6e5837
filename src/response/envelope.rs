// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `{statusCode, body, message}` wrapper around every API response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::object::ObjectOnly;
use crate::error::{ApiError, ParseError, Result};

/// Response envelope returned by every endpoint.
///
/// The body stays an untyped [`Value`] until the status code has been
/// checked, so an error envelope whose body is empty or shaped differently
/// still reports the status-code error.
///
/// # Examples
///
/// ```
/// use switchbot_lib::response::Envelope;
/// use switchbot_lib::ErrorKind;
///
/// let ok = Envelope::from_slice(br#"{"statusCode": 100, "body": {}, "message": "success"}"#).unwrap();
/// assert!(ok.check().is_ok());
///
/// let offline = Envelope::from_slice(br#"{"statusCode": 161, "body": {}, "message": ""}"#).unwrap();
/// assert_eq!(offline.into_body::<serde_json::Value>().unwrap_err().kind(), ErrorKind::DeviceOffline);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Envelope {
    /// API-level status code; 100 means success.
    pub status_code: i64,
    /// Raw response body.
    #[serde(default)]
    pub body: Value,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Self::deserialize(ObjectOnly(deserializer))
    }
}

impl Envelope {
    /// Parses an envelope from raw response bytes.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the bytes are not an envelope object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(ParseError::Json)
            .map_err(Into::into)
    }

    /// Returns `true` if the status code signals success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code == ApiError::SUCCESS
    }

    /// Maps a non-success status code to an [`ApiError`].
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] matching the status code.
    pub fn check(&self) -> std::result::Result<(), ApiError> {
        if self.is_success() {
            return Ok(());
        }

        tracing::warn!(
            status_code = self.status_code,
            message = %self.message,
            "API returned non-success status"
        );
        Err(ApiError::from_status_code(self.status_code, &self.message))
    }

    /// Checks the status code, then decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an API error for a non-success status code, or a parse error
    /// if the body does not match `T`.
    pub fn into_body<T: DeserializeOwned>(self) -> Result<T> {
        self.check()?;
        serde_json::from_value(self.body)
            .map_err(ParseError::Json)
            .map_err(Into::into)
    }
}
