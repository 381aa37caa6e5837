// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request authentication headers.
//!
//! With only a token, requests carry `Authorization: <token>`. With a
//! secret as well, they also carry a signature over `token + t + nonce`:
//!
//! ```text
//! sign = uppercase(base64(HMAC-SHA256(secret, token + t + nonce)))
//! ```
//!
//! where `t` is the current Unix time in milliseconds and `nonce` a fresh
//! UUID v4.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::ProtocolError;

type HmacSha256 = Hmac<Sha256>;

/// Computes the request signature.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidConfig`] if the secret cannot key the MAC.
///
/// # Examples
///
/// ```
/// use switchbot_lib::protocol::sign;
///
/// let sign = sign("token", "secret", 1_700_000_000_000, "nonce").unwrap();
/// assert_eq!(sign, sign.to_uppercase());
/// ```
pub fn sign(
    token: &str,
    secret: &str,
    timestamp_ms: i64,
    nonce: &str,
) -> Result<String, ProtocolError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|err| ProtocolError::InvalidConfig(format!("invalid secret: {err}")))?;
    mac.update(token.as_bytes());
    mac.update(timestamp_ms.to_string().as_bytes());
    mac.update(nonce.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()).to_uppercase())
}

/// Signature headers for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Value of the `sign` header.
    pub sign: String,
    /// Value of the `nonce` header.
    pub nonce: String,
    /// Value of the `t` header, Unix milliseconds.
    pub timestamp_ms: i64,
}

impl Signature {
    /// Signs a request made now with a fresh nonce.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidConfig`] if the secret cannot key the MAC.
    pub fn generate(token: &str, secret: &str) -> Result<Self, ProtocolError> {
        let nonce = Uuid::new_v4().to_string();
        let timestamp_ms = Utc::now().timestamp_millis();
        let sign = sign(token, secret, timestamp_ms, &nonce)?;

        Ok(Self {
            sign,
            nonce,
            timestamp_ms,
        })
    }
}
