// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `switchbot_lib` library.
//!
//! Errors are grouped by where they originate: value construction and
//! accessors ([`ValueError`]), decoding of wire JSON ([`ParseError`]), the
//! vendor status codes carried in the response envelope ([`ApiError`]) and
//! the transport ([`ProtocolError`]).
//!
//! Callers that only want to branch on the failure class can use
//! [`Error::kind`], which flattens the hierarchy into an [`ErrorKind`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be constructed or read.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Wire JSON could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The API answered with a non-success status code.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// The request could not be sent or the HTTP exchange failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl Error {
    /// Returns the flat classification of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use switchbot_lib::{ApiError, Error, ErrorKind};
    ///
    /// let err = Error::from(ApiError::from_status_code(161, "device offline"));
    /// assert_eq!(err.kind(), ErrorKind::DeviceOffline);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Value(err) => err.kind(),
            Self::Parse(err) => err.kind(),
            Self::Api(err) => err.kind(),
            Self::Protocol(err) => err.kind(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(ParseError::Json(err))
    }
}

/// Flat classification of every error this library produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wire JSON did not match any accepted shape.
    DecodeShapeMismatch,
    /// A tagged value was read through the accessor of the other variant.
    WrongVariant,
    /// Command constructor preconditions were violated.
    InvalidArgument,
    /// A discriminator named a device type with no known decoder.
    UnknownDeviceType,
    /// Status code 151: the command does not fit the device type.
    DeviceTypeMismatch,
    /// Status code 152: the device does not exist.
    NotFound,
    /// Status code 160: the device does not support the command.
    Unsupported,
    /// Status code 161: the device is offline.
    DeviceOffline,
    /// Status code 171: the hub behind the device is offline.
    HubOffline,
    /// Status code 190: device state out of sync, malformed command, or
    /// overlapping requests.
    Conflict,
    /// Any other non-success status code.
    Unknown {
        /// The vendor status code.
        code: i64,
    },
    /// HTTP 429 from the API.
    RateLimited,
    /// Network, HTTP or configuration failure in the transport.
    Transport,
}

/// Errors related to value construction and tagged-value accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The populated variant of a tagged value is not the one requested.
    #[error("wrong variant: {message}")]
    WrongVariant {
        /// Explanation naming which devices produce the requested variant.
        message: String,
    },

    /// A constructor argument violated its precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ValueError {
    /// Returns the flat classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WrongVariant { .. } => ErrorKind::WrongVariant,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Errors related to decoding wire JSON.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The JSON was malformed or a field had an unaccepted type.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A webhook discriminator has no matching event decoder.
    #[error("unknown device type: {token}")]
    UnknownDeviceType {
        /// The unrecognized `deviceType` token.
        token: String,
    },
}

impl ParseError {
    /// Returns the flat classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Json(_) => ErrorKind::DecodeShapeMismatch,
            Self::UnknownDeviceType { .. } => ErrorKind::UnknownDeviceType,
        }
    }
}

/// Non-success status codes carried in the response envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 151: wrong device type for the requested command.
    #[error("device type error")]
    DeviceTypeMismatch,

    /// 152: device not found.
    #[error("device not found")]
    NotFound,

    /// 160: command is not supported by this device.
    #[error("command is not supported")]
    Unsupported,

    /// 161: device is offline.
    #[error("device is offline")]
    DeviceOffline,

    /// 171: hub device is offline.
    #[error("hub device is offline")]
    HubOffline,

    /// 190: device states not synchronized with server, invalid command
    /// format, or too many requests.
    #[error("device internal error: {0}")]
    Conflict(String),

    /// Any other non-success status code.
    #[error("unknown error {code} from API: {message}")]
    Unknown {
        /// The vendor status code.
        code: i64,
        /// The envelope message.
        message: String,
    },
}

impl ApiError {
    /// Status code the API uses for success.
    pub const SUCCESS: i64 = 100;

    /// Maps a non-success envelope status code to its error.
    ///
    /// Callers are expected to have checked for [`ApiError::SUCCESS`]
    /// first; passing 100 yields [`ApiError::Unknown`].
    #[must_use]
    pub fn from_status_code(code: i64, message: &str) -> Self {
        match code {
            151 => Self::DeviceTypeMismatch,
            152 => Self::NotFound,
            160 => Self::Unsupported,
            161 => Self::DeviceOffline,
            171 => Self::HubOffline,
            190 => Self::Conflict(message.to_string()),
            _ => Self::Unknown {
                code,
                message: message.to_string(),
            },
        }
    }

    /// Returns the flat classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DeviceTypeMismatch => ErrorKind::DeviceTypeMismatch,
            Self::NotFound => ErrorKind::NotFound,
            Self::Unsupported => ErrorKind::Unsupported,
            Self::DeviceOffline => ErrorKind::DeviceOffline,
            Self::HubOffline => ErrorKind::HubOffline,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Unknown { code, .. } => ErrorKind::Unknown { code: *code },
        }
    }
}

/// Errors related to the HTTP exchange.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("HTTP {status}: {reason}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// Description of the status.
        reason: String,
    },

    /// The request was not authenticated (HTTP 401).
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The request quota was exceeded (HTTP 429).
    #[error("too many requests")]
    RateLimited,

    /// The client configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A request body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ProtocolError {
    /// Returns the flat classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RateLimited => ErrorKind::RateLimited,
            _ => ErrorKind::Transport,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
