// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for values whose JSON type varies across devices and firmware.
//!
//! [`DeviceVersion`] and [`BrightnessValue`] implement `Deserialize`
//! directly, so they decode in place inside larger records. The functions
//! here cover callers that already hold a [`serde_json::Value`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ParseError, Result};
use crate::types::{BrightnessValue, DeviceVersion};

/// Decodes a firmware version from a JSON integer or string.
///
/// # Errors
///
/// Returns a [`ParseError::Json`] (kind
/// [`DecodeShapeMismatch`](crate::ErrorKind::DecodeShapeMismatch)) for
/// floats, booleans, null, arrays and objects.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use switchbot_lib::codec::decode_device_version;
///
/// assert_eq!(decode_device_version(&json!(42)).unwrap().as_str(), "42");
/// assert_eq!(decode_device_version(&json!("V4.2")).unwrap().as_str(), "V4.2");
/// assert!(decode_device_version(&json!({"key": "value"})).is_err());
/// ```
pub fn decode_device_version(value: &Value) -> Result<DeviceVersion> {
    DeviceVersion::deserialize(value)
        .map_err(ParseError::Json)
        .map_err(Into::into)
}

/// Decodes a brightness reading from a JSON integer or string.
///
/// # Errors
///
/// Returns a [`ParseError::Json`] (kind
/// [`DecodeShapeMismatch`](crate::ErrorKind::DecodeShapeMismatch)) for any
/// other JSON type.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use switchbot_lib::codec::decode_brightness;
///
/// let reading = decode_brightness(&json!("bright")).unwrap();
/// assert!(reading.as_ambient().is_ok());
/// ```
pub fn decode_brightness(value: &Value) -> Result<BrightnessValue> {
    BrightnessValue::deserialize(value)
        .map_err(ParseError::Json)
        .map_err(Into::into)
}
