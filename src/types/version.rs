// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Firmware version that arrives as either a JSON integer or a string.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Device firmware version, normalized to a string.
///
/// Integers are rendered in base 10; strings are kept verbatim. After
/// decoding there is no way to tell which JSON type the value had.
///
/// # Examples
///
/// ```
/// use switchbot_lib::types::DeviceVersion;
///
/// let from_int: DeviceVersion = serde_json::from_str("42").unwrap();
/// let from_str: DeviceVersion = serde_json::from_str("\"42\"").unwrap();
/// assert_eq!(from_int, from_str);
/// assert_eq!(from_int.as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DeviceVersion(String);

impl DeviceVersion {
    /// Creates a version from its string form.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the device reported no version.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeviceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for DeviceVersion {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for DeviceVersion {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for DeviceVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct VersionVisitor;

impl Visitor<'_> for VersionVisitor {
    type Value = DeviceVersion;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string version")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(DeviceVersion(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(DeviceVersion(value.to_string()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DeviceVersion(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for DeviceVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(VersionVisitor)
    }
}
