// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dual-typed brightness reading.
//!
//! Lights report brightness as an integer percentage; motion and contact
//! sensors report a qualitative token (`"bright"` / `"dim"`) under the same
//! field name. [`BrightnessValue`] resolves the ambiguity once at decode time
//! and exposes two accessors that fail explicitly for the wrong variant.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::token::open_token;
use crate::error::ValueError;

open_token! {
    /// Qualitative brightness reported by sensors without a light meter.
    ///
    /// Values outside the named constants are kept verbatim.
    AmbientBrightness {
        /// The surroundings are bright.
        BRIGHT = "bright",
        /// The surroundings are dim.
        DIM = "dim",
    }
}

/// A brightness reading: numeric (lights) or ambient (sensors).
///
/// # Examples
///
/// ```
/// use switchbot_lib::types::{AmbientBrightness, BrightnessValue};
///
/// let bulb: BrightnessValue = serde_json::from_str("100").unwrap();
/// assert_eq!(bulb.as_numeric().unwrap(), 100);
/// assert!(bulb.as_ambient().is_err());
///
/// let sensor: BrightnessValue = serde_json::from_str("\"dim\"").unwrap();
/// assert_eq!(sensor.as_ambient().unwrap(), AmbientBrightness::DIM);
/// assert!(sensor.as_numeric().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrightnessValue {
    /// Percentage reported by color bulbs, strip lights and ceiling lights.
    Numeric(i64),
    /// Qualitative level reported by motion and contact sensors.
    Ambient(AmbientBrightness),
}

impl BrightnessValue {
    /// Returns the numeric brightness.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::WrongVariant`] if this reading is ambient.
    pub fn as_numeric(&self) -> Result<i64, ValueError> {
        match self {
            Self::Numeric(value) => Ok(*value),
            Self::Ambient(_) => Err(ValueError::WrongVariant {
                message: "integer brightness value is only available for color bulb, \
                          strip light and ceiling light devices"
                    .to_string(),
            }),
        }
    }

    /// Returns the ambient brightness token.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::WrongVariant`] if this reading is numeric.
    pub fn as_ambient(&self) -> Result<AmbientBrightness, ValueError> {
        match self {
            Self::Ambient(token) => Ok(token.clone()),
            Self::Numeric(_) => Err(ValueError::WrongVariant {
                message: "ambient brightness value is only available for motion sensor \
                          and contact sensor devices"
                    .to_string(),
            }),
        }
    }

    /// Returns `true` for the numeric variant.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl fmt::Display for BrightnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Ambient(token) => write!(f, "{token}"),
        }
    }
}

impl Serialize for BrightnessValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Numeric(value) => serializer.serialize_i64(*value),
            Self::Ambient(token) => serializer.serialize_str(token.as_str()),
        }
    }
}

struct BrightnessVisitor;

impl Visitor<'_> for BrightnessVisitor {
    type Value = BrightnessValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string brightness")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(BrightnessValue::Numeric(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(BrightnessValue::Numeric)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(BrightnessValue::Ambient(AmbientBrightness::new(value)))
    }
}

impl<'de> Deserialize<'de> for BrightnessValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BrightnessVisitor)
    }
}
