// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status decoding.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::object::ObjectOnly;
use crate::error::{ParseError, Result, ValueError};
use crate::types::{
    BrightnessValue, CleanerOnlineStatus, CleanerWorkingStatus, DeviceVersion, DoorState,
    LockState, OpenState, PhysicalDeviceType, PowerState, RgbColor,
};

/// Status of a physical device.
///
/// One record covers every device type. Fields a device does not report
/// keep their zero value (`0`, `false`, empty string, or `None`). Decoding
/// never looks at [`device_type`](Self::device_type).
///
/// # Examples
///
/// ```
/// use switchbot_lib::response::DeviceStatus;
/// use switchbot_lib::types::{PhysicalDeviceType, PowerState};
///
/// let json = r#"{
///     "deviceId": "ABCDEF123456",
///     "deviceType": "Color Bulb",
///     "power": "on",
///     "brightness": 80,
///     "color": "255:0:0",
///     "colorTemperature": 3000,
///     "version": 21
/// }"#;
/// let status: DeviceStatus = serde_json::from_str(json).unwrap();
/// assert_eq!(status.device_type, PhysicalDeviceType::COLOR_BULB);
/// assert_eq!(status.power, Some(PowerState::On));
/// assert_eq!(status.brightness.unwrap().as_numeric().unwrap(), 80);
/// assert_eq!(status.version.as_str(), "21");
/// assert_eq!(status.humidity, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(remote = "Self", rename_all = "camelCase", default)]
pub struct DeviceStatus {
    /// Device identifier.
    #[serde(rename = "deviceId")]
    pub id: String,
    /// Display type of the device.
    pub device_type: PhysicalDeviceType,
    /// Identifier of the parent hub.
    #[serde(rename = "hubDeviceId")]
    pub hub_id: String,
    /// Power state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerState>,
    /// Relative humidity in percent.
    pub humidity: i64,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Humidifier atomization efficiency in percent.
    pub nebulization_efficiency: i64,
    /// Humidifier is in auto mode.
    pub auto: bool,
    /// Humidifier child lock is enabled.
    pub child_lock: bool,
    /// Humidifier sound is muted.
    pub sound: bool,
    /// Curtain or blind tilt has been calibrated.
    pub calibrate: bool,
    /// Curtain or blind tilt is grouped.
    pub group: bool,
    /// Curtain or blind tilt is moving.
    pub moving: bool,
    /// Curtain or blind tilt position (0-100).
    pub slide_position: i64,
    /// Smart fan mode.
    pub mode: i64,
    /// Smart fan speed.
    pub speed: i64,
    /// Smart fan is oscillating.
    pub shaking: bool,
    /// Smart fan oscillation center.
    pub shake_center: i64,
    /// Smart fan oscillation range.
    pub shake_range: i64,
    /// Motion sensor or contact sensor detected motion.
    pub move_detected: bool,
    /// Brightness: numeric for lights, ambient for sensors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<BrightnessValue>,
    /// Hub 2 illuminance level (1-20).
    pub light_level: i64,
    /// Contact sensor open state.
    pub open_state: OpenState,
    /// Light color as `"r:g:b"`.
    pub color: String,
    /// Light color temperature in Kelvin.
    pub color_temperature: i64,
    /// Humidifier water tank is empty.
    pub lack_water: bool,
    /// Plug voltage in volts.
    pub voltage: f64,
    /// Plug power draw in watts.
    pub weight: f64,
    /// Plug usage today in minutes.
    pub electricity_of_day: i64,
    /// Plug current in amperes.
    pub electric_current: f64,
    /// Lock motor state.
    pub lock_state: LockState,
    /// Lock door state.
    pub door_state: DoorState,
    /// Robot vacuum cleaner activity.
    pub working_status: CleanerWorkingStatus,
    /// Robot vacuum cleaner connectivity.
    pub online_status: CleanerOnlineStatus,
    /// Battery level in percent.
    pub battery: i64,
    /// Firmware version.
    pub version: DeviceVersion,
    /// Blind tilt direction.
    pub direction: String,
}

// `remote = "Self"` turns the derives into inherent functions, which the
// trait impls below wrap. `Self::deserialize` resolves to the inherent one.
impl<'de> Deserialize<'de> for DeviceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Self::deserialize(ObjectOnly(deserializer))
    }
}

impl Serialize for DeviceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Self::serialize(self, serializer)
    }
}

impl DeviceStatus {
    /// Parses [`color`](Self::color) into an [`RgbColor`].
    ///
    /// Returns `Ok(None)` when the device reported no color.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidArgument`] if the color is not `"r:g:b"`.
    pub fn rgb_color(&self) -> std::result::Result<Option<RgbColor>, ValueError> {
        if self.color.is_empty() {
            return Ok(None);
        }
        RgbColor::from_channels(&self.color).map(Some)
    }
}

/// Decodes a device status from the unwrapped `body` of a status response.
///
/// # Errors
///
/// Returns a parse error (kind
/// [`DecodeShapeMismatch`](crate::ErrorKind::DecodeShapeMismatch)) if the
/// body is not an object, a present field has the wrong JSON type, or a
/// brightness or version value has an unsupported shape.
pub fn decode_device_status(body: &Value) -> Result<DeviceStatus> {
    <DeviceStatus as Deserialize>::deserialize(body)
        .map_err(ParseError::Json)
        .map_err(Into::into)
}
