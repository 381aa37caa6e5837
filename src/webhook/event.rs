// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Webhook event records.
//!
//! Every event shares the `{eventType, eventVersion, context}` shape; only
//! the context differs per device. Absent context fields keep their zero
//! value.

use serde::{Deserialize, Serialize};

use crate::types::{
    BotMode, BrightnessValue, CleanerOnlineStatus, CleanerWorkingStatus, DetectionState,
    DeviceVersion, DoorMode, LockEventState, OpenState, PowerState, TemperatureScale,
};

/// A webhook event with a device-specific context.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event<C> {
    /// Event kind, e.g. `"changeReport"`.
    #[serde(default)]
    pub event_type: String,
    /// Payload version.
    #[serde(default)]
    pub event_version: String,
    /// Device-specific context.
    pub context: C,
}

/// Fields carried by every event context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceContext {
    /// Webhook device type token, e.g. `"WoPresence"`.
    pub device_type: String,
    /// MAC address of the device.
    pub device_mac: String,
    /// Sample time in Unix milliseconds.
    pub time_of_sample: i64,
}

/// Motion sensor context (`WoPresence`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionSensorContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Motion state.
    pub detection_state: DetectionState,
}

/// Contact sensor context (`WoContact`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSensorContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Motion state.
    pub detection_state: DetectionState,
    /// Enter or exit mode, when triggered.
    pub door_mode: DoorMode,
    /// Ambient brightness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<BrightnessValue>,
    /// Open state.
    pub open_state: OpenState,
}

/// Thermo-hygrometer context (`WoMeter`, `WoMeterPlus`, `WoIOSensor`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeterContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Temperature.
    pub temperature: f64,
    /// Temperature scale.
    pub scale: TemperatureScale,
    /// Relative humidity in percent.
    pub humidity: i64,
}

/// Thermo-hygrometer Pro and CO2 sensor context (`WoMeterPro`, `WoMeterProCO2`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeterProContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Temperature.
    pub temperature: f64,
    /// Temperature scale.
    pub scale: TemperatureScale,
    /// Relative humidity in percent.
    pub humidity: i64,
    /// CO2 concentration in ppm, CO2 model only.
    #[serde(rename = "CO2", skip_serializing_if = "Option::is_none")]
    pub co2: Option<i64>,
}

/// Hub 2 context (`WoHub2`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hub2Context {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Temperature.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: i64,
    /// Illuminance level, 1-20.
    pub light_level: i64,
    /// Temperature scale.
    pub scale: TemperatureScale,
}

/// Lock context (`WoLock`, `WoLockPro`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LockContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Motor state.
    pub lock_state: LockEventState,
}

/// Keypad context (`WoKeypad`, `WoKeypadTouch`).
///
/// Reports the outcome of passcode commands such as `createKey`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeypadContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Name of the command this event reports on.
    pub event_name: String,
    /// Identifier of that command.
    pub command_id: String,
    /// Outcome, e.g. `"success"`.
    pub result: String,
}

/// Camera context (`WoCamera`, `WoPanTiltCam`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Motion state.
    pub detection_state: DetectionState,
}

/// Light context (`WoBulb`, `WoStrip`, `WoCeiling`, `WoCeilingPro`).
///
/// Strip lights report no color temperature and ceiling lights no color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LightContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Power state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_state: Option<PowerState>,
    /// Brightness, 1-100.
    pub brightness: i64,
    /// Color as `"r:g:b"`.
    pub color: String,
    /// Color temperature in Kelvin, 2700-6500.
    pub color_temperature: i64,
}

/// Plug Mini context (`WoPlugUS`, `WoPlugJP`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Power state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_state: Option<PowerState>,
}

/// Robot vacuum cleaner context (`WoSweeper`, `WoSweeperPlus`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SweeperContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Activity.
    pub working_status: CleanerWorkingStatus,
    /// Connectivity.
    pub online_status: CleanerOnlineStatus,
    /// Battery level in percent.
    pub battery: i64,
}

/// Curtain context (`WoCurtain`, `WoCurtain3`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurtainContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Calibrated.
    pub calibrate: bool,
    /// Grouped.
    pub group: bool,
    /// Position, 0 open to 100 closed.
    pub slide_position: i64,
    /// Battery level in percent.
    pub battery: i64,
}

/// Blind tilt context (`WoBlindTilt`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlindTiltContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Firmware version.
    pub version: DeviceVersion,
    /// Calibrated.
    pub calibrate: bool,
    /// Grouped.
    pub group: bool,
    /// Tilt direction.
    pub direction: String,
    /// Position, 0-100.
    pub slide_position: i64,
    /// Battery level in percent.
    pub battery: i64,
}

/// Bot context (`WoHand`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BotContext {
    /// Common fields.
    #[serde(flatten)]
    pub device: DeviceContext,
    /// Power state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerState>,
    /// Battery level in percent.
    pub battery: i64,
    /// Operating mode.
    pub device_mode: BotMode,
}

/// Motion sensor event.
pub type MotionSensorEvent = Event<MotionSensorContext>;
/// Contact sensor event.
pub type ContactSensorEvent = Event<ContactSensorContext>;
/// Meter event.
pub type MeterEvent = Event<MeterContext>;
/// Meter Plus event.
pub type MeterPlusEvent = Event<MeterContext>;
/// Indoor/outdoor thermo-hygrometer event.
pub type OutdoorMeterEvent = Event<MeterContext>;
/// Meter Pro and CO2 sensor event.
pub type MeterProEvent = Event<MeterProContext>;
/// Hub 2 event.
pub type Hub2Event = Event<Hub2Context>;
/// Lock and Lock Pro event.
pub type LockEvent = Event<LockContext>;
/// Keypad and Keypad Touch event.
pub type KeypadEvent = Event<KeypadContext>;
/// Indoor Cam event.
pub type IndoorCamEvent = Event<CameraContext>;
/// Pan/Tilt Cam event.
pub type PanTiltCamEvent = Event<CameraContext>;
/// Color Bulb event.
pub type ColorBulbEvent = Event<LightContext>;
/// Strip Light event.
pub type StripLightEvent = Event<LightContext>;
/// Ceiling Light and Ceiling Light Pro event.
pub type CeilingEvent = Event<LightContext>;
/// Plug Mini (US) event.
pub type PlugMiniUsEvent = Event<PlugContext>;
/// Plug Mini (JP) event.
pub type PlugMiniJpEvent = Event<PlugContext>;
/// Robot vacuum cleaner event.
pub type SweeperEvent = Event<SweeperContext>;
/// Curtain and Curtain 3 event.
pub type CurtainEvent = Event<CurtainContext>;
/// Blind Tilt event.
pub type BlindTiltEvent = Event<BlindTiltContext>;
/// Bot event.
pub type BotEvent = Event<BotContext>;
