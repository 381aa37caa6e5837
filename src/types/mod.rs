// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for SwitchBot devices.
//!
//! # Types
//!
//! - [`PhysicalDeviceType`] / [`VirtualDeviceType`] - device kinds
//! - [`PowerState`] - ON/OFF
//! - [`BrightnessValue`] - numeric (lights) or ambient (sensors) brightness
//! - [`DeviceVersion`] - firmware version from an integer or a string
//! - [`RgbColor`] - `"r:g:b"` color
//! - [`SlidePosition`] - clamped 0-100 position
//!
//! Vendor enumerations that keep growing (device types, cleaner statuses,
//! lock states and so on) are open tokens: unknown wire values decode and
//! are preserved, and the named constants compare against them with `==`.

mod token;

mod brightness;
mod device_type;
mod passcode;
mod position;
mod power;
mod rgb_color;
mod state;
mod version;

pub use brightness::{AmbientBrightness, BrightnessValue};
pub use device_type::{PhysicalDeviceType, VirtualDeviceType};
pub use passcode::{PasscodeStatus, PasscodeType};
pub use position::SlidePosition;
pub use power::PowerState;
pub use rgb_color::RgbColor;
pub use state::{
    BotMode, CleanerOnlineStatus, CleanerWorkingStatus, DetectionState, DoorMode, DoorState,
    LockEventState, LockState, OpenState, TemperatureScale,
};
pub use version::DeviceVersion;
