// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    DeviceVersion, PasscodeStatus, PasscodeType, PhysicalDeviceType, VirtualDeviceType,
};

/// Body of the device list response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceList {
    /// Physical SwitchBot devices.
    pub device_list: Vec<Device>,
    /// Virtual infrared remotes.
    pub infrared_remote_list: Vec<InfraredDevice>,
}

/// A physical SwitchBot device registered to the account.
///
/// # Examples
///
/// ```
/// use switchbot_lib::response::Device;
/// use switchbot_lib::types::PhysicalDeviceType;
///
/// let json = r#"{
///     "deviceId": "500291B269BE",
///     "deviceName": "Living Room Humidifier",
///     "deviceType": "Humidifier",
///     "enableCloudService": true,
///     "hubDeviceId": "000000000000"
/// }"#;
/// let device: Device = serde_json::from_str(json).unwrap();
/// assert_eq!(device.device_type, PhysicalDeviceType::HUMIDIFIER);
/// assert!(device.enable_cloud_service);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    /// Device identifier.
    #[serde(rename = "deviceId")]
    pub id: String,
    /// User-assigned name.
    #[serde(rename = "deviceName")]
    pub name: String,
    /// Display type.
    pub device_type: PhysicalDeviceType,
    /// Cloud service is enabled for this device.
    pub enable_cloud_service: bool,
    /// Identifier of the parent hub.
    #[serde(rename = "hubDeviceId")]
    pub hub_id: String,
    /// Curtains paired with this one.
    #[serde(rename = "curtainDevicesIds")]
    pub curtain_ids: Vec<String>,
    /// Curtain or blind tilt has been calibrated.
    pub calibrate: bool,
    /// Curtain or blind tilt is grouped.
    pub group: bool,
    /// Master device of a curtain or lock pair.
    pub master: bool,
    /// Curtain opening direction.
    pub open_direction: String,
    /// Blind tilt group name.
    pub group_name: String,
    /// Locks paired with this one.
    pub lock_device_ids: Vec<String>,
    /// Lock this keypad is bound to.
    pub lock_device_id: String,
    /// Passcodes stored on a keypad.
    pub key_list: Vec<KeyListItem>,
    /// Firmware version.
    pub version: DeviceVersion,
    /// Blind tilts grouped with this one.
    #[serde(rename = "blindTiltDeviceIds")]
    pub blind_tilt_ids: Vec<String>,
    /// Blind tilt direction.
    pub direction: String,
    /// Blind tilt position (0-100).
    pub slide_position: i64,
}

/// A passcode stored on a keypad.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyListItem {
    /// Passcode identifier, used by the delete key command.
    pub id: i64,
    /// Unique passcode name.
    pub name: String,
    /// Passcode kind.
    #[serde(rename = "type")]
    pub passcode_type: PasscodeType,
    /// Encrypted passcode.
    pub password: String,
    /// Initialization vector of the encrypted passcode.
    pub iv: String,
    /// Validity.
    pub status: PasscodeStatus,
    /// Creation time in Unix milliseconds.
    pub create_time: i64,
}

impl KeyListItem {
    /// Returns the creation time, or `None` if the device reported none.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        if self.create_time == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.create_time)
    }
}

/// A virtual infrared remote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfraredDevice {
    /// Device identifier.
    #[serde(rename = "deviceId")]
    pub id: String,
    /// User-assigned name.
    #[serde(rename = "deviceName")]
    pub name: String,
    /// Appliance kind.
    pub remote_type: VirtualDeviceType,
    /// Identifier of the hub that sends the infrared signal.
    #[serde(rename = "hubDeviceId")]
    pub hub_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_list_body() {
        let body = serde_json::json!({
            "deviceList": [
                {
                    "deviceId": "500291B269BE",
                    "deviceName": "Keypad",
                    "deviceType": "KeyPad",
                    "lockDeviceId": "F7538E1ABCEB",
                    "keyList": [{
                        "id": 11,
                        "name": "Guest",
                        "type": "timeLimit",
                        "password": "enc",
                        "iv": "iv",
                        "status": "normal",
                        "createTime": 1_664_640_000_000_i64
                    }],
                    "version": "V2.1"
                },
                {
                    "deviceId": "C271111EC0AB",
                    "deviceName": "Hallway Curtain",
                    "deviceType": "Curtain",
                    "curtainDevicesIds": ["C271111EC0AB", "E3DA5C1CCA0C"],
                    "calibrate": true,
                    "master": true,
                    "openDirection": "left",
                    "version": 7
                }
            ],
            "infraredRemoteList": [
                {"deviceId": "02-202008110034-13", "deviceName": "Living Room TV", "remoteType": "TV", "hubDeviceId": "FA7310762361"}
            ]
        });

        let list: DeviceList = serde_json::from_value(body).unwrap();
        assert_eq!(list.device_list.len(), 2);

        let keypad = &list.device_list[0];
        assert_eq!(keypad.device_type, PhysicalDeviceType::KEYPAD);
        let key = &keypad.key_list[0];
        assert_eq!(key.passcode_type, PasscodeType::TIME_LIMIT);
        assert_eq!(key.status, PasscodeStatus::NORMAL);
        assert_eq!(key.created_at().unwrap().timestamp(), 1_664_640_000);

        let curtain = &list.device_list[1];
        assert_eq!(curtain.curtain_ids.len(), 2);
        assert_eq!(curtain.version.as_str(), "7");

        assert_eq!(list.infrared_remote_list[0].remote_type, VirtualDeviceType::TV);
    }

    #[test]
    fn missing_create_time() {
        assert!(KeyListItem::default().created_at().is_none());
    }
}
