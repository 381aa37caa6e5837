// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device type tokens.
//!
//! The API uses two naming schemes for the same hardware. The device list
//! and status endpoints report a display name such as `"Smart Lock"`, while
//! webhook payloads carry an internal token such as `"WoLock"`. The mapping
//! between the two is not systematic, so it is kept as a separate lookup
//! table ([`PhysicalDeviceType::from_webhook_token`]) instead of being folded
//! into one enumeration.

use super::token::open_token;

open_token! {
    /// Display type of a physical SwitchBot device.
    ///
    /// # Examples
    ///
    /// ```
    /// use switchbot_lib::types::PhysicalDeviceType;
    ///
    /// let t: PhysicalDeviceType = serde_json::from_str("\"Smart Lock\"").unwrap();
    /// assert_eq!(t, PhysicalDeviceType::LOCK);
    ///
    /// // Types this library does not know yet still decode.
    /// let t: PhysicalDeviceType = serde_json::from_str("\"Robot Arm\"").unwrap();
    /// assert!(!t.is_known());
    /// ```
    PhysicalDeviceType {
        /// SwitchBot Hub (S1 / Mini / Plus).
        HUB = "Hub",
        /// SwitchBot Hub Plus.
        HUB_PLUS = "Hub Plus",
        /// SwitchBot Hub Mini (W0202200).
        HUB_MINI = "Hub Mini",
        /// SwitchBot Hub 2 (W3202100).
        HUB2 = "Hub 2",
        /// SwitchBot Bot (S1).
        BOT = "Bot",
        /// SwitchBot Curtain (W0701600).
        CURTAIN = "Curtain",
        /// SwitchBot Curtain 3.
        CURTAIN3 = "Curtain3",
        /// SwitchBot Plug (SP11).
        PLUG = "Plug",
        /// SwitchBot Thermometer and Hygrometer.
        METER = "Meter",
        /// Thermometer and Hygrometer Plus (JP, W2201500).
        METER_PLUS_JP = "Meter Plus (JP)",
        /// Thermometer and Hygrometer Plus (US, W2301500).
        METER_PLUS_US = "Meter Plus (US)",
        /// Thermometer and Hygrometer Plus.
        METER_PLUS = "MeterPlus",
        /// Thermometer and Hygrometer Pro (W4900000).
        METER_PRO = "MeterPro",
        /// CO2 Sensor (W4900010).
        METER_PRO_CO2 = "MeterPro(CO2)",
        /// Indoor/Outdoor Thermo-Hygrometer (W3400010).
        IO_SENSOR = "WoIOSensor",
        /// SwitchBot Humidifier (W0801801).
        HUMIDIFIER = "Humidifier",
        /// SwitchBot Smart Fan (W0601100).
        SMART_FAN = "Smart Fan",
        /// SwitchBot LED Strip Light (W1701100).
        STRIP_LIGHT = "Strip Light",
        /// SwitchBot Plug Mini (US, W1901400).
        PLUG_MINI_US = "Plug Mini (US)",
        /// SwitchBot Plug Mini (JP, W2001400).
        PLUG_MINI_JP = "Plug Mini (JP)",
        /// SwitchBot Lock (W1601700).
        LOCK = "Smart Lock",
        /// SwitchBot Lock Pro.
        LOCK_PRO = "Smart Lock Pro",
        /// Robot Vacuum Cleaner S1 (W3011000).
        ROBOT_VACUUM_CLEANER_S1 = "Robot Vacuum Cleaner S1",
        /// Robot Vacuum Cleaner S1 Plus (W3011010).
        ROBOT_VACUUM_CLEANER_S1_PLUS = "Robot Vacuum Cleaner S1 Plus",
        /// Robot Vacuum Cleaner K10+ (W3011020).
        SWEEPER_MINI = "WoSweeperMini",
        /// SwitchBot Motion Sensor (W1101500).
        MOTION_SENSOR = "Motion Sensor",
        /// SwitchBot Contact Sensor (W1201500).
        CONTACT_SENSOR = "Contact Sensor",
        /// SwitchBot Color Bulb (W1401400).
        COLOR_BULB = "Color Bulb",
        /// SwitchBot Keypad (W2500010).
        KEYPAD = "KeyPad",
        /// SwitchBot Keypad Touch (W2500020).
        KEYPAD_TOUCH = "KeyPad Touch",
        /// SwitchBot Ceiling Light (W2612230, W2612240).
        CEILING_LIGHT = "Ceiling Light",
        /// SwitchBot Ceiling Light Pro (W2612210, W2612220).
        CEILING_LIGHT_PRO = "Ceiling Light Pro",
        /// SwitchBot Indoor Cam (W1301200).
        INDOOR_CAM = "Indoor Cam",
        /// SwitchBot Pan/Tilt Cam (W1801200).
        PAN_TILT_CAM = "Pan/Tilt Cam",
        /// SwitchBot Pan/Tilt Cam 2K (W3101100).
        PAN_TILT_CAM_2K = "Pan/Tilt Cam 2K",
        /// SwitchBot Blind Tilt (W2701600).
        BLIND_TILT = "Blind Tilt",
    }
}

/// Webhook token to display type.
///
/// Tokens that cover several models (for example `WoKeypad`) map to the
/// base model.
const WEBHOOK_TOKENS: &[(&str, PhysicalDeviceType)] = &[
    ("WoHand", PhysicalDeviceType::BOT),
    ("WoCurtain", PhysicalDeviceType::CURTAIN),
    ("WoCurtain3", PhysicalDeviceType::CURTAIN3),
    ("WoPresence", PhysicalDeviceType::MOTION_SENSOR),
    ("WoContact", PhysicalDeviceType::CONTACT_SENSOR),
    ("WoMeter", PhysicalDeviceType::METER),
    ("WoMeterPlus", PhysicalDeviceType::METER_PLUS),
    ("WoMeterPro", PhysicalDeviceType::METER_PRO),
    ("WoMeterProCO2", PhysicalDeviceType::METER_PRO_CO2),
    ("WoIOSensor", PhysicalDeviceType::IO_SENSOR),
    ("WoHub2", PhysicalDeviceType::HUB2),
    ("WoLock", PhysicalDeviceType::LOCK),
    ("WoLockPro", PhysicalDeviceType::LOCK_PRO),
    ("WoKeypad", PhysicalDeviceType::KEYPAD),
    ("WoKeypadTouch", PhysicalDeviceType::KEYPAD_TOUCH),
    ("WoCamera", PhysicalDeviceType::INDOOR_CAM),
    ("WoPanTiltCam", PhysicalDeviceType::PAN_TILT_CAM),
    ("WoBulb", PhysicalDeviceType::COLOR_BULB),
    ("WoStrip", PhysicalDeviceType::STRIP_LIGHT),
    ("WoCeiling", PhysicalDeviceType::CEILING_LIGHT),
    ("WoCeilingPro", PhysicalDeviceType::CEILING_LIGHT_PRO),
    ("WoPlugUS", PhysicalDeviceType::PLUG_MINI_US),
    ("WoPlugJP", PhysicalDeviceType::PLUG_MINI_JP),
    ("WoSweeper", PhysicalDeviceType::ROBOT_VACUUM_CLEANER_S1),
    ("WoSweeperPlus", PhysicalDeviceType::ROBOT_VACUUM_CLEANER_S1_PLUS),
    ("WoBlindTilt", PhysicalDeviceType::BLIND_TILT),
];

impl PhysicalDeviceType {
    /// Looks up the display type for a webhook `deviceType` token.
    ///
    /// Returns `None` for tokens with no known display type. The match is
    /// exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use switchbot_lib::types::PhysicalDeviceType;
    ///
    /// assert_eq!(
    ///     PhysicalDeviceType::from_webhook_token("WoLock"),
    ///     Some(PhysicalDeviceType::LOCK)
    /// );
    /// assert_eq!(PhysicalDeviceType::from_webhook_token("wolock"), None);
    /// ```
    #[must_use]
    pub fn from_webhook_token(token: &str) -> Option<Self> {
        WEBHOOK_TOKENS
            .iter()
            .find(|(wire, _)| *wire == token)
            .map(|(_, display)| display.clone())
    }
}

open_token! {
    /// Type of a virtual infrared remote.
    VirtualDeviceType {
        /// Air conditioner.
        AIR_CONDITIONER = "Air Conditioner",
        /// Television.
        TV = "TV",
        /// Light.
        LIGHT = "Light",
        /// IPTV or streamer.
        IPTV_STREAMER = "IPTV/Streamer",
        /// Set-top box.
        SET_TOP_BOX = "Set Top Box",
        /// DVD player.
        DVD = "DVD",
        /// Fan.
        FAN = "Fan",
        /// Projector.
        PROJECTOR = "Projector",
        /// Camera.
        CAMERA = "Camera",
        /// Air purifier.
        AIR_PURIFIER = "Air Purifier",
        /// Speaker.
        SPEAKER = "Speaker",
        /// Water heater.
        WATER_HEATER = "Water Heater",
        /// Vacuum cleaner.
        VACUUM_CLEANER = "Vacuum Cleaner",
        /// Any other appliance.
        OTHERS = "Others",
    }
}
