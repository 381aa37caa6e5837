// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound webhook parsing.
//!
//! SwitchBot posts one JSON document per event to the registered webhook
//! URL. The shape of its `context` depends on `context.deviceType`, so
//! parsing runs in two steps over the same buffered body: peek at the
//! discriminator, then decode the whole document into the matching record.
//!
//! The discriminator uses webhook tokens such as `"WoPresence"`, not the
//! display names of [`PhysicalDeviceType`]. Use
//! [`WebhookEvent::physical_device_type`] to translate.
//!
//! # Examples
//!
//! ```
//! use switchbot_lib::webhook::{WebhookEvent, parse_webhook_event};
//! use switchbot_lib::types::DetectionState;
//!
//! let body = br#"{
//!     "eventType": "changeReport",
//!     "eventVersion": "1",
//!     "context": {
//!         "deviceType": "WoPresence",
//!         "deviceMac": "01:00:5e:90:10:00",
//!         "detectionState": "NOT_DETECTED",
//!         "timeOfSample": 123456789
//!     }
//! }"#;
//!
//! match parse_webhook_event(body).unwrap() {
//!     WebhookEvent::MotionSensor(event) => {
//!         assert_eq!(event.context.detection_state, DetectionState::NOT_DETECTED);
//!     }
//!     other => panic!("unexpected event: {other:?}"),
//! }
//! ```

mod event;

pub use event::{
    BlindTiltContext, BlindTiltEvent, BotContext, BotEvent, CameraContext, CeilingEvent,
    ColorBulbEvent, ContactSensorContext, ContactSensorEvent, CurtainContext, CurtainEvent,
    DeviceContext, Event, Hub2Context, Hub2Event, IndoorCamEvent, KeypadContext, KeypadEvent,
    LightContext, LockContext, LockEvent, MeterContext, MeterEvent, MeterPlusEvent,
    MeterProContext, MeterProEvent, MotionSensorContext, MotionSensorEvent, OutdoorMeterEvent,
    PanTiltCamEvent, PlugContext, PlugMiniJpEvent, PlugMiniUsEvent, StripLightEvent,
    SweeperContext, SweeperEvent,
};

use std::io::Read;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ParseError, Result};
use crate::types::PhysicalDeviceType;

/// A parsed webhook event.
///
/// New device families are added over time, so matches need a wildcard arm.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WebhookEvent {
    /// `WoPresence`.
    MotionSensor(MotionSensorEvent),
    /// `WoContact`.
    ContactSensor(ContactSensorEvent),
    /// `WoMeter`.
    Meter(MeterEvent),
    /// `WoMeterPlus`.
    MeterPlus(MeterPlusEvent),
    /// `WoIOSensor`.
    OutdoorMeter(OutdoorMeterEvent),
    /// `WoMeterPro` and `WoMeterProCO2`.
    MeterPro(MeterProEvent),
    /// `WoHub2`.
    Hub2(Hub2Event),
    /// `WoLock` and `WoLockPro`.
    Lock(LockEvent),
    /// `WoKeypad` and `WoKeypadTouch`.
    Keypad(KeypadEvent),
    /// `WoCamera`.
    IndoorCam(IndoorCamEvent),
    /// `WoPanTiltCam`.
    PanTiltCam(PanTiltCamEvent),
    /// `WoBulb`.
    ColorBulb(ColorBulbEvent),
    /// `WoStrip`.
    StripLight(StripLightEvent),
    /// `WoCeiling` and `WoCeilingPro`.
    Ceiling(CeilingEvent),
    /// `WoPlugUS`.
    PlugMiniUs(PlugMiniUsEvent),
    /// `WoPlugJP`.
    PlugMiniJp(PlugMiniJpEvent),
    /// `WoSweeper` and `WoSweeperPlus`.
    Sweeper(SweeperEvent),
    /// `WoCurtain` and `WoCurtain3`.
    Curtain(CurtainEvent),
    /// `WoBlindTilt`.
    BlindTilt(BlindTiltEvent),
    /// `WoHand`.
    Bot(BotEvent),
}

impl WebhookEvent {
    /// Returns the fields shared by every event context.
    #[must_use]
    pub fn device(&self) -> &DeviceContext {
        match self {
            Self::MotionSensor(e) => &e.context.device,
            Self::ContactSensor(e) => &e.context.device,
            Self::Meter(e) | Self::MeterPlus(e) | Self::OutdoorMeter(e) => &e.context.device,
            Self::MeterPro(e) => &e.context.device,
            Self::Hub2(e) => &e.context.device,
            Self::Lock(e) => &e.context.device,
            Self::Keypad(e) => &e.context.device,
            Self::IndoorCam(e) | Self::PanTiltCam(e) => &e.context.device,
            Self::ColorBulb(e) | Self::StripLight(e) | Self::Ceiling(e) => &e.context.device,
            Self::PlugMiniUs(e) | Self::PlugMiniJp(e) => &e.context.device,
            Self::Sweeper(e) => &e.context.device,
            Self::Curtain(e) => &e.context.device,
            Self::BlindTilt(e) => &e.context.device,
            Self::Bot(e) => &e.context.device,
        }
    }

    /// Returns the webhook device type token, e.g. `"WoLockPro"`.
    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.device().device_type
    }

    /// Returns the MAC address of the reporting device.
    #[must_use]
    pub fn device_mac(&self) -> &str {
        &self.device().device_mac
    }

    /// Translates the webhook token into a display device type.
    #[must_use]
    pub fn physical_device_type(&self) -> Option<PhysicalDeviceType> {
        PhysicalDeviceType::from_webhook_token(self.device_type())
    }
}

#[derive(Deserialize)]
struct Probe {
    context: ProbeContext,
}

#[derive(Deserialize)]
struct ProbeContext {
    #[serde(rename = "deviceType", default)]
    device_type: String,
}

/// Reads `context.deviceType` without decoding the rest of the event.
///
/// A missing `deviceType` yields an empty string.
///
/// # Errors
///
/// Returns a parse error if the body is not JSON or has no `context`
/// object.
pub fn peek_device_type(body: &[u8]) -> Result<String> {
    let probe: Probe = serde_json::from_slice(body).map_err(ParseError::Json)?;
    Ok(probe.context.device_type)
}

fn decode<C: DeserializeOwned>(body: &[u8]) -> Result<Event<C>> {
    serde_json::from_slice(body)
        .map_err(ParseError::Json)
        .map_err(Into::into)
}

/// Parses a buffered webhook body into a typed event.
///
/// # Errors
///
/// Returns [`ParseError::UnknownDeviceType`] for an unrecognized
/// `deviceType` and [`ParseError::Json`] for malformed JSON at either step.
pub fn parse_webhook_event(body: &[u8]) -> Result<WebhookEvent> {
    let token = peek_device_type(body)?;

    tracing::debug!(device_type = %token, "Dispatching webhook event");

    let event = match token.as_str() {
        "WoPresence" => WebhookEvent::MotionSensor(decode(body)?),
        "WoContact" => WebhookEvent::ContactSensor(decode(body)?),
        "WoMeter" => WebhookEvent::Meter(decode(body)?),
        "WoMeterPlus" => WebhookEvent::MeterPlus(decode(body)?),
        "WoIOSensor" => WebhookEvent::OutdoorMeter(decode(body)?),
        "WoMeterPro" | "WoMeterProCO2" => WebhookEvent::MeterPro(decode(body)?),
        "WoHub2" => WebhookEvent::Hub2(decode(body)?),
        "WoLock" | "WoLockPro" => WebhookEvent::Lock(decode(body)?),
        "WoKeypad" | "WoKeypadTouch" => WebhookEvent::Keypad(decode(body)?),
        "WoCamera" => WebhookEvent::IndoorCam(decode(body)?),
        "WoPanTiltCam" => WebhookEvent::PanTiltCam(decode(body)?),
        "WoBulb" => WebhookEvent::ColorBulb(decode(body)?),
        "WoStrip" => WebhookEvent::StripLight(decode(body)?),
        "WoCeiling" | "WoCeilingPro" => WebhookEvent::Ceiling(decode(body)?),
        "WoPlugUS" => WebhookEvent::PlugMiniUs(decode(body)?),
        "WoPlugJP" => WebhookEvent::PlugMiniJp(decode(body)?),
        "WoSweeper" | "WoSweeperPlus" => WebhookEvent::Sweeper(decode(body)?),
        "WoCurtain" | "WoCurtain3" => WebhookEvent::Curtain(decode(body)?),
        "WoBlindTilt" => WebhookEvent::BlindTilt(decode(body)?),
        "WoHand" => WebhookEvent::Bot(decode(body)?),
        _ => return Err(ParseError::UnknownDeviceType { token }.into()),
    };

    Ok(event)
}

/// Buffers a webhook body from a reader, then parses it.
///
/// # Errors
///
/// Returns a parse error if reading fails, plus everything
/// [`parse_webhook_event`] can return.
pub fn parse_webhook_reader(mut reader: impl Read) -> Result<WebhookEvent> {
    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .map_err(|err| ParseError::Json(serde_json::Error::io(err)))?;
    parse_webhook_event(&body)
}
