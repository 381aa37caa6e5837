// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for webhook event parsing.

use switchbot_lib::types::{
    BotMode, CleanerOnlineStatus, CleanerWorkingStatus, DetectionState, LockEventState,
    PhysicalDeviceType, PowerState, TemperatureScale,
};
use switchbot_lib::webhook::{WebhookEvent, parse_webhook_reader};
use switchbot_lib::{ErrorKind, parse_webhook_event, peek_device_type};

fn payload(context: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "eventType": "changeReport",
        "eventVersion": "1",
        "context": context
    }))
    .unwrap()
}

#[test]
fn motion_sensor() {
    let body = payload(serde_json::json!({
        "deviceType": "WoPresence",
        "deviceMac": "01:00:5e:90:10:00",
        "detectionState": "NOT_DETECTED",
        "timeOfSample": 123_456_789
    }));

    let parsed = parse_webhook_event(&body).unwrap();
    assert_eq!(parsed.physical_device_type(), Some(PhysicalDeviceType::MOTION_SENSOR));

    let WebhookEvent::MotionSensor(event) = parsed else {
        panic!("expected motion sensor event");
    };
    assert_eq!(event.event_version, "1");
    assert_eq!(event.context.device.device_mac, "01:00:5e:90:10:00");
    assert_eq!(event.context.device.time_of_sample, 123_456_789);
    assert_eq!(event.context.detection_state, DetectionState::NOT_DETECTED);
}

#[test]
fn sweeper_variants_share_one_record() {
    for token in ["WoSweeper", "WoSweeperPlus"] {
        let body = payload(serde_json::json!({
            "deviceType": token,
            "deviceMac": "01:00:5e:90:10:00",
            "workingStatus": "StandBy",
            "onlineStatus": "online",
            "battery": 100,
            "timeOfSample": 123_456_789
        }));

        let WebhookEvent::Sweeper(event) = parse_webhook_event(&body).unwrap() else {
            panic!("expected sweeper event for {token}");
        };
        assert_eq!(event.context.device.device_type, token);
        assert_eq!(event.context.working_status, CleanerWorkingStatus::STAND_BY);
        assert_eq!(event.context.online_status, CleanerOnlineStatus::ONLINE);
        assert_eq!(event.context.battery, 100);
    }
}

#[test]
fn keypad_variants_share_one_record() {
    for token in ["WoKeypad", "WoKeypadTouch"] {
        let body = payload(serde_json::json!({
            "deviceType": token,
            "deviceMac": "01:00:5e:90:10:00",
            "eventName": "createKey",
            "commandId": "CMD-1663558451952-01",
            "result": "success",
            "timeOfSample": 123_456_789
        }));

        let WebhookEvent::Keypad(event) = parse_webhook_event(&body).unwrap() else {
            panic!("expected keypad event for {token}");
        };
        assert_eq!(event.context.event_name, "createKey");
        assert_eq!(event.context.result, "success");
    }
}

#[test]
fn lock_state_is_open_token() {
    let body = payload(serde_json::json!({
        "deviceType": "WoLock",
        "deviceMac": "01:00:5e:90:10:00",
        "lockState": "LATCH_BOLT_LOCKED",
        "timeOfSample": 123_456_789
    }));

    let WebhookEvent::Lock(event) = parse_webhook_event(&body).unwrap() else {
        panic!("expected lock event");
    };
    assert!(!event.context.lock_state.is_known());
    assert_ne!(event.context.lock_state, LockEventState::LOCKED);
    assert_eq!(event.context.lock_state, "LATCH_BOLT_LOCKED");
}

#[test]
fn meter_and_bot() {
    let meter = payload(serde_json::json!({
        "deviceType": "WoMeterPlus",
        "deviceMac": "01:00:5e:90:10:00",
        "temperature": 22.5,
        "scale": "CELSIUS",
        "humidity": 31,
        "timeOfSample": 123_456_789
    }));
    let WebhookEvent::MeterPlus(event) = parse_webhook_event(&meter).unwrap() else {
        panic!("expected meter plus event");
    };
    assert_eq!(event.context.scale, TemperatureScale::CELSIUS);
    assert_eq!(event.context.humidity, 31);

    let bot = payload(serde_json::json!({
        "deviceType": "WoHand",
        "deviceMac": "01:00:5e:90:10:00",
        "power": "on",
        "battery": 10,
        "deviceMode": "pressMode",
        "timeOfSample": 123_456_789
    }));
    let WebhookEvent::Bot(event) = parse_webhook_event(&bot).unwrap() else {
        panic!("expected bot event");
    };
    assert_eq!(event.context.power, Some(PowerState::On));
    assert_eq!(event.context.device_mode, BotMode::PRESS);
}

#[test]
fn unknown_device_type() {
    let body = payload(serde_json::json!({
        "deviceType": "WoToaster",
        "deviceMac": "01:00:5e:90:10:00",
        "timeOfSample": 123_456_789
    }));

    assert_eq!(peek_device_type(&body).unwrap(), "WoToaster");
    let err = parse_webhook_event(&body).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownDeviceType);
    assert!(err.to_string().contains("WoToaster"));
}

#[test]
fn malformed_body() {
    let err = parse_webhook_event(b"not json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeShapeMismatch);
}

#[test]
fn reader_input() {
    let body = payload(serde_json::json!({
        "deviceType": "WoCurtain3",
        "deviceMac": "01:00:5e:90:10:00",
        "calibrate": true,
        "group": false,
        "slidePosition": 50,
        "battery": 100,
        "timeOfSample": 123_456_789
    }));

    let WebhookEvent::Curtain(event) = parse_webhook_reader(std::io::Cursor::new(body)).unwrap()
    else {
        panic!("expected curtain event");
    };
    assert!(event.context.calibrate);
    assert_eq!(event.context.slide_position, 50);
}
