// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP client using wiremock.

use serde_json::json;
use switchbot_lib::command::{CustomizeCommand, KeypadCommand, LightCommand, PowerCommand};
use switchbot_lib::protocol::{ClientConfig, HttpTransport};
use switchbot_lib::types::{AmbientBrightness, PasscodeType, PhysicalDeviceType, PowerState};
use switchbot_lib::{Client, Error, ErrorKind, ProtocolError};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client<HttpTransport> {
    Client::from_config(
        ClientConfig::new("test-token")
            .with_secret("test-secret")
            .with_endpoint(server.uri()),
    )
    .unwrap()
}

fn envelope(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 100,
        "body": body,
        "message": "success"
    }))
}

fn status_code(code: i64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": code,
        "body": {},
        "message": ""
    }))
}

// ============================================================================
// Transport Tests
// ============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn signed_request_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.1/scenes"))
            .and(header("Authorization", "test-token"))
            .and(header("Content-Type", "application/json; charset=utf8"))
            .and(header_exists("sign"))
            .and(header_exists("nonce"))
            .and(header_exists("t"))
            .respond_with(envelope(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let scenes = client(&server).scenes().list().await.unwrap();
        assert!(scenes.is_empty());

        let requests = server.received_requests().await.unwrap();
        let sign = requests[0].headers.get("sign").unwrap().to_str().unwrap();
        assert_eq!(sign, sign.to_uppercase());
        assert_eq!(sign.len(), 44);
    }

    #[tokio::test]
    async fn unsigned_request_has_token_only() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.1/scenes"))
            .and(header("Authorization", "test-token"))
            .respond_with(envelope(json!([])))
            .mount(&server)
            .await;

        let client =
            Client::from_config(ClientConfig::new("test-token").with_endpoint(server.uri()))
                .unwrap();
        client.scenes().list().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("sign"));
        assert!(!requests[0].headers.contains_key("nonce"));
    }

    #[tokio::test]
    async fn unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server).devices().list().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::AuthenticationFailed)
        ));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server).devices().list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimited);
    }

    #[tokio::test]
    async fn other_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server).devices().list().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::HttpStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn body_that_is_not_an_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let err = client(&server).devices().list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeShapeMismatch);
    }
}

// ============================================================================
// Device Service Tests
// ============================================================================

mod devices {
    use super::*;

    #[tokio::test]
    async fn list_devices() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.1/devices"))
            .respond_with(envelope(json!({
                "deviceList": [{
                    "deviceId": "500291B269BE",
                    "deviceName": "Living Room Humidifier",
                    "deviceType": "Humidifier",
                    "enableCloudService": true,
                    "hubDeviceId": "000000000000"
                }],
                "infraredRemoteList": [{
                    "deviceId": "02-202008110034-13",
                    "deviceName": "Living Room TV",
                    "remoteType": "TV",
                    "hubDeviceId": "FA7310762361"
                }]
            })))
            .mount(&server)
            .await;

        let devices = client(&server).devices().list().await.unwrap();
        assert_eq!(devices.device_list.len(), 1);
        assert_eq!(devices.device_list[0].device_type, PhysicalDeviceType::HUMIDIFIER);
        assert!(devices.device_list[0].enable_cloud_service);
        assert_eq!(devices.infrared_remote_list[0].name, "Living Room TV");
    }

    #[tokio::test]
    async fn color_bulb_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.1/devices/6055F92FCFD2/status"))
            .respond_with(envelope(json!({
                "deviceId": "6055F92FCFD2",
                "deviceType": "Color Bulb",
                "hubDeviceId": "6055F92FCFD2",
                "power": "on",
                "brightness": 100,
                "color": "255:128:0",
                "colorTemperature": 4000,
                "version": 112
            })))
            .mount(&server)
            .await;

        let status = client(&server)
            .devices()
            .status("6055F92FCFD2")
            .await
            .unwrap();
        assert_eq!(status.power, Some(PowerState::On));
        assert_eq!(status.brightness.as_ref().unwrap().as_numeric().unwrap(), 100);
        assert_eq!(status.version.as_str(), "112");
        assert_eq!(status.rgb_color().unwrap().unwrap().green(), 128);
    }

    #[tokio::test]
    async fn motion_sensor_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.1/devices/C8EB7E4D1A2B/status"))
            .respond_with(envelope(json!({
                "deviceId": "C8EB7E4D1A2B",
                "deviceType": "Motion Sensor",
                "moveDetected": true,
                "brightness": "dim",
                "battery": 90,
                "version": "V1.2"
            })))
            .mount(&server)
            .await;

        let status = client(&server)
            .devices()
            .status("C8EB7E4D1A2B")
            .await
            .unwrap();
        assert!(status.move_detected);
        let brightness = status.brightness.unwrap();
        assert_eq!(brightness.as_ambient().unwrap(), AmbientBrightness::DIM);
        assert_eq!(brightness.as_numeric().unwrap_err().kind(), ErrorKind::WrongVariant);
        assert_eq!(status.version.as_str(), "V1.2");
    }

    #[tokio::test]
    async fn offline_device() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.1/devices/C271111EC0AB/status"))
            .respond_with(status_code(161))
            .mount(&server)
            .await;

        let err = client(&server)
            .devices()
            .status("C271111EC0AB")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeviceOffline);
    }

    #[tokio::test]
    async fn send_power_command() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/devices/C271111EC0AB/commands"))
            .and(body_json(json!({
                "command": "turnOn",
                "parameter": "default",
                "commandType": "command"
            })))
            .respond_with(envelope(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .devices()
            .command("C271111EC0AB", &PowerCommand::TurnOn)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn send_light_color() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/devices/6055F92FCFD2/commands"))
            .and(body_json(json!({
                "command": "setColor",
                "parameter": "122:80:20",
                "commandType": "command"
            })))
            .respond_with(envelope(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let cmd = LightCommand::SetColor("122:80:20".parse().unwrap());
        client(&server)
            .devices()
            .command("6055F92FCFD2", &cmd)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn send_customize_command() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/devices/02-202008110034-13/commands"))
            .and(body_json(json!({
                "command": "Night Mode",
                "parameter": "default",
                "commandType": "customize"
            })))
            .respond_with(envelope(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .devices()
            .command(
                "02-202008110034-13",
                &CustomizeCommand::button_push("Night Mode"),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn send_create_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/devices/F7538E1ABCEB/commands"))
            .respond_with(envelope(json!({})))
            .mount(&server)
            .await;

        let cmd =
            KeypadCommand::create_key("Guest", PasscodeType::PERMANENT, "123456", None, None)
                .unwrap();
        client(&server)
            .devices()
            .command("F7538E1ABCEB", &cmd)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["command"], "createKey");
        let parameter: serde_json::Value =
            serde_json::from_str(body["parameter"].as_str().unwrap()).unwrap();
        assert_eq!(parameter["type"], "permanent");
        assert_eq!(parameter["password"], "123456");
    }

    #[tokio::test]
    async fn command_rejected_by_device() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(status_code(160))
            .mount(&server)
            .await;

        let err = client(&server)
            .devices()
            .command("C271111EC0AB", &PowerCommand::Press)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[tokio::test]
    async fn command_to_offline_device() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/devices/C271111EC0AB/commands"))
            .respond_with(status_code(161))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .devices()
            .command("C271111EC0AB", &PowerCommand::TurnOn)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeviceOffline);
    }
}

// ============================================================================
// Scene Service Tests
// ============================================================================

mod scenes {
    use super::*;

    #[tokio::test]
    async fn list_scenes() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.1/scenes"))
            .respond_with(envelope(json!([
                {"sceneId": "T02-20200804130110", "sceneName": "Close Office Devices"},
                {"sceneId": "T02-202009221414-48924101", "sceneName": "Set Office AC to 25"}
            ])))
            .mount(&server)
            .await;

        let scenes = client(&server).scenes().list().await.unwrap();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[1].id, "T02-202009221414-48924101");
    }

    #[tokio::test]
    async fn execute_scene() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/scenes/T02-20200804130110/execute"))
            .respond_with(envelope(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .scenes()
            .execute("T02-20200804130110")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn execute_missing_scene() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(status_code(152))
            .mount(&server)
            .await;

        let err = client(&server).scenes().execute("nope").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

// ============================================================================
// Webhook Service Tests
// ============================================================================

mod webhooks {
    use super::*;

    const HOOK: &str = "https://example.com/switchbot";

    #[tokio::test]
    async fn setup() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/webhook/setupWebhook"))
            .and(body_json(json!({
                "action": "setupWebhook",
                "url": HOOK,
                "deviceList": "ALL"
            })))
            .respond_with(envelope(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).webhooks().setup(HOOK, "ALL").await.unwrap();
    }

    #[tokio::test]
    async fn query_urls() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/webhook/queryWebhook"))
            .and(body_json(json!({"action": "queryUrl"})))
            .respond_with(envelope(json!({"urls": [HOOK]})))
            .mount(&server)
            .await;

        let urls = client(&server).webhooks().query_urls().await.unwrap();
        assert_eq!(urls, vec![HOOK.to_string()]);
    }

    #[tokio::test]
    async fn query_details() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/webhook/queryWebhook"))
            .and(body_json(json!({"action": "queryDetails", "urls": [HOOK]})))
            .respond_with(envelope(json!([{
                "url": HOOK,
                "createTime": 123456789000_i64,
                "lastUpdateTime": 123456789000_i64,
                "deviceList": "ALL",
                "enable": true
            }])))
            .mount(&server)
            .await;

        let details = client(&server)
            .webhooks()
            .query_details(&[HOOK])
            .await
            .unwrap();
        assert_eq!(details.len(), 1);
        assert!(details[0].enable);
        assert_eq!(details[0].url, HOOK);
    }

    #[tokio::test]
    async fn update() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.1/webhook/updateWebhook"))
            .and(body_json(json!({
                "action": "updateWebhook",
                "config": {"url": HOOK, "enable": true}
            })))
            .respond_with(envelope(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).webhooks().update(HOOK, true).await.unwrap();
    }

    #[tokio::test]
    async fn delete() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1.1/webhook/deleteWebhook"))
            .and(body_json(json!({"action": "deleteWebhook", "url": HOOK})))
            .respond_with(envelope(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).webhooks().delete(HOOK).await.unwrap();
    }
}
