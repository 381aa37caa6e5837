// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device endpoints.

use crate::client::Client;
use crate::command::Command;
use crate::error::{ProtocolError, Result};
use crate::protocol::{Method, Transport};
use crate::response::{DeviceList, DeviceStatus, decode_device_status};

/// Device list, status and command calls.
#[derive(Debug)]
pub struct DeviceService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> DeviceService<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists physical devices and infrared remotes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status code, or the body cannot be decoded.
    pub async fn list(&self) -> Result<DeviceList> {
        self.client
            .call(Method::Get, "/v1.1/devices", None)
            .await?
            .into_body()
    }

    /// Reads the status of a physical device.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status code (e.g. [`DeviceOffline`](crate::ErrorKind::DeviceOffline)),
    /// or the body cannot be decoded.
    pub async fn status(&self, device_id: &str) -> Result<DeviceStatus> {
        let path = format!("/v1.1/devices/{}/status", urlencoding::encode(device_id));
        let envelope = self.client.call(Method::Get, &path, None).await?;
        envelope.check()?;
        decode_device_status(&envelope.body)
    }

    /// Sends a command to a device or infrared remote.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports a
    /// non-success status code.
    pub async fn command<C: Command + ?Sized>(&self, device_id: &str, command: &C) -> Result<()> {
        let request = command.render();
        let path = format!("/v1.1/devices/{}/commands", urlencoding::encode(device_id));
        let body = serde_json::to_value(&request).map_err(ProtocolError::Serialize)?;

        tracing::debug!(
            device_id = %device_id,
            command = %request.command,
            "Sending device command"
        );

        let envelope = self.client.call(Method::Post, &path, Some(&body)).await?;
        envelope.check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::Client;
    use crate::client::testing::FakeTransport;
    use crate::command::{CurtainCommand, CurtainMode};
    use crate::error::ErrorKind;
    use crate::protocol::Method;
    use crate::types::PowerState;

    #[tokio::test]
    async fn status_decodes_body() {
        let transport = FakeTransport::replying(
            r#"{"statusCode":100,"body":{"deviceId":"C271","deviceType":"Plug Mini (US)","power":"on","voltage":120.5},"message":"success"}"#,
        );
        let client = Client::new(transport);

        let status = client.devices().status("C271").await.unwrap();
        assert_eq!(status.power, Some(PowerState::On));

        let request = client.transport().last();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/v1.1/devices/C271/status");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn offline_device_is_reported() {
        let client = Client::new(FakeTransport::replying(
            r#"{"statusCode":161,"body":{},"message":""}"#,
        ));
        let err = client.devices().status("C271").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeviceOffline);
    }

    #[tokio::test]
    async fn command_posts_rendered_request() {
        let client = Client::new(FakeTransport::replying(
            r#"{"statusCode":100,"body":{},"message":"success"}"#,
        ));
        let cmd = CurtainCommand::set_position(0, CurtainMode::Default, -5);
        client.devices().command("E2F6", &cmd).await.unwrap();

        let request = client.transport().last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/v1.1/devices/E2F6/commands");
        assert_eq!(
            request.body,
            Some(json!({"command": "setPosition", "parameter": "0,ff,0", "commandType": "command"}))
        );
    }

    #[tokio::test]
    async fn device_id_is_path_encoded() {
        let client = Client::new(FakeTransport::replying(
            r#"{"statusCode":100,"body":{},"message":""}"#,
        ));
        client.devices().status("a/b c").await.unwrap();
        assert_eq!(client.transport().last().path, "/v1.1/devices/a%2Fb%20c/status");
    }

    #[tokio::test]
    async fn one_request_per_call() {
        let client = Client::new(FakeTransport::replying(
            r#"{"statusCode":190,"body":{},"message":"busy"}"#,
        ));
        assert!(client.devices().list().await.is_err());
        assert_eq!(client.transport().count(), 1);
    }
}
