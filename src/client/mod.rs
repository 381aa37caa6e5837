// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resource services of the SwitchBot cloud API.
//!
//! A [`Client`] owns a [`Transport`] and hands out short-lived service
//! handles grouped by resource:
//!
//! - [`DeviceService`]: device list, status and commands
//! - [`SceneService`]: manual scenes
//! - [`WebhookService`]: webhook subscriptions
//!
//! Each call performs exactly one request and never retries.
//!
//! # Examples
//!
//! ```no_run
//! use switchbot_lib::Client;
//! use switchbot_lib::command::PowerCommand;
//! use switchbot_lib::protocol::ClientConfig;
//!
//! # async fn example() -> switchbot_lib::Result<()> {
//! let client = Client::from_config(ClientConfig::new("token").with_secret("secret"))?;
//!
//! let devices = client.devices().list().await?;
//! for device in &devices.device_list {
//!     let status = client.devices().status(&device.id).await?;
//!     println!("{}: {:?}", device.name, status.power);
//! }
//!
//! client.devices().command("C271111EC0AB", &PowerCommand::TurnOn).await?;
//! # Ok(())
//! # }
//! ```

mod devices;
mod scenes;
mod webhooks;

pub use devices::DeviceService;
pub use scenes::SceneService;
pub use webhooks::{ALL_DEVICES, WebhookService};

use serde_json::Value;

use crate::error::Result;
use crate::protocol::{Method, Transport};
use crate::response::Envelope;

/// Client for the SwitchBot cloud API.
#[derive(Debug)]
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Creates a client over the given transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the device service.
    #[must_use]
    pub const fn devices(&self) -> DeviceService<'_, T> {
        DeviceService::new(self)
    }

    /// Returns the scene service.
    #[must_use]
    pub const fn scenes(&self) -> SceneService<'_, T> {
        SceneService::new(self)
    }

    /// Returns the webhook service.
    #[must_use]
    pub const fn webhooks(&self) -> WebhookService<'_, T> {
        WebhookService::new(self)
    }

    /// Sends a request and parses the response envelope.
    async fn call(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Envelope> {
        let response = self.transport.send(method, path, body).await?;
        response.envelope()
    }
}

#[cfg(feature = "http")]
impl Client<crate::protocol::HttpTransport> {
    /// Creates an HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a protocol error if the configuration is invalid.
    pub fn from_config(config: crate::protocol::ClientConfig) -> Result<Self> {
        Ok(Self::new(config.into_transport()?))
    }
}
