// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `SwitchBot` Lib - A Rust client for the SwitchBot cloud API.
//!
//! This library provides async APIs to list and control SwitchBot devices
//! through the v1.1 cloud API, and parsers for the events SwitchBot posts
//! to registered webhooks.
//!
//! # Supported Features
//!
//! - **Devices**: List devices and infrared remotes, read status, send commands
//! - **Scenes**: List and execute manual scenes
//! - **Webhooks**: Register, query, update and delete webhook URLs
//! - **Events**: Parse webhook payloads into typed events
//!
//! The status endpoint returns one flat record whose populated fields
//! depend on the device; some fields change JSON type between device
//! families (brightness is a number on lights and a word on sensors). These
//! are decoded into [`DeviceStatus`], [`BrightnessValue`] and
//! [`DeviceVersion`] at the boundary.
//!
//! # Quick Start
//!
//! ## Device Control
//!
//! ```no_run
//! use switchbot_lib::{Client, ClientConfig};
//! use switchbot_lib::command::{CurtainCommand, CurtainMode, PowerCommand};
//!
//! #[tokio::main]
//! async fn main() -> switchbot_lib::Result<()> {
//!     let client = Client::from_config(ClientConfig::new("token").with_secret("secret"))?;
//!
//!     // Basic power control
//!     client.devices().command("C271111EC0AB", &PowerCommand::TurnOn).await?;
//!
//!     // Positions are clamped to 0-100
//!     let cmd = CurtainCommand::set_position(0, CurtainMode::Default, 50);
//!     client.devices().command("E2F6032048AB", &cmd).await?;
//!
//!     let status = client.devices().status("C271111EC0AB").await?;
//!     if let Some(brightness) = &status.brightness {
//!         println!("brightness: {brightness}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Webhook Events
//!
//! ```
//! use switchbot_lib::webhook::{WebhookEvent, parse_webhook_event};
//!
//! let body = br#"{"eventType":"changeReport","eventVersion":"1",
//!     "context":{"deviceType":"WoLock","deviceMac":"01:00:5e:90:10:00",
//!                "lockState":"LOCKED","timeOfSample":123456789}}"#;
//!
//! let event = parse_webhook_event(body)?;
//! assert_eq!(event.device_mac(), "01:00:5e:90:10:00");
//! assert!(matches!(event, WebhookEvent::Lock(_)));
//! # Ok::<(), switchbot_lib::Error>(())
//! ```
//!
//! # Errors
//!
//! Every fallible call returns [`Error`]. Use [`Error::kind`] to branch on
//! the failure class without matching the nested enums:
//!
//! ```no_run
//! # use switchbot_lib::{Client, ClientConfig, ErrorKind};
//! # async fn example() -> switchbot_lib::Result<()> {
//! # let client = Client::from_config(ClientConfig::new("token"))?;
//! match client.devices().status("C271111EC0AB").await {
//!     Ok(status) => println!("{:?}", status.power),
//!     Err(err) if err.kind() == ErrorKind::DeviceOffline => println!("offline"),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod command;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;
pub mod webhook;

pub use client::Client;
pub use codec::{decode_brightness, decode_device_version};
pub use command::{Command, CommandRequest, CommandType};
pub use error::{ApiError, Error, ErrorKind, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{ClientConfig, HttpTransport};
pub use protocol::{Method, RawResponse, Transport};
pub use response::{DeviceStatus, Envelope, decode_device_status};
pub use types::{
    AmbientBrightness, BrightnessValue, DeviceVersion, PhysicalDeviceType, PowerState, RgbColor,
    SlidePosition, VirtualDeviceType,
};
pub use webhook::{WebhookEvent, parse_webhook_event, parse_webhook_reader, peek_device_type};
