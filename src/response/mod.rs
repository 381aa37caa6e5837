// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for SwitchBot API responses.
//!
//! Every endpoint wraps its payload in an [`Envelope`]. The body types in
//! this module are decoded from the envelope once its status code has been
//! checked.

mod device;
mod envelope;
mod object;
mod scene;
mod status;
mod webhook;

pub use device::{Device, DeviceList, InfraredDevice, KeyListItem};
pub use envelope::Envelope;
pub use scene::Scene;
pub use status::{DeviceStatus, decode_device_status};
pub use webhook::{WebhookConfig, WebhookUrls};
