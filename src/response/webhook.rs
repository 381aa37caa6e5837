// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Webhook subscription records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a `queryUrl` webhook query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WebhookUrls {
    /// Registered webhook URLs.
    pub urls: Vec<String>,
}

/// Configuration of a registered webhook, from a `queryDetails` query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConfig {
    /// Receiver URL.
    pub url: String,
    /// Creation time in Unix milliseconds.
    pub create_time: i64,
    /// Last update time in Unix milliseconds.
    pub last_update_time: i64,
    /// Devices covered by the webhook (currently always `"ALL"`).
    pub device_list: String,
    /// The webhook is delivering events.
    pub enable: bool,
}

impl WebhookConfig {
    /// Returns the creation time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.create_time)
    }

    /// Returns the last update time.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_update_time)
    }
}
