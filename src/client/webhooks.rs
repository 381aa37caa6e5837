// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Webhook subscription endpoints.
//!
//! All four endpoints are action-style: the operation is named in the JSON
//! body rather than by the HTTP method alone.

use serde_json::json;

use crate::client::Client;
use crate::error::{Result, ValueError};
use crate::protocol::{Method, Transport};
use crate::response::{WebhookConfig, WebhookUrls};

/// The only device list the API accepts.
pub const ALL_DEVICES: &str = "ALL";

/// Webhook setup, query, update and delete calls.
#[derive(Debug)]
pub struct WebhookService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> WebhookService<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Registers a URL to receive events from the given devices.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidArgument`] if `device_list` is not
    /// `"ALL"`, the only value the API supports, and an error if the request
    /// fails or the API reports a non-success status code.
    pub async fn setup(&self, url: &str, device_list: &str) -> Result<()> {
        if device_list != ALL_DEVICES {
            return Err(ValueError::InvalidArgument(format!(
                "device list must be {ALL_DEVICES} but was {device_list}"
            ))
            .into());
        }

        let body = json!({
            "action": "setupWebhook",
            "url": url,
            "deviceList": device_list,
        });

        self.client
            .call(Method::Post, "/v1.1/webhook/setupWebhook", Some(&body))
            .await?
            .check()?;
        Ok(())
    }

    /// Lists the registered webhook URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status code, or the body cannot be decoded.
    pub async fn query_urls(&self) -> Result<Vec<String>> {
        let body = json!({ "action": "queryUrl" });
        let urls: WebhookUrls = self
            .client
            .call(Method::Post, "/v1.1/webhook/queryWebhook", Some(&body))
            .await?
            .into_body()?;
        Ok(urls.urls)
    }

    /// Reads the configuration of registered webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidArgument`] if `urls` is empty, and an
    /// error if the request fails, the API reports a non-success status
    /// code, or the body cannot be decoded.
    pub async fn query_details(&self, urls: &[&str]) -> Result<Vec<WebhookConfig>> {
        if urls.is_empty() {
            return Err(
                ValueError::InvalidArgument("at least one url is required".to_string()).into(),
            );
        }

        let body = json!({ "action": "queryDetails", "urls": urls });
        self.client
            .call(Method::Post, "/v1.1/webhook/queryWebhook", Some(&body))
            .await?
            .into_body()
    }

    /// Enables or disables a registered webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports a
    /// non-success status code.
    pub async fn update(&self, url: &str, enable: bool) -> Result<()> {
        let body = json!({
            "action": "updateWebhook",
            "config": { "url": url, "enable": enable },
        });

        self.client
            .call(Method::Post, "/v1.1/webhook/updateWebhook", Some(&body))
            .await?
            .check()?;
        Ok(())
    }

    /// Removes a registered webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports a
    /// non-success status code.
    pub async fn delete(&self, url: &str) -> Result<()> {
        let body = json!({ "action": "deleteWebhook", "url": url });

        self.client
            .call(Method::Delete, "/v1.1/webhook/deleteWebhook", Some(&body))
            .await?
            .check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::Client;
    use crate::client::testing::FakeTransport;
    use crate::error::ErrorKind;
    use crate::protocol::Method;

    const OK: &str = r#"{"statusCode":100,"body":{},"message":""}"#;

    #[tokio::test]
    async fn setup_requires_all_devices() {
        let client = Client::new(FakeTransport::replying(OK));
        let err = client
            .webhooks()
            .setup("https://example.com/hook", "C271")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(client.transport().count(), 0);
    }

    #[tokio::test]
    async fn setup_body() {
        let client = Client::new(FakeTransport::replying(OK));
        client
            .webhooks()
            .setup("https://example.com/hook", "ALL")
            .await
            .unwrap();

        let request = client.transport().last();
        assert_eq!(request.path, "/v1.1/webhook/setupWebhook");
        assert_eq!(
            request.body,
            Some(json!({"action": "setupWebhook", "url": "https://example.com/hook", "deviceList": "ALL"}))
        );
    }

    #[tokio::test]
    async fn query_details_requires_url() {
        let client = Client::new(FakeTransport::replying(OK));
        let err = client.webhooks().query_details(&[]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn update_posts_to_update_endpoint() {
        let client = Client::new(FakeTransport::replying(OK));
        client
            .webhooks()
            .update("https://example.com/hook", false)
            .await
            .unwrap();

        let request = client.transport().last();
        assert_eq!(request.path, "/v1.1/webhook/updateWebhook");
        assert_eq!(
            request.body,
            Some(json!({"action": "updateWebhook", "config": {"url": "https://example.com/hook", "enable": false}}))
        );
    }

    #[tokio::test]
    async fn delete_uses_delete_method() {
        let client = Client::new(FakeTransport::replying(OK));
        client.webhooks().delete("https://example.com/hook").await.unwrap();

        let request = client.transport().last();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.body.unwrap()["action"], "deleteWebhook");
    }
}
