// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::{Method, Transport};
use crate::response::Scene;

/// Manual scene calls.
#[derive(Debug)]
pub struct SceneService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> SceneService<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Lists the manual scenes created in the app.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status code, or the body cannot be decoded.
    pub async fn list(&self) -> Result<Vec<Scene>> {
        self.client
            .call(Method::Get, "/v1.1/scenes", None)
            .await?
            .into_body()
    }

    /// Runs a manual scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports a
    /// non-success status code.
    pub async fn execute(&self, scene_id: &str) -> Result<()> {
        let path = format!("/v1.1/scenes/{}/execute", urlencoding::encode(scene_id));

        tracing::debug!(scene_id = %scene_id, "Executing scene");

        self.client.call(Method::Post, &path, None).await?.check()?;
        Ok(())
    }
}
