// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manual scene records.

use serde::{Deserialize, Serialize};

/// A manual scene created in the SwitchBot app.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Scene {
    /// Scene identifier.
    #[serde(rename = "sceneId", default)]
    pub id: String,
    /// Scene name.
    #[serde(rename = "sceneName", default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_list() {
        let scenes: Vec<Scene> = serde_json::from_str(
            r#"[{"sceneId": "T02-20200804130110", "sceneName": "Close Office Devices"}]"#,
        )
        .unwrap();
        assert_eq!(scenes[0].id, "T02-20200804130110");
        assert_eq!(scenes[0].name, "Close Office Devices");
    }
}
