// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scene files.

use super::object::SceneObject;
use crate::config::{self, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A scene as authored in a RON file.
///
/// ```ron
/// (
///   objects: [
///     (position: (x: 0.0, y: 0.0, z: -1.0), radius: 0.5, albedo: (r: 0.1, g: 0.2, b: 0.5)),
///   ],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Objects in upload order.
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl SceneDescription {
    /// Loads a scene from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let scene: Self = config::load_ron(path)?;
        log::info!("Loaded scene with {} objects", scene.objects.len());
        Ok(scene)
    }

    /// Parses a scene from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        config::parse_ron(text)
    }

    /// Writes the scene as human-readable RON.
    pub fn to_ron_string(&self) -> Result<String, SettingsError> {
        config::to_ron_pretty(self)
    }
}
