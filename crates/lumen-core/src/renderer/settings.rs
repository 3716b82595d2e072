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

//! User-facing render settings.

use crate::config::{self, SettingsError};
use crate::renderer::api::enums::{SampleCount, TextureFormat};
use crate::renderer::api::pipeline::{DEFAULT_FRAGMENT_ENTRY_POINT, DEFAULT_VERTEX_ENTRY_POINT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output formats and entry points used to preset a
/// [`RenderPipelineBuilder`](crate::renderer::RenderPipelineBuilder).
///
/// Every field has a default, so a settings file only names what it changes:
///
/// ```ron
/// (sample_count: X4, depth_format: Some(Depth32Float))
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Debug label given to the pipeline.
    pub label: Option<String>,
    /// Format of the single color target.
    pub color_format: TextureFormat,
    /// Depth buffer format. `None` disables depth testing.
    pub depth_format: Option<TextureFormat>,
    /// Samples per pixel.
    pub sample_count: SampleCount,
    /// Name of the vertex entry point in the shader module.
    pub vertex_entry_point: String,
    /// Name of the fragment entry point in the shader module.
    pub fragment_entry_point: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            label: Some("Sphere Tracer Pipeline".to_string()),
            color_format: TextureFormat::Bgra8UnormSrgb,
            depth_format: None,
            sample_count: SampleCount::X1,
            vertex_entry_point: DEFAULT_VERTEX_ENTRY_POINT.to_string(),
            fragment_entry_point: DEFAULT_FRAGMENT_ENTRY_POINT.to_string(),
        }
    }
}

impl RenderSettings {
    /// Loads settings from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        config::load_ron(path)
    }

    /// Parses settings from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        config::parse_ron(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(
            RenderSettings::from_ron_str("()").unwrap(),
            RenderSettings::default()
        );
    }

    #[test]
    fn partial_file_overrides_named_fields_only() {
        let settings =
            RenderSettings::from_ron_str("(sample_count: X4, depth_format: Some(Depth32Float))")
                .unwrap();
        assert_eq!(settings.sample_count, SampleCount::X4);
        assert_eq!(settings.depth_format, Some(TextureFormat::Depth32Float));
        assert_eq!(settings.color_format, TextureFormat::Bgra8UnormSrgb);
        assert_eq!(settings.vertex_entry_point, "vs_main");
        assert_eq!(settings.fragment_entry_point, "fs_main");
    }

    #[test]
    fn settings_round_trip_through_ron() {
        let settings = RenderSettings {
            label: None,
            color_format: TextureFormat::Rgba16Float,
            depth_format: Some(TextureFormat::Depth24Plus),
            sample_count: SampleCount::X2,
            vertex_entry_point: "vs_quad".to_string(),
            fragment_entry_point: "fs_trace".to_string(),
        };
        let text = config::to_ron_pretty(&settings).unwrap();
        assert_eq!(RenderSettings::from_ron_str(&text).unwrap(), settings);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(RenderSettings::from_ron_str("(color_format: Rgb565)").is_err());
    }
}
