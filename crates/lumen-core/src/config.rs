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

//! RON loading helpers shared by render settings and scene descriptions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error raised while reading or writing a RON configuration file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid RON for the expected type.
    #[error("Invalid RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The value could not be written as RON.
    #[error("Failed to serialize to RON: {0}")]
    Serialize(String),
}

/// Parses a value from RON text.
pub fn parse_ron<T: DeserializeOwned>(text: &str) -> Result<T, SettingsError> {
    Ok(ron::from_str(text)?)
}

/// Reads and parses a RON file.
pub fn load_ron<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, SettingsError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = parse_ron(&text)?;
    log::debug!("Loaded configuration from '{}'", path.display());
    Ok(value)
}

/// Writes a value as human-readable RON.
pub fn to_ron_pretty<T: Serialize>(value: &T) -> Result<String, SettingsError> {
    let pretty_config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
    ron::ser::to_string_pretty(value, pretty_config)
        .map_err(|e| SettingsError::Serialize(e.to_string()))
}
