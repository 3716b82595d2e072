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

//! Backend-agnostic rendering contracts.
//!
//! This module defines the descriptors, ids and errors that describe a render
//! pipeline and its GPU resources, along with the [`GraphicsDevice`] trait a
//! backend implements to turn them into real objects. The wgpu backend lives
//! in `lumen-infra`.

pub mod api;
pub mod error;
pub mod settings;
pub mod traits;

pub use self::api::*;
pub use self::error::{
    ConfigurationError, ConfigurationWarning, PipelineError, RenderError, ResourceError,
};
pub use self::settings::RenderSettings;
pub use self::traits::GraphicsDevice;
