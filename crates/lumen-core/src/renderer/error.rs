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

//! Defines the hierarchy of error types for the rendering subsystem.

use crate::renderer::api::bind_group::BindGroupLayoutId;
use crate::renderer::api::pipeline::PipelineLayoutId;
use crate::renderer::api::shader::ShaderModuleId;
use thiserror::Error;

/// A required pipeline field was missing when the configuration was finalized.
///
/// When several fields are missing, the first one in declaration order is
/// reported: layout, vertex module, fragment module, color targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The layout was cleared with `set_layout(None)`.
    #[error("Pipeline layout must be set using `set_layout`")]
    MissingLayout,
    /// The vertex stage has no shader module.
    #[error("Vertex shader module must be set")]
    MissingVertexModule,
    /// The fragment stage has no shader module.
    #[error("Fragment shader module must be set")]
    MissingFragmentModule,
    /// No color target format was given.
    #[error("At least one color target format must be set using `set_color_target_formats`")]
    MissingColorTargets,
}

impl ConfigurationError {
    /// A short name of the missing field.
    pub const fn field(&self) -> &'static str {
        match self {
            ConfigurationError::MissingLayout => "layout",
            ConfigurationError::MissingVertexModule => "vertex shader",
            ConfigurationError::MissingFragmentModule => "fragment shader",
            ConfigurationError::MissingColorTargets => "color targets",
        }
    }
}

/// A non-fatal advisory about a pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationWarning {
    /// No vertex buffer layouts were given.
    #[error("No vertex buffers specified. This is valid if vertices are generated in the shader.")]
    EmptyVertexBuffers,
}

/// An error related to the creation of a graphics pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The pipeline configuration was incomplete.
    #[error("Invalid pipeline configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// A shader module referenced by the pipeline does not exist.
    #[error("Invalid shader module {id:?} for pipeline '{}'", .pipeline_label.as_deref().unwrap_or("Unknown"))]
    InvalidShaderModuleForPipeline {
        /// The ID of the invalid shader module.
        id: ShaderModuleId,
        /// The label of the pipeline being created.
        pipeline_label: Option<String>,
    },
    /// The explicit pipeline layout does not exist.
    #[error("Invalid pipeline layout ID: {id:?}")]
    InvalidPipelineLayout {
        /// The ID of the missing layout.
        id: PipelineLayoutId,
    },
    /// A bind group layout referenced by a pipeline layout or bind group does not exist.
    #[error("Invalid bind group layout ID: {id:?}")]
    InvalidBindGroupLayout {
        /// The ID of the missing bind group layout.
        id: BindGroupLayoutId,
    },
}

/// An error related to the creation or use of a GPU resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A pipeline-specific error occurred.
    #[error("Pipeline resource error: {0}")]
    Pipeline(#[from] PipelineError),
    /// A generic resource could not be found.
    #[error("Resource not found with ID.")]
    NotFound,
    /// An error originating from the specific graphics backend implementation.
    #[error("Backend-specific resource error: {0}")]
    BackendError(String),
    /// A write would run past the end of a buffer.
    #[error("Resource access out of bounds: {required} bytes required, {capacity} available.")]
    OutOfBounds {
        /// The end offset of the attempted access in bytes.
        required: u64,
        /// The size of the buffer in bytes.
        capacity: u64,
    },
}

impl From<ConfigurationError> for ResourceError {
    fn from(err: ConfigurationError) -> Self {
        ResourceError::Pipeline(PipelineError::Configuration(err))
    }
}

/// A top-level error of the rendering subsystem.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The graphics backend could not be brought up.
    #[error("Failed to initialize graphics backend: {0}")]
    InitializationFailed(String),
    /// An error occurred while managing a GPU resource.
    #[error("Graphics resource operation failed: {0}")]
    ResourceError(#[from] ResourceError),
}
