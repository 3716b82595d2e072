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

use crate::renderer::api::*;
use crate::renderer::error::ResourceError;
use std::fmt::Debug;

/// The device-side collaborator of the tracer.
///
/// Backends create GPU objects from the backend-agnostic descriptors and hand
/// back opaque ids. Completion of GPU work is the backend's concern; every
/// call here returns as soon as the request is recorded.
pub trait GraphicsDevice: Send + Sync + Debug + 'static {
    /// Creates a shader module from the provided descriptor.
    /// ## Arguments
    /// * `descriptor` - The shader source and an optional label.
    /// ## Returns
    /// A `Result` containing the ID of the created shader module or an error if the creation fails.
    /// ## Errors
    /// * `ResourceError` - If the shader module creation fails.
    fn create_shader_module(
        &self,
        descriptor: &ShaderModuleDescriptor,
    ) -> Result<ShaderModuleId, ResourceError>;

    /// Creates a bind group layout.
    /// ## Arguments
    /// * `descriptor` - The binding slots of the layout.
    /// ## Returns
    /// A `Result` containing the ID of the created layout.
    fn create_bind_group_layout(
        &self,
        descriptor: &BindGroupLayoutDescriptor,
    ) -> Result<BindGroupLayoutId, ResourceError>;

    /// Creates a pipeline layout from a list of bind group layouts.
    /// ## Arguments
    /// * `descriptor` - A reference to a `PipelineLayoutDescriptor` containing the layout configuration.
    /// ## Returns
    /// A `Result` containing the ID of the created pipeline layout or an error if the creation fails.
    /// ## Errors
    /// * `ResourceError` - If a referenced bind group layout is unknown.
    fn create_pipeline_layout(
        &self,
        descriptor: &PipelineLayoutDescriptor,
    ) -> Result<PipelineLayoutId, ResourceError>;

    /// Creates a render pipeline from a finalized descriptor.
    /// ## Arguments
    /// * `descriptor` - A descriptor produced by `RenderPipelineBuilder::finalize`.
    /// ## Returns
    /// A `Result` containing the ID of the created render pipeline or an error if the creation fails.
    /// ## Errors
    /// * `ResourceError` - If a referenced shader module or layout is unknown.
    fn create_render_pipeline(
        &self,
        descriptor: &RenderPipelineDescriptor,
    ) -> Result<RenderPipelineId, ResourceError>;

    /// Creates a new GPU buffer.
    /// ## Arguments
    /// * `descriptor` - A reference to a `BufferDescriptor` containing the buffer configuration.
    /// ## Returns
    /// A `Result` containing the ID of the created buffer or an error if the creation fails.
    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferId, ResourceError>;

    /// Writes data to a GPU buffer.
    /// ## Arguments
    /// * `id` - The ID of the buffer to write to.
    /// * `offset` - The offset in the buffer where the data will be written.
    /// * `data` - A slice of bytes containing the data to be written.
    /// ## Errors
    /// * `ResourceError::OutOfBounds` - If the write would run past the end of the buffer.
    fn write_buffer(&self, id: BufferId, offset: u64, data: &[u8]) -> Result<(), ResourceError>;

    /// Creates a bind group that binds buffers to the slots of a layout.
    /// ## Arguments
    /// * `descriptor` - The layout and the buffers to bind.
    /// ## Returns
    /// A `Result` containing the ID of the created bind group.
    fn create_bind_group(
        &self,
        descriptor: &BindGroupDescriptor,
    ) -> Result<BindGroupId, ResourceError>;
}
