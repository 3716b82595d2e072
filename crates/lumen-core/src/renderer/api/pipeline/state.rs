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

//! State descriptors for the pipeline.

use super::enums::*;
use crate::renderer::api::enums::{SampleCount, TextureFormat};
use std::borrow::Cow;

/// Describes a single vertex attribute within a vertex buffer layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// The input location of this attribute in the vertex shader (`@location(n)`).
    pub shader_location: u32,
    /// The byte offset of this attribute from the start of the vertex.
    pub offset: u64,
    /// The format of the attribute's data.
    pub format: VertexFormat,
}

/// Describes the memory layout of a single vertex buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBufferLayout<'a> {
    /// The byte distance between consecutive elements in the buffer.
    pub array_stride: u64,
    /// How often the vertex buffer is advanced.
    pub step_mode: VertexStepMode,
    /// The attributes contained within each element, in declaration order.
    pub attributes: Cow<'a, [VertexAttribute]>,
}

impl<'a> VertexBufferLayout<'a> {
    /// Creates a per-vertex buffer layout.
    pub fn new(array_stride: u64, attributes: impl Into<Cow<'a, [VertexAttribute]>>) -> Self {
        Self {
            array_stride,
            step_mode: VertexStepMode::Vertex,
            attributes: attributes.into(),
        }
    }
}

/// Describes primitive assembly and rasterization.
///
/// The default is a clockwise triangle list without culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PrimitiveState {
    /// The topology of the primitives.
    pub topology: PrimitiveTopology,
    /// The face culling mode.
    pub cull_mode: CullMode,
    /// The vertex winding order that determines the front face.
    pub front_face: FrontFace,
}

impl PrimitiveState {
    /// Creates a primitive state with the given topology and default culling and winding.
    pub fn with_topology(topology: PrimitiveTopology) -> Self {
        Self {
            topology,
            ..Default::default()
        }
    }
}

/// Describes depth testing.
///
/// There is no partially specified depth state: a pipeline either carries a
/// complete `DepthStencilState` or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthStencilState {
    /// The format of the depth texture.
    pub format: TextureFormat,
    /// If `true`, depth values are written to the depth buffer.
    pub depth_write_enabled: bool,
    /// The comparison function used for the depth test.
    pub depth_compare: CompareFunction,
}

impl DepthStencilState {
    /// Creates a depth state with writes enabled and a `Less` comparison.
    pub fn new(format: TextureFormat) -> Self {
        Self {
            format,
            depth_write_enabled: true,
            depth_compare: CompareFunction::Less,
        }
    }
}

/// Describes one color target the fragment stage writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTargetState {
    /// The texture format of this color target.
    pub format: TextureFormat,
}

impl From<TextureFormat> for ColorTargetState {
    fn from(format: TextureFormat) -> Self {
        Self { format }
    }
}

/// Describes the multisampling state for a render pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MultisampleState {
    /// The number of samples per pixel.
    pub count: SampleCount,
}
