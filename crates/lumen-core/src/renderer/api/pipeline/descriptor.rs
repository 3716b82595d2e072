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

//! Main pipeline descriptors.

use super::layout::PipelineLayout;
use super::state::*;
use crate::renderer::api::shader::ShaderModuleId;
use std::borrow::Cow;

/// The entry point used for the vertex stage when none is given.
pub const DEFAULT_VERTEX_ENTRY_POINT: &str = "vs_main";
/// The entry point used for the fragment stage when none is given.
pub const DEFAULT_FRAGMENT_ENTRY_POINT: &str = "fs_main";

/// The vertex stage of a render pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStage<'a> {
    /// The compiled shader module holding the entry point.
    pub module: ShaderModuleId,
    /// The name of the vertex entry point function.
    pub entry_point: Cow<'a, str>,
    /// The vertex buffer layouts, in slot order. May be empty when the
    /// shader generates its own geometry.
    pub buffers: Vec<VertexBufferLayout<'a>>,
}

/// The fragment stage of a render pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentStage<'a> {
    /// The compiled shader module holding the entry point.
    pub module: ShaderModuleId,
    /// The name of the fragment entry point function.
    pub entry_point: Cow<'a, str>,
    /// The color targets written by this stage. Never empty.
    pub targets: Vec<ColorTargetState>,
}

/// A complete, validated descriptor for a render pipeline.
///
/// Normally produced by [`super::RenderPipelineBuilder::finalize`], which
/// guarantees a layout, both shader stages and at least one color target.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPipelineDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The pipeline layout.
    pub layout: PipelineLayout,
    /// The vertex stage.
    pub vertex: VertexStage<'a>,
    /// The fragment stage.
    pub fragment: FragmentStage<'a>,
    /// The state for primitive assembly and rasterization.
    pub primitive: PrimitiveState,
    /// The state for depth testing. If `None`, depth testing is disabled.
    pub depth_stencil: Option<DepthStencilState>,
    /// The multisampling state.
    pub multisample: MultisampleState,
}

/// An opaque handle to a compiled render pipeline state object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderPipelineId(pub usize);
