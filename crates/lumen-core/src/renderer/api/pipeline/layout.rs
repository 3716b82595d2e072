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

//! Pipeline layout descriptors.

use crate::renderer::api::bind_group::BindGroupLayoutId;
use std::borrow::Cow;

/// An opaque handle to a pipeline layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PipelineLayoutId(pub usize);

/// A descriptor for a [`PipelineLayoutId`].
#[derive(Debug, Clone)]
pub struct PipelineLayoutDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The bind group layouts used by this pipeline, indexed by group number.
    pub bind_group_layouts: &'a [BindGroupLayoutId],
}

/// The layout a render pipeline is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineLayout {
    /// Let the backend derive the layout from shader reflection.
    Auto,
    /// Use a layout created through `GraphicsDevice::create_pipeline_layout`.
    Explicit(PipelineLayoutId),
}

impl From<PipelineLayoutId> for PipelineLayout {
    fn from(id: PipelineLayoutId) -> Self {
        PipelineLayout::Explicit(id)
    }
}

impl From<PipelineLayoutId> for Option<PipelineLayout> {
    fn from(id: PipelineLayoutId) -> Self {
        Some(PipelineLayout::Explicit(id))
    }
}
