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

//! Defines data structures for bind groups and bind group layouts.
//!
//! The tracer only binds buffers, so textures and samplers are not modelled.

use super::{buffer::BufferId, flags::ShaderStageFlags};
use std::num::NonZeroU64;

/// An opaque handle to a bind group layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindGroupLayoutId(pub usize);

/// An opaque handle to a bind group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindGroupId(pub usize);

/// How a buffer is exposed to shaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferBindingType {
    /// A uniform buffer (`var<uniform>`).
    Uniform,
    /// A storage buffer (`var<storage>`).
    Storage {
        /// If `true`, shaders may only read from the buffer.
        read_only: bool,
    },
}

/// Describes a single binding slot of a bind group layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindGroupLayoutEntry {
    /// The binding index, matching `@binding(n)` in WGSL.
    pub binding: u32,
    /// The shader stages that can see this binding.
    pub visibility: ShaderStageFlags,
    /// The kind of buffer bound at this slot.
    pub ty: BufferBindingType,
    /// The minimum size a bound buffer must have, if known.
    pub min_binding_size: Option<NonZeroU64>,
}

impl BindGroupLayoutEntry {
    /// Creates a buffer binding entry.
    pub fn buffer(
        binding: u32,
        visibility: ShaderStageFlags,
        ty: BufferBindingType,
        min_binding_size: Option<NonZeroU64>,
    ) -> Self {
        Self {
            binding,
            visibility,
            ty,
            min_binding_size,
        }
    }
}

/// A descriptor for a [`BindGroupLayoutId`].
#[derive(Debug, Clone)]
pub struct BindGroupLayoutDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<&'a str>,
    /// The binding slots of this layout.
    pub entries: &'a [BindGroupLayoutEntry],
}

/// A buffer range bound to one binding slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindGroupEntry {
    /// The binding index this entry fills.
    pub binding: u32,
    /// The buffer to bind.
    pub buffer: BufferId,
    /// Byte offset into the buffer.
    pub offset: u64,
    /// Size of the bound range. `None` binds the rest of the buffer.
    pub size: Option<NonZeroU64>,
}

impl BindGroupEntry {
    /// Binds a whole buffer at `binding`.
    pub fn whole_buffer(binding: u32, buffer: BufferId) -> Self {
        Self {
            binding,
            buffer,
            offset: 0,
            size: None,
        }
    }
}

/// A descriptor for a [`BindGroupId`].
#[derive(Debug, Clone)]
pub struct BindGroupDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<&'a str>,
    /// The layout this bind group conforms to.
    pub layout: BindGroupLayoutId,
    /// The resources bound in this group.
    pub entries: &'a [BindGroupEntry],
}
