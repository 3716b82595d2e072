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

//! The sphere scene and its storage-buffer representation.
//!
//! A scene is an ordered list of [`SceneObject`]s. [`serialize`] flattens it
//! into fixed-stride [`SceneObjectRecord`]s whose layout matches the tracer's
//! WGSL struct, and [`SceneBuffers`] uploads those records through a
//! [`GraphicsDevice`](crate::renderer::GraphicsDevice).

pub mod buffers;
pub mod description;
pub mod layout;
pub mod object;
pub mod serializer;

pub use self::buffers::{
    scene_bind_group_layout_entries, SceneBuffers, SCENE_OBJECTS_BINDING, SCENE_UNIFORMS_BINDING,
};
pub use self::description::SceneDescription;
pub use self::layout::{
    scene_buffer_size, SceneObjectRecord, SceneUniforms, SCENE_RECORD_FLOATS, SCENE_RECORD_STRIDE,
};
pub use self::object::{SceneObject, MATERIAL_DIFFUSE, MATERIAL_METAL};
pub use self::serializer::{records, serialize, serialize_bytes};
