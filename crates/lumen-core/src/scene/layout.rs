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

//! GPU memory layout of the scene.
//!
//! Each object occupies one 64-byte record:
//!
//! | floats | content |
//! |--------|---------|
//! | 0..4   | position `x, y, z, w` |
//! | 4      | radius |
//! | 5      | material id |
//! | 6..8   | padding |
//! | 8..12  | albedo `r, g, b, a` |
//! | 12     | fuzz |
//! | 13..16 | padding |
//!
//! Padding keeps `albedo` on a 16-byte boundary and the stride a multiple of
//! 16, as WGSL requires for `vec4<f32>` members of storage arrays.

use super::object::SceneObject;

/// Number of `f32` values in one record.
pub const SCENE_RECORD_FLOATS: usize = 16;

/// Size of one record in bytes.
pub const SCENE_RECORD_STRIDE: u64 = 64;

/// The GPU-side representation of a [`SceneObject`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneObjectRecord {
    /// Sphere center (xyz) and the unused `w`.
    pub position: [f32; 4],
    /// Sphere radius.
    pub radius: f32,
    /// Material id, widened to `f32`.
    pub material_id: f32,
    /// Padding.
    pub _padding0: [f32; 2],
    /// Surface color.
    pub albedo: [f32; 4],
    /// Reflection roughness.
    pub fuzz: f32,
    /// Padding.
    pub _padding1: [f32; 3],
}

const _: () = assert!(std::mem::size_of::<SceneObjectRecord>() as u64 == SCENE_RECORD_STRIDE);
const _: () =
    assert!((SCENE_RECORD_FLOATS * std::mem::size_of::<f32>()) as u64 == SCENE_RECORD_STRIDE);

impl From<&SceneObject> for SceneObjectRecord {
    fn from(object: &SceneObject) -> Self {
        Self {
            position: object.position.to_array(),
            radius: object.radius,
            material_id: object.material_id as f32,
            _padding0: [0.0; 2],
            albedo: object.albedo.to_array(),
            fuzz: object.fuzz,
            _padding1: [0.0; 3],
        }
    }
}

impl SceneObjectRecord {
    /// The record as its 16 floats, in layout order.
    pub fn to_floats(&self) -> [f32; SCENE_RECORD_FLOATS] {
        bytemuck::cast(*self)
    }
}

/// Bytes needed to store `count` records.
pub fn scene_buffer_size(count: usize) -> u64 {
    count as u64 * SCENE_RECORD_STRIDE
}

/// Uniform telling the shader how many records are live.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Number of objects in the storage buffer.
    pub object_count: i32,
}

impl SceneUniforms {
    /// Builds the uniform for `count` objects, saturating at `i32::MAX`.
    pub fn new(count: usize) -> Self {
        Self {
            object_count: i32::try_from(count).unwrap_or(i32::MAX),
        }
    }
}
