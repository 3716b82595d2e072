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

use crate::math::{LinearRgba, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Material id of a diffuse (Lambertian) surface.
pub const MATERIAL_DIFFUSE: u32 = 0;
/// Material id of a metallic surface. Its `fuzz` blurs the reflection.
pub const MATERIAL_METAL: u32 = 1;

/// One traceable sphere.
///
/// The material id is forwarded to the shader untouched; the values above are
/// the ones `tracer.wgsl` understands. Radius and fuzz are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Center of the sphere. `w` is carried to the GPU but unused.
    pub position: Vec4,
    /// Radius of the sphere.
    pub radius: f32,
    /// Material model selector.
    #[serde(default)]
    pub material_id: u32,
    /// Surface color.
    #[serde(default = "default_albedo")]
    pub albedo: LinearRgba,
    /// Reflection roughness, conventionally in `[0, 1]`.
    #[serde(default)]
    pub fuzz: f32,
}

fn default_albedo() -> LinearRgba {
    LinearRgba::WHITE
}

impl SceneObject {
    /// Creates a sphere centered at `center`, with `w = 0`.
    pub fn sphere(
        center: Vec3,
        radius: f32,
        material_id: u32,
        albedo: LinearRgba,
        fuzz: f32,
    ) -> Self {
        Self {
            position: center.into(),
            radius,
            material_id,
            albedo,
            fuzz,
        }
    }

    /// Center of the sphere without the `w` component.
    pub fn center(&self) -> Vec3 {
        self.position.truncate()
    }
}
