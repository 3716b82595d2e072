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

//! Flattening of scenes into storage-buffer payloads.

use super::layout::{SceneObjectRecord, SCENE_RECORD_FLOATS};
use super::object::SceneObject;

/// Converts each object to its record, preserving order.
pub fn records(objects: &[SceneObject]) -> Vec<SceneObjectRecord> {
    objects.iter().map(SceneObjectRecord::from).collect()
}

/// Flattens `objects` into `objects.len() * 16` floats, one record per
/// object in input order.
pub fn serialize(objects: &[SceneObject]) -> Vec<f32> {
    let mut floats = Vec::with_capacity(objects.len() * SCENE_RECORD_FLOATS);
    for object in objects {
        floats.extend_from_slice(&SceneObjectRecord::from(object).to_floats());
    }
    floats
}

/// The same records as [`serialize`], as the raw bytes a GPU buffer expects.
pub fn serialize_bytes(objects: &[SceneObject]) -> Vec<u8> {
    bytemuck::cast_slice(&records(objects)).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{LinearRgba, Vec3, Vec4};
    use crate::scene::layout::SCENE_RECORD_STRIDE;
    use approx::assert_relative_eq;

    fn diffuse() -> SceneObject {
        SceneObject {
            position: Vec4::new(0.0, 0.0, -6.0, 0.0),
            radius: 1.0,
            material_id: 1,
            albedo: LinearRgba::new(1.0, 0.6, 0.2, 0.0),
            fuzz: 0.03,
        }
    }

    #[test]
    fn empty_scene_serializes_to_nothing() {
        assert!(serialize(&[]).is_empty());
        assert!(serialize_bytes(&[]).is_empty());
    }

    #[test]
    fn single_object_produces_one_padded_record() {
        let floats = serialize(&[diffuse()]);
        let expected = [
            0.0, 0.0, -6.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.6, 0.2, 0.0, 0.03, 0.0, 0.0, 0.0,
        ];
        assert_eq!(floats.len(), SCENE_RECORD_FLOATS);
        for (actual, expected) in floats.iter().zip(expected) {
            assert_relative_eq!(*actual, expected);
        }
    }

    #[test]
    fn records_follow_input_order() {
        let first = SceneObject::sphere(Vec3::new(1.0, 0.0, 0.0), 0.5, 0, LinearRgba::WHITE, 0.0);
        let second = SceneObject::sphere(Vec3::new(2.0, 0.0, 0.0), 0.25, 1, LinearRgba::BLACK, 0.5);
        let floats = serialize(&[first, second]);

        assert_eq!(floats.len(), 2 * SCENE_RECORD_FLOATS);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[4], 0.5);
        assert_eq!(floats[SCENE_RECORD_FLOATS], 2.0);
        assert_eq!(floats[SCENE_RECORD_FLOATS + 4], 0.25);
        assert_eq!(floats[SCENE_RECORD_FLOATS + 5], 1.0);
        assert_eq!(floats[SCENE_RECORD_FLOATS + 12], 0.5);
    }

    #[test]
    fn serialization_is_deterministic() {
        let scene = [diffuse(), diffuse()];
        assert_eq!(serialize(&scene), serialize(&scene));
    }

    #[test]
    fn bytes_decode_to_the_same_floats() {
        let scene = [diffuse(), SceneObject::sphere(Vec3::ZERO, 2.0, 0, LinearRgba::WHITE, 0.0)];
        let bytes = serialize_bytes(&scene);
        assert_eq!(bytes.len() as u64, scene.len() as u64 * SCENE_RECORD_STRIDE);

        let decoded: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        assert_eq!(decoded, serialize(&scene));
    }
}
