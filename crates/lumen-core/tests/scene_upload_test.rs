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

mod common;

use common::{decode_floats, RecordingDevice};
use lumen_core::math::{LinearRgba, Vec3, Vec4};
use lumen_core::renderer::*;
use lumen_core::scene::*;

fn sample_scene() -> Vec<SceneObject> {
    vec![
        SceneObject {
            position: Vec4::new(0.0, 0.0, -6.0, 0.0),
            radius: 1.0,
            material_id: MATERIAL_METAL,
            albedo: LinearRgba::new(1.0, 0.6, 0.2, 0.0),
            fuzz: 0.03,
        },
        SceneObject::sphere(
            Vec3::new(0.0, -101.0, -6.0),
            100.0,
            MATERIAL_DIFFUSE,
            LinearRgba::rgb(0.5, 0.5, 0.5),
            0.0,
        ),
    ]
}

#[test]
fn upload_sizes_and_fills_both_buffers() {
    let device = RecordingDevice::new();
    let scene = sample_scene();
    let buffers = SceneBuffers::upload(&device, &scene).unwrap();

    assert_eq!(buffers.capacity(), 2);

    let objects = device.buffer(buffers.objects);
    assert_eq!(objects.size, scene_buffer_size(2));
    assert!(objects.usage.contains(BufferUsage::STORAGE));
    assert!(objects.usage.contains(BufferUsage::COPY_DST));

    let uniforms = device.buffer(buffers.uniforms);
    assert_eq!(uniforms.size, 4);
    assert!(uniforms.usage.contains(BufferUsage::UNIFORM));

    let object_writes = device.writes_to(buffers.objects);
    assert_eq!(object_writes.len(), 1);
    assert_eq!(object_writes[0].offset, 0);
    assert_eq!(object_writes[0].data, serialize_bytes(&scene));

    let uniform_writes = device.writes_to(buffers.uniforms);
    assert_eq!(uniform_writes.len(), 1);
    assert_eq!(uniform_writes[0].data, 2i32.to_ne_bytes().to_vec());
}

#[test]
fn first_record_matches_the_documented_layout() {
    let device = RecordingDevice::new();
    let buffers = SceneBuffers::upload(&device, &sample_scene()[..1]).unwrap();

    let data = &device.writes_to(buffers.objects)[0].data;
    let floats = decode_floats(data);
    assert_eq!(
        floats,
        vec![0.0, 0.0, -6.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.6, 0.2, 0.0, 0.03, 0.0, 0.0, 0.0]
    );
}

#[test]
fn bind_group_exposes_storage_and_uniform_to_fragment_stage() {
    let device = RecordingDevice::new();
    let buffers = SceneBuffers::upload(&device, &sample_scene()).unwrap();

    let layouts = device.bind_group_layouts.lock().unwrap();
    assert_eq!(layouts.len(), 1);
    let entries = &layouts[0];
    assert_eq!(entries[0].binding, SCENE_OBJECTS_BINDING);
    assert_eq!(entries[0].ty, BufferBindingType::Storage { read_only: true });
    assert_eq!(entries[1].binding, SCENE_UNIFORMS_BINDING);
    assert_eq!(entries[1].ty, BufferBindingType::Uniform);
    for entry in entries {
        assert!(entry.visibility.contains(ShaderStage::Fragment));
        assert!(!entry.visibility.contains(ShaderStage::Vertex));
    }

    let groups = device.bind_groups.lock().unwrap();
    let (layout, bound) = &groups[0];
    assert_eq!(*layout, buffers.layout);
    assert_eq!(
        bound,
        &vec![
            BindGroupEntry::whole_buffer(SCENE_OBJECTS_BINDING, buffers.objects),
            BindGroupEntry::whole_buffer(SCENE_UNIFORMS_BINDING, buffers.uniforms),
        ]
    );
}

#[test]
fn empty_scene_still_allocates_one_record() {
    let device = RecordingDevice::new();
    let buffers = SceneBuffers::upload(&device, &[]).unwrap();

    assert_eq!(buffers.capacity(), 1);
    assert_eq!(device.buffer(buffers.objects).size, 64);
    assert!(device.writes_to(buffers.objects).is_empty());
    assert_eq!(
        device.writes_to(buffers.uniforms)[0].data,
        0i32.to_ne_bytes().to_vec()
    );
}

#[test]
fn update_within_capacity_rewrites_in_place() {
    let device = RecordingDevice::new();
    let scene = sample_scene();
    let buffers = SceneBuffers::upload(&device, &scene).unwrap();

    buffers.update(&device, &scene[1..]).unwrap();

    let object_writes = device.writes_to(buffers.objects);
    assert_eq!(object_writes.len(), 2);
    assert_eq!(object_writes[1].data.len(), 64);
    let uniform_writes = device.writes_to(buffers.uniforms);
    assert_eq!(uniform_writes[1].data, 1i32.to_ne_bytes().to_vec());
}

#[test]
fn update_past_capacity_fails_without_writing() {
    let device = RecordingDevice::new();
    let scene = sample_scene();
    let buffers = SceneBuffers::with_capacity(&device, 1).unwrap();

    let err = buffers.update(&device, &scene).unwrap_err();
    match err {
        ResourceError::OutOfBounds { required, capacity } => {
            assert_eq!(required, 128);
            assert_eq!(capacity, 64);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(device.writes.lock().unwrap().is_empty());
}

#[test]
fn scene_file_uploads_in_file_order() {
    let description = SceneDescription::from_ron_str(
        "(objects: [
            (position: (x: 0.0, y: 0.0, z: -1.0), radius: 0.5),
            (position: (x: 1.0, y: 0.0, z: -1.0), radius: 0.25, material_id: 1),
        ])",
    )
    .unwrap();

    let device = RecordingDevice::new();
    let buffers = SceneBuffers::upload(&device, &description.objects).unwrap();

    let data = &device.writes_to(buffers.objects)[0].data;
    let floats = decode_floats(data);
    assert_eq!(floats[4], 0.5);
    assert_eq!(floats[SCENE_RECORD_FLOATS], 1.0);
    assert_eq!(floats[SCENE_RECORD_FLOATS + 4], 0.25);
    assert_eq!(floats[SCENE_RECORD_FLOATS + 5], 1.0);
}
