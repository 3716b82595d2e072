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

//! Upload of a scene into the tracer's bind group.

use super::layout::{scene_buffer_size, SceneUniforms, SCENE_RECORD_STRIDE};
use super::object::SceneObject;
use super::serializer::serialize_bytes;
use crate::renderer::api::{
    BindGroupDescriptor, BindGroupEntry, BindGroupId, BindGroupLayoutDescriptor,
    BindGroupLayoutEntry, BindGroupLayoutId, BufferBindingType, BufferDescriptor, BufferId,
    BufferUsage, ShaderStageFlags,
};
use crate::renderer::error::ResourceError;
use crate::renderer::traits::GraphicsDevice;
use std::borrow::Cow;
use std::num::NonZeroU64;

/// Binding of the read-only storage buffer holding the records.
pub const SCENE_OBJECTS_BINDING: u32 = 0;
/// Binding of the uniform holding the live object count.
pub const SCENE_UNIFORMS_BINDING: u32 = 1;

/// The layout entries of the scene bind group, both visible to the fragment stage.
pub fn scene_bind_group_layout_entries() -> [BindGroupLayoutEntry; 2] {
    [
        BindGroupLayoutEntry::buffer(
            SCENE_OBJECTS_BINDING,
            ShaderStageFlags::FRAGMENT,
            BufferBindingType::Storage { read_only: true },
            NonZeroU64::new(SCENE_RECORD_STRIDE),
        ),
        BindGroupLayoutEntry::buffer(
            SCENE_UNIFORMS_BINDING,
            ShaderStageFlags::FRAGMENT,
            BufferBindingType::Uniform,
            NonZeroU64::new(std::mem::size_of::<SceneUniforms>() as u64),
        ),
    ]
}

/// GPU resources holding a scene: the record storage buffer, the count
/// uniform and the bind group exposing both.
///
/// The storage buffer is sized once. [`update`](Self::update) rewrites it in
/// place and rejects scenes that no longer fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneBuffers {
    /// Storage buffer with one record per object.
    pub objects: BufferId,
    /// Uniform buffer with the object count.
    pub uniforms: BufferId,
    /// Layout of the scene bind group.
    pub layout: BindGroupLayoutId,
    /// Bind group exposing both buffers.
    pub bind_group: BindGroupId,
    capacity: usize,
}

impl SceneBuffers {
    /// Creates buffers sized for `objects` and uploads them.
    pub fn upload<D>(device: &D, objects: &[SceneObject]) -> Result<Self, ResourceError>
    where
        D: GraphicsDevice + ?Sized,
    {
        let buffers = Self::with_capacity(device, objects.len())?;
        buffers.update(device, objects)?;
        Ok(buffers)
    }

    /// Creates empty buffers able to hold `capacity` objects.
    ///
    /// At least one record is always allocated, since a storage binding
    /// cannot be empty.
    pub fn with_capacity<D>(device: &D, capacity: usize) -> Result<Self, ResourceError>
    where
        D: GraphicsDevice + ?Sized,
    {
        let capacity = capacity.max(1);

        let entries = scene_bind_group_layout_entries();
        let layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &entries,
        })?;

        let objects = device.create_buffer(&BufferDescriptor {
            label: Some(Cow::Borrowed("Scene Objects Buffer")),
            size: scene_buffer_size(capacity),
            usage: BufferUsage::STORAGE | BufferUsage::COPY_DST,
            mapped_at_creation: false,
        })?;

        let uniforms = device.create_buffer(&BufferDescriptor {
            label: Some(Cow::Borrowed("Scene Uniforms Buffer")),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: BufferUsage::UNIFORM | BufferUsage::COPY_DST,
            mapped_at_creation: false,
        })?;

        let bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout,
            entries: &[
                BindGroupEntry::whole_buffer(SCENE_OBJECTS_BINDING, objects),
                BindGroupEntry::whole_buffer(SCENE_UNIFORMS_BINDING, uniforms),
            ],
        })?;

        log::debug!("Created scene buffers for {capacity} objects");

        Ok(Self {
            objects,
            uniforms,
            layout,
            bind_group,
            capacity,
        })
    }

    /// Number of objects the storage buffer can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rewrites the records and the object count.
    ///
    /// Nothing is written when `objects` exceeds the capacity.
    pub fn update<D>(&self, device: &D, objects: &[SceneObject]) -> Result<(), ResourceError>
    where
        D: GraphicsDevice + ?Sized,
    {
        if objects.len() > self.capacity {
            return Err(ResourceError::OutOfBounds {
                required: scene_buffer_size(objects.len()),
                capacity: scene_buffer_size(self.capacity),
            });
        }

        let bytes = serialize_bytes(objects);
        if !bytes.is_empty() {
            device.write_buffer(self.objects, 0, &bytes)?;
        }
        let uniforms = SceneUniforms::new(objects.len());
        device.write_buffer(self.uniforms, 0, bytemuck::bytes_of(&uniforms))?;

        log::trace!("Uploaded {} scene objects", objects.len());
        Ok(())
    }
}
