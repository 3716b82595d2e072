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

//! A `GraphicsDevice` that records every call instead of talking to a GPU.

#![allow(dead_code)]

use lumen_core::renderer::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A buffer creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedBuffer {
    pub label: Option<String>,
    pub size: u64,
    pub usage: BufferUsage,
}

/// A single `write_buffer` call.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferWrite {
    pub buffer: BufferId,
    pub offset: u64,
    pub data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct RecordingDevice {
    next_id: AtomicUsize,
    pub shader_modules: Mutex<Vec<String>>,
    pub bind_group_layouts: Mutex<Vec<Vec<BindGroupLayoutEntry>>>,
    pub pipeline_layouts: Mutex<Vec<Vec<BindGroupLayoutId>>>,
    pub pipelines: Mutex<Vec<RenderPipelineDescriptor<'static>>>,
    pub buffers: Mutex<Vec<(BufferId, CreatedBuffer)>>,
    pub writes: Mutex<Vec<BufferWrite>>,
    pub bind_groups: Mutex<Vec<(BindGroupLayoutId, Vec<BindGroupEntry>)>>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> usize {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn pipeline_count(&self) -> usize {
        self.pipelines.lock().unwrap().len()
    }

    pub fn buffer(&self, id: BufferId) -> CreatedBuffer {
        self.buffers
            .lock()
            .unwrap()
            .iter()
            .find(|(buffer, _)| *buffer == id)
            .map(|(_, created)| created.clone())
            .expect("buffer was never created")
    }

    pub fn writes_to(&self, id: BufferId) -> Vec<BufferWrite> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|write| write.buffer == id)
            .cloned()
            .collect()
    }
}

/// Reads back native-endian floats written to a buffer.
pub fn decode_floats(data: &[u8]) -> Vec<f32> {
    data.chunks_exact(4)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

fn to_static(descriptor: &RenderPipelineDescriptor) -> RenderPipelineDescriptor<'static> {
    RenderPipelineDescriptor {
        label: descriptor.label.as_ref().map(|l| l.to_string().into()),
        layout: descriptor.layout,
        vertex: VertexStage {
            module: descriptor.vertex.module,
            entry_point: descriptor.vertex.entry_point.to_string().into(),
            buffers: descriptor
                .vertex
                .buffers
                .iter()
                .map(|layout| VertexBufferLayout {
                    array_stride: layout.array_stride,
                    step_mode: layout.step_mode,
                    attributes: layout.attributes.to_vec().into(),
                })
                .collect(),
        },
        fragment: FragmentStage {
            module: descriptor.fragment.module,
            entry_point: descriptor.fragment.entry_point.to_string().into(),
            targets: descriptor.fragment.targets.clone(),
        },
        primitive: descriptor.primitive,
        depth_stencil: descriptor.depth_stencil,
        multisample: descriptor.multisample,
    }
}

impl GraphicsDevice for RecordingDevice {
    fn create_shader_module(
        &self,
        descriptor: &ShaderModuleDescriptor,
    ) -> Result<ShaderModuleId, ResourceError> {
        let ShaderSourceData::Wgsl(source) = &descriptor.source;
        self.shader_modules.lock().unwrap().push(source.to_string());
        Ok(ShaderModuleId(self.next()))
    }

    fn create_bind_group_layout(
        &self,
        descriptor: &BindGroupLayoutDescriptor,
    ) -> Result<BindGroupLayoutId, ResourceError> {
        self.bind_group_layouts
            .lock()
            .unwrap()
            .push(descriptor.entries.to_vec());
        Ok(BindGroupLayoutId(self.next()))
    }

    fn create_pipeline_layout(
        &self,
        descriptor: &PipelineLayoutDescriptor,
    ) -> Result<PipelineLayoutId, ResourceError> {
        self.pipeline_layouts
            .lock()
            .unwrap()
            .push(descriptor.bind_group_layouts.to_vec());
        Ok(PipelineLayoutId(self.next()))
    }

    fn create_render_pipeline(
        &self,
        descriptor: &RenderPipelineDescriptor,
    ) -> Result<RenderPipelineId, ResourceError> {
        self.pipelines.lock().unwrap().push(to_static(descriptor));
        Ok(RenderPipelineId(self.next()))
    }

    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferId, ResourceError> {
        let id = BufferId(self.next());
        self.buffers.lock().unwrap().push((
            id,
            CreatedBuffer {
                label: descriptor.label.as_ref().map(|l| l.to_string()),
                size: descriptor.size,
                usage: descriptor.usage,
            },
        ));
        Ok(id)
    }

    fn write_buffer(&self, id: BufferId, offset: u64, data: &[u8]) -> Result<(), ResourceError> {
        let capacity = self
            .buffers
            .lock()
            .unwrap()
            .iter()
            .find(|(buffer, _)| *buffer == id)
            .map(|(_, created)| created.size)
            .ok_or(ResourceError::NotFound)?;
        let required = offset.saturating_add(data.len() as u64);
        if required > capacity {
            return Err(ResourceError::OutOfBounds { required, capacity });
        }
        self.writes.lock().unwrap().push(BufferWrite {
            buffer: id,
            offset,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn create_bind_group(
        &self,
        descriptor: &BindGroupDescriptor,
    ) -> Result<BindGroupId, ResourceError> {
        self.bind_groups
            .lock()
            .unwrap()
            .push((descriptor.layout, descriptor.entries.to_vec()));
        Ok(BindGroupId(self.next()))
    }
}
