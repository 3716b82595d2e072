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

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use lumen_core::renderer::api::{
    BindGroupDescriptor, BindGroupId, BindGroupLayoutDescriptor, BindGroupLayoutId,
    BufferDescriptor, BufferId, PipelineLayout, PipelineLayoutDescriptor, PipelineLayoutId,
    RenderPipelineDescriptor, RenderPipelineId, ShaderModuleDescriptor, ShaderModuleId,
    ShaderSourceData,
};
use lumen_core::renderer::{GraphicsDevice, PipelineError, RenderError, ResourceError};

use super::context::WgpuGraphicsContext;
use super::conversions::IntoWgpu;

#[derive(Debug)]
struct WgpuShaderModuleEntry {
    wgpu_module: Arc<wgpu::ShaderModule>,
}

#[derive(Debug)]
struct WgpuBindGroupLayoutEntry {
    wgpu_layout: Arc<wgpu::BindGroupLayout>,
}

#[derive(Debug)]
struct WgpuPipelineLayoutEntry {
    wgpu_layout: Arc<wgpu::PipelineLayout>,
}

#[derive(Debug)]
struct WgpuRenderPipelineEntry {
    wgpu_pipeline: Arc<wgpu::RenderPipeline>,
}

#[derive(Debug)]
struct WgpuBufferEntry {
    wgpu_buffer: Arc<wgpu::Buffer>,
    size: u64,
}

#[derive(Debug)]
struct WgpuBindGroupEntry {
    wgpu_bind_group: Arc<wgpu::BindGroup>,
}

/// The internal, non-clonable state of the WgpuDevice.
#[derive(Debug)]
struct WgpuDeviceInternal {
    context: Arc<WgpuGraphicsContext>,
    shader_modules: Mutex<HashMap<ShaderModuleId, WgpuShaderModuleEntry>>,
    bind_group_layouts: Mutex<HashMap<BindGroupLayoutId, WgpuBindGroupLayoutEntry>>,
    pipeline_layouts: Mutex<HashMap<PipelineLayoutId, WgpuPipelineLayoutEntry>>,
    pipelines: Mutex<HashMap<RenderPipelineId, WgpuRenderPipelineEntry>>,
    buffers: Mutex<HashMap<BufferId, WgpuBufferEntry>>,
    bind_groups: Mutex<HashMap<BindGroupId, WgpuBindGroupEntry>>,

    next_shader_id: AtomicUsize,
    next_bind_group_layout_id: AtomicUsize,
    next_pipeline_layout_id: AtomicUsize,
    next_pipeline_id: AtomicUsize,
    next_buffer_id: AtomicUsize,
    next_bind_group_id: AtomicUsize,
}

/// A clonable, thread-safe handle to the WGPU graphics device.
///
/// Resources live in per-kind tables keyed by the opaque ids handed out to
/// callers. Ids are never reused.
#[derive(Clone, Debug)]
pub struct WgpuDevice {
    internal: Arc<WgpuDeviceInternal>,
}

fn lock<'a, T>(table: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, ResourceError> {
    table
        .lock()
        .map_err(|e| ResourceError::BackendError(format!("Mutex poisoned ({name}): {e}")))
}

fn next_id(counter: &AtomicUsize) -> usize {
    counter.fetch_add(1, Ordering::Relaxed)
}

impl WgpuDevice {
    /// Wraps an initialized context.
    pub fn new(context: Arc<WgpuGraphicsContext>) -> Self {
        Self {
            internal: Arc::new(WgpuDeviceInternal {
                context,
                shader_modules: Mutex::new(HashMap::new()),
                bind_group_layouts: Mutex::new(HashMap::new()),
                pipeline_layouts: Mutex::new(HashMap::new()),
                pipelines: Mutex::new(HashMap::new()),
                buffers: Mutex::new(HashMap::new()),
                bind_groups: Mutex::new(HashMap::new()),
                next_shader_id: AtomicUsize::new(0),
                next_bind_group_layout_id: AtomicUsize::new(0),
                next_pipeline_layout_id: AtomicUsize::new(0),
                next_pipeline_id: AtomicUsize::new(0),
                next_buffer_id: AtomicUsize::new(0),
                next_bind_group_id: AtomicUsize::new(0),
            }),
        }
    }

    /// Creates a device on a headless context.
    pub async fn headless() -> Result<Self, RenderError> {
        let context = WgpuGraphicsContext::new_headless()
            .await
            .map_err(|e| RenderError::InitializationFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(context)))
    }

    /// The context this device creates resources on.
    pub fn context(&self) -> &WgpuGraphicsContext {
        &self.internal.context
    }

    /// Retrieves a reference-counted pointer to the internal WGPU render pipeline.
    /// Returns `None` if the ID is invalid.
    pub fn get_wgpu_render_pipeline(
        &self,
        id: RenderPipelineId,
    ) -> Option<Arc<wgpu::RenderPipeline>> {
        let pipelines = self.internal.pipelines.lock().ok()?;
        pipelines
            .get(&id)
            .map(|entry| Arc::clone(&entry.wgpu_pipeline))
    }

    /// Retrieves a reference-counted pointer to the internal WGPU bind group.
    /// Returns `None` if the ID is invalid.
    pub fn get_wgpu_bind_group(&self, id: BindGroupId) -> Option<Arc<wgpu::BindGroup>> {
        let bind_groups = self.internal.bind_groups.lock().ok()?;
        bind_groups
            .get(&id)
            .map(|entry| Arc::clone(&entry.wgpu_bind_group))
    }

    fn wgpu_device(&self) -> &wgpu::Device {
        &self.internal.context.device
    }
}

impl GraphicsDevice for WgpuDevice {
    // --- Shader Module Operations ---

    fn create_shader_module(
        &self,
        descriptor: &ShaderModuleDescriptor,
    ) -> Result<ShaderModuleId, ResourceError> {
        let wgpu_source = match &descriptor.source {
            ShaderSourceData::Wgsl(cow_str) => wgpu::ShaderSource::Wgsl(cow_str.clone()),
        };

        let label = descriptor.label;
        log::debug!("WgpuDevice: Creating wgpu::ShaderModule with label: {label:?}");
        let wgpu_module = self
            .wgpu_device()
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label,
                source: wgpu_source,
            });

        let id = ShaderModuleId(next_id(&self.internal.next_shader_id));
        lock(&self.internal.shader_modules, "shader_modules")?.insert(
            id,
            WgpuShaderModuleEntry {
                wgpu_module: Arc::new(wgpu_module),
            },
        );

        log::info!(
            "WgpuDevice: Successfully created shader module '{}' with ID: {:?}",
            label.unwrap_or_default(),
            id
        );
        Ok(id)
    }

    // --- Layout Operations ---

    fn create_bind_group_layout(
        &self,
        descriptor: &BindGroupLayoutDescriptor,
    ) -> Result<BindGroupLayoutId, ResourceError> {
        let entries: Vec<wgpu::BindGroupLayoutEntry> = descriptor
            .entries
            .iter()
            .map(|entry| wgpu::BindGroupLayoutEntry {
                binding: entry.binding,
                visibility: entry.visibility.into_wgpu(),
                ty: wgpu::BindingType::Buffer {
                    ty: entry.ty.into_wgpu(),
                    has_dynamic_offset: false,
                    min_binding_size: entry.min_binding_size,
                },
                count: None,
            })
            .collect();

        let wgpu_layout =
            self.wgpu_device()
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: descriptor.label,
                    entries: &entries,
                });

        let id = BindGroupLayoutId(next_id(&self.internal.next_bind_group_layout_id));
        lock(&self.internal.bind_group_layouts, "bind_group_layouts")?.insert(
            id,
            WgpuBindGroupLayoutEntry {
                wgpu_layout: Arc::new(wgpu_layout),
            },
        );

        log::debug!(
            "WgpuDevice: Created bind group layout '{}' with ID: {:?} ({} entries)",
            descriptor.label.unwrap_or_default(),
            id,
            entries.len()
        );
        Ok(id)
    }

    fn create_pipeline_layout(
        &self,
        descriptor: &PipelineLayoutDescriptor,
    ) -> Result<PipelineLayoutId, ResourceError> {
        log::debug!(
            "WgpuDevice: Creating pipeline layout with label: {:?}",
            descriptor.label
        );

        let bind_group_layouts: Vec<Arc<wgpu::BindGroupLayout>> = {
            let layouts = lock(&self.internal.bind_group_layouts, "bind_group_layouts")?;
            descriptor
                .bind_group_layouts
                .iter()
                .map(|id| {
                    layouts
                        .get(id)
                        .map(|entry| Arc::clone(&entry.wgpu_layout))
                        .ok_or(PipelineError::InvalidBindGroupLayout { id: *id })
                })
                .collect::<Result<_, _>>()?
        };
        let refs: Vec<Option<&wgpu::BindGroupLayout>> = bind_group_layouts.iter().map(|l| Some(l.as_ref())).collect();

        let wgpu_layout = self
            .wgpu_device()
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: descriptor.label.as_deref(),
                bind_group_layouts: &refs,
                immediate_size: 0,
            });

        let id = PipelineLayoutId(next_id(&self.internal.next_pipeline_layout_id));
        lock(&self.internal.pipeline_layouts, "pipeline_layouts")?.insert(
            id,
            WgpuPipelineLayoutEntry {
                wgpu_layout: Arc::new(wgpu_layout),
            },
        );
        Ok(id)
    }

    // -- Render Pipeline Operations ---

    fn create_render_pipeline(
        &self,
        descriptor: &RenderPipelineDescriptor,
    ) -> Result<RenderPipelineId, ResourceError> {
        log::debug!(
            "WgpuDevice: Creating render pipeline with label: {:?}",
            descriptor.label
        );

        // 1. Resolve the shader modules
        let (vs_module, fs_module) = {
            let modules = lock(&self.internal.shader_modules, "shader_modules")?;
            let resolve = |id: ShaderModuleId| {
                modules
                    .get(&id)
                    .map(|entry| Arc::clone(&entry.wgpu_module))
                    .ok_or_else(|| PipelineError::InvalidShaderModuleForPipeline {
                        id,
                        pipeline_label: descriptor.label.as_deref().map(String::from),
                    })
            };
            (
                resolve(descriptor.vertex.module)?,
                resolve(descriptor.fragment.module)?,
            )
        };

        // 2. Resolve the layout. `Auto` lets wgpu derive it from the shaders.
        let layout = match descriptor.layout {
            PipelineLayout::Auto => None,
            PipelineLayout::Explicit(id) => Some(
                lock(&self.internal.pipeline_layouts, "pipeline_layouts")?
                    .get(&id)
                    .map(|entry| Arc::clone(&entry.wgpu_layout))
                    .ok_or(PipelineError::InvalidPipelineLayout { id })?,
            ),
        };

        // 3. Convert vertex buffers layout
        let wgpu_vertex_attributes_storage: Vec<Vec<wgpu::VertexAttribute>> = descriptor
            .vertex
            .buffers
            .iter()
            .map(|vb_layout_desc| {
                vb_layout_desc
                    .attributes
                    .iter()
                    .map(|attr_desc| wgpu::VertexAttribute {
                        format: attr_desc.format.into_wgpu(),
                        offset: attr_desc.offset,
                        shader_location: attr_desc.shader_location,
                    })
                    .collect()
            })
            .collect();

        let wgpu_vertex_buffers_layouts: Vec<wgpu::VertexBufferLayout> = descriptor
            .vertex
            .buffers
            .iter()
            .zip(wgpu_vertex_attributes_storage.iter())
            .map(
                |(vb_layout_desc, attributes_for_this_layout)| wgpu::VertexBufferLayout {
                    array_stride: vb_layout_desc.array_stride,
                    step_mode: vb_layout_desc.step_mode.into_wgpu(),
                    attributes: attributes_for_this_layout,
                },
            )
            .collect();

        // 4. Convert fixed-function state
        let primitive_state = wgpu::PrimitiveState {
            topology: descriptor.primitive.topology.into_wgpu(),
            front_face: descriptor.primitive.front_face.into_wgpu(),
            cull_mode: descriptor.primitive.cull_mode.into_wgpu(),
            ..Default::default()
        };

        let depth_stencil_state = descriptor
            .depth_stencil
            .map(|ds| wgpu::DepthStencilState {
                format: ds.format.into_wgpu(),
                depth_write_enabled: Some(ds.depth_write_enabled),
                depth_compare: Some(ds.depth_compare.into_wgpu()),
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            });

        let color_target_states: Vec<Option<wgpu::ColorTargetState>> = descriptor
            .fragment
            .targets
            .iter()
            .map(|cts| {
                Some(wgpu::ColorTargetState {
                    format: cts.format.into_wgpu(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })
            })
            .collect();

        let multisample_state = wgpu::MultisampleState {
            count: descriptor.multisample.count.into_wgpu(),
            mask: !0,
            alpha_to_coverage_enabled: false,
        };

        // 5. Create the render pipeline
        let wgpu_pipeline_descriptor = wgpu::RenderPipelineDescriptor {
            label: descriptor.label.as_deref(),
            layout: layout.as_deref(),
            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(descriptor.vertex.entry_point.as_ref()),
                buffers: &wgpu_vertex_buffers_layouts,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(descriptor.fragment.entry_point.as_ref()),
                targets: &color_target_states,
                compilation_options: Default::default(),
            }),
            primitive: primitive_state,
            depth_stencil: depth_stencil_state,
            multisample: multisample_state,
            multiview_mask: None,
            cache: None,
        };
        let pipeline = self
            .wgpu_device()
            .create_render_pipeline(&wgpu_pipeline_descriptor);

        let id = RenderPipelineId(next_id(&self.internal.next_pipeline_id));
        lock(&self.internal.pipelines, "pipelines")?.insert(
            id,
            WgpuRenderPipelineEntry {
                wgpu_pipeline: Arc::new(pipeline),
            },
        );

        log::info!(
            "WgpuDevice: Successfully created render pipeline '{}' with ID: {:?}",
            descriptor.label.as_deref().unwrap_or_default(),
            id
        );
        Ok(id)
    }

    // --- Buffer Operations ---

    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferId, ResourceError> {
        let wgpu_buffer = self.wgpu_device().create_buffer(&wgpu::BufferDescriptor {
            label: descriptor.label.as_deref(),
            size: descriptor.size,
            usage: descriptor.usage.into_wgpu(),
            mapped_at_creation: descriptor.mapped_at_creation,
        });

        let id = BufferId(next_id(&self.internal.next_buffer_id));
        lock(&self.internal.buffers, "buffers")?.insert(
            id,
            WgpuBufferEntry {
                wgpu_buffer: Arc::new(wgpu_buffer),
                size: descriptor.size,
            },
        );

        log::info!(
            "WgpuDevice: Created buffer '{}' with ID: {:?}, size: {} bytes",
            descriptor.label.as_deref().unwrap_or_default(),
            id,
            descriptor.size
        );
        Ok(id)
    }

    fn write_buffer(&self, id: BufferId, offset: u64, data: &[u8]) -> Result<(), ResourceError> {
        let buffers = lock(&self.internal.buffers, "buffers")?;
        let entry = buffers.get(&id).ok_or(ResourceError::NotFound)?;

        let end_offset = offset.saturating_add(data.len() as u64);
        if end_offset > entry.size {
            return Err(ResourceError::OutOfBounds {
                required: end_offset,
                capacity: entry.size,
            });
        }

        self.internal
            .context
            .queue
            .write_buffer(&entry.wgpu_buffer, offset, data);

        log::debug!(
            "WgpuDevice: Wrote {} bytes to buffer ID: {:?} at offset {}",
            data.len(),
            id,
            offset
        );
        Ok(())
    }

    // --- Bind Group Operations ---

    fn create_bind_group(
        &self,
        descriptor: &BindGroupDescriptor,
    ) -> Result<BindGroupId, ResourceError> {
        let layout = lock(&self.internal.bind_group_layouts, "bind_group_layouts")?
            .get(&descriptor.layout)
            .map(|entry| Arc::clone(&entry.wgpu_layout))
            .ok_or(PipelineError::InvalidBindGroupLayout {
                id: descriptor.layout,
            })?;

        let bound_buffers: Vec<Arc<wgpu::Buffer>> = {
            let buffers = lock(&self.internal.buffers, "buffers")?;
            descriptor
                .entries
                .iter()
                .map(|entry| {
                    buffers
                        .get(&entry.buffer)
                        .map(|b| Arc::clone(&b.wgpu_buffer))
                        .ok_or(ResourceError::NotFound)
                })
                .collect::<Result<_, _>>()?
        };

        let entries: Vec<wgpu::BindGroupEntry> = descriptor
            .entries
            .iter()
            .zip(bound_buffers.iter())
            .map(|(entry, buffer)| wgpu::BindGroupEntry {
                binding: entry.binding,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: entry.offset,
                    size: entry.size,
                }),
            })
            .collect();

        let bind_group = self
            .wgpu_device()
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: descriptor.label,
                layout: &layout,
                entries: &entries,
            });

        let id = BindGroupId(next_id(&self.internal.next_bind_group_id));
        lock(&self.internal.bind_groups, "bind_groups")?.insert(
            id,
            WgpuBindGroupEntry {
                wgpu_bind_group: Arc::new(bind_group),
            },
        );

        log::debug!(
            "WgpuDevice: Created bind group '{}' with ID: {:?}",
            descriptor.label.unwrap_or_default(),
            id
        );
        Ok(id)
    }
}
