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

//! Staged construction of [`RenderPipelineDescriptor`]s.

use super::descriptor::*;
use super::layout::PipelineLayout;
use super::state::*;
use crate::renderer::api::enums::{SampleCount, TextureFormat};
use crate::renderer::api::shader::ShaderModuleId;
use crate::renderer::error::{ConfigurationError, ConfigurationWarning, ResourceError};
use crate::renderer::settings::RenderSettings;
use crate::renderer::traits::GraphicsDevice;
use std::borrow::Cow;

#[derive(Debug, Clone)]
struct StageConfig<'a> {
    module: Option<ShaderModuleId>,
    entry_point: Cow<'a, str>,
}

impl<'a> StageConfig<'a> {
    fn empty(entry_point: &'static str) -> Self {
        Self {
            module: None,
            entry_point: Cow::Borrowed(entry_point),
        }
    }
}

/// Accumulates a render pipeline configuration through chained setters.
///
/// Every setter replaces its field wholesale and hands the builder back, so a
/// configuration reads as one expression:
///
/// ```
/// use lumen_core::renderer::*;
///
/// let descriptor = RenderPipelineBuilder::new()
///     .set_shared_shader_module(ShaderModuleId(0))
///     .set_color_target_formats([TextureFormat::Bgra8UnormSrgb])
///     .finalize()
///     .unwrap();
///
/// assert_eq!(descriptor.layout, PipelineLayout::Auto);
/// assert_eq!(descriptor.vertex.entry_point, "vs_main");
/// assert_eq!(descriptor.fragment.entry_point, "fs_main");
/// ```
///
/// Nothing is validated until [`finalize`](Self::finalize).
#[derive(Debug, Clone)]
pub struct RenderPipelineBuilder<'a> {
    label: Option<Cow<'a, str>>,
    layout: Option<PipelineLayout>,
    vertex: StageConfig<'a>,
    fragment: StageConfig<'a>,
    vertex_buffers: Vec<VertexBufferLayout<'a>>,
    color_targets: Vec<ColorTargetState>,
    primitive: PrimitiveState,
    depth_stencil: Option<DepthStencilState>,
    multisample: MultisampleState,
}

impl Default for RenderPipelineBuilder<'_> {
    fn default() -> Self {
        Self {
            label: None,
            layout: Some(PipelineLayout::Auto),
            vertex: StageConfig::empty(DEFAULT_VERTEX_ENTRY_POINT),
            fragment: StageConfig::empty(DEFAULT_FRAGMENT_ENTRY_POINT),
            vertex_buffers: Vec::new(),
            color_targets: Vec::new(),
            primitive: PrimitiveState::default(),
            depth_stencil: None,
            multisample: MultisampleState::default(),
        }
    }
}

impl<'a> RenderPipelineBuilder<'a> {
    /// Creates an empty builder with an automatic layout and the default
    /// entry points, primitive state and sample count. Shader modules and
    /// color targets are unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder preset from render settings: label, entry points,
    /// color target, depth format and sample count.
    pub fn from_settings(settings: &'a RenderSettings) -> Self {
        let depth_stencil = settings.depth_format.map(DepthStencilState::new);
        Self {
            label: settings.label.as_deref().map(Cow::Borrowed),
            vertex: StageConfig {
                module: None,
                entry_point: Cow::Borrowed(&settings.vertex_entry_point),
            },
            fragment: StageConfig {
                module: None,
                entry_point: Cow::Borrowed(&settings.fragment_entry_point),
            },
            ..Self::default()
        }
        .set_color_target_formats([settings.color_format])
        .set_depth_stencil(depth_stencil)
        .set_multisample_count(settings.sample_count)
    }

    /// Sets the debug label of the pipeline.
    pub fn with_label(mut self, label: impl Into<Cow<'a, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Replaces the pipeline layout. `None` clears it, which makes
    /// [`finalize`](Self::finalize) fail with `MissingLayout`.
    pub fn set_layout(mut self, layout: impl Into<Option<PipelineLayout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Uses one module for both stages, keeping the configured entry points.
    pub fn set_shared_shader_module(mut self, module: ShaderModuleId) -> Self {
        self.vertex.module = Some(module);
        self.fragment.module = Some(module);
        self
    }

    /// Sets the vertex module with the default `vs_main` entry point.
    pub fn set_vertex_shader(self, module: ShaderModuleId) -> Self {
        self.set_vertex_shader_with_entry(module, DEFAULT_VERTEX_ENTRY_POINT)
    }

    /// Sets the vertex module and its entry point.
    pub fn set_vertex_shader_with_entry(
        mut self,
        module: ShaderModuleId,
        entry_point: impl Into<Cow<'a, str>>,
    ) -> Self {
        self.vertex = StageConfig {
            module: Some(module),
            entry_point: entry_point.into(),
        };
        self
    }

    /// Sets the fragment module with the default `fs_main` entry point.
    pub fn set_fragment_shader(self, module: ShaderModuleId) -> Self {
        self.set_fragment_shader_with_entry(module, DEFAULT_FRAGMENT_ENTRY_POINT)
    }

    /// Sets the fragment module and its entry point.
    pub fn set_fragment_shader_with_entry(
        mut self,
        module: ShaderModuleId,
        entry_point: impl Into<Cow<'a, str>>,
    ) -> Self {
        self.fragment = StageConfig {
            module: Some(module),
            entry_point: entry_point.into(),
        };
        self
    }

    /// Replaces the ordered list of vertex buffer layouts.
    pub fn set_vertex_buffers(
        mut self,
        layouts: impl IntoIterator<Item = VertexBufferLayout<'a>>,
    ) -> Self {
        self.vertex_buffers = layouts.into_iter().collect();
        self
    }

    /// Replaces the color targets, one target per format.
    pub fn set_color_target_formats(
        mut self,
        formats: impl IntoIterator<Item = TextureFormat>,
    ) -> Self {
        self.color_targets = formats.into_iter().map(ColorTargetState::from).collect();
        self
    }

    /// Sets or clears the depth state. `None` removes it entirely.
    pub fn set_depth_stencil(mut self, depth_stencil: Option<DepthStencilState>) -> Self {
        self.depth_stencil = depth_stencil;
        self
    }

    /// Replaces the whole primitive state.
    ///
    /// Fields not named by the caller fall back to their defaults, never to
    /// the previously configured values:
    ///
    /// ```
    /// use lumen_core::renderer::*;
    ///
    /// let builder = RenderPipelineBuilder::new()
    ///     .set_primitive_state(PrimitiveState { cull_mode: CullMode::Back, ..Default::default() })
    ///     .set_primitive_state(PrimitiveState::with_topology(PrimitiveTopology::LineList));
    /// assert_eq!(builder.primitive_state().cull_mode, CullMode::None);
    /// ```
    pub fn set_primitive_state(mut self, primitive: PrimitiveState) -> Self {
        self.primitive = primitive;
        self
    }

    /// Replaces the sample count.
    pub fn set_multisample_count(mut self, count: SampleCount) -> Self {
        self.multisample = MultisampleState { count };
        self
    }

    /// The primitive state currently configured.
    pub fn primitive_state(&self) -> PrimitiveState {
        self.primitive
    }

    /// The depth state currently configured.
    pub fn depth_stencil(&self) -> Option<DepthStencilState> {
        self.depth_stencil
    }

    /// Lists the advisories [`finalize`](Self::finalize) would log.
    pub fn warnings(&self) -> Vec<ConfigurationWarning> {
        let mut warnings = Vec::new();
        if self.vertex_buffers.is_empty() {
            warnings.push(ConfigurationWarning::EmptyVertexBuffers);
        }
        warnings
    }

    /// Validates the configuration and produces an immutable descriptor.
    ///
    /// Required fields are checked in a fixed order (layout, vertex module,
    /// fragment module, color targets) and the first missing one is
    /// returned. Warnings are logged and never fail the call.
    pub fn finalize(&self) -> Result<RenderPipelineDescriptor<'a>, ConfigurationError> {
        let layout = self.layout.ok_or(ConfigurationError::MissingLayout)?;
        let vertex_module = self
            .vertex
            .module
            .ok_or(ConfigurationError::MissingVertexModule)?;
        let fragment_module = self
            .fragment
            .module
            .ok_or(ConfigurationError::MissingFragmentModule)?;
        if self.color_targets.is_empty() {
            return Err(ConfigurationError::MissingColorTargets);
        }

        for warning in self.warnings() {
            log::warn!(
                "Pipeline '{}': {warning}",
                self.label.as_deref().unwrap_or("unnamed")
            );
        }

        Ok(RenderPipelineDescriptor {
            label: self.label.clone(),
            layout,
            vertex: VertexStage {
                module: vertex_module,
                entry_point: self.vertex.entry_point.clone(),
                buffers: self.vertex_buffers.clone(),
            },
            fragment: FragmentStage {
                module: fragment_module,
                entry_point: self.fragment.entry_point.clone(),
                targets: self.color_targets.clone(),
            },
            primitive: self.primitive,
            depth_stencil: self.depth_stencil,
            multisample: self.multisample,
        })
    }

    /// Finalizes the configuration and asks `device` to create the pipeline.
    ///
    /// The device is not called when validation fails.
    pub fn build<D>(&self, device: &D) -> Result<RenderPipelineId, ResourceError>
    where
        D: GraphicsDevice + ?Sized,
    {
        let descriptor = self.finalize()?;
        let id = device.create_render_pipeline(&descriptor)?;
        log::debug!(
            "Built render pipeline '{}' with ID: {:?}",
            descriptor.label.as_deref().unwrap_or("unnamed"),
            id
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::api::pipeline::{
        CompareFunction, CullMode, FrontFace, PipelineLayoutId, PrimitiveTopology,
        VertexAttribute, VertexFormat,
    };

    const MODULE: ShaderModuleId = ShaderModuleId(7);

    fn complete() -> RenderPipelineBuilder<'static> {
        RenderPipelineBuilder::new()
            .set_shared_shader_module(MODULE)
            .set_color_target_formats([TextureFormat::Bgra8UnormSrgb])
    }

    #[test]
    fn layout_defaults_to_auto() {
        let descriptor = complete().finalize().unwrap();
        assert_eq!(descriptor.layout, PipelineLayout::Auto);
    }

    #[test]
    fn cleared_layout_is_reported_first() {
        assert_eq!(
            RenderPipelineBuilder::new().set_layout(None).finalize(),
            Err(ConfigurationError::MissingLayout)
        );
        assert_eq!(
            complete().set_layout(None).finalize(),
            Err(ConfigurationError::MissingLayout)
        );
        assert!(complete()
            .set_layout(None)
            .set_layout(PipelineLayout::Auto)
            .finalize()
            .is_ok());
    }

    #[test]
    fn missing_fields_are_reported_in_priority_order() {
        let builder = RenderPipelineBuilder::new();
        assert_eq!(
            builder.finalize(),
            Err(ConfigurationError::MissingVertexModule)
        );

        let builder = builder.set_vertex_shader(MODULE);
        assert_eq!(
            builder.finalize(),
            Err(ConfigurationError::MissingFragmentModule)
        );

        let builder = builder.set_fragment_shader(MODULE);
        assert_eq!(
            builder.finalize(),
            Err(ConfigurationError::MissingColorTargets)
        );

        let builder = builder.set_color_target_formats([TextureFormat::Rgba8Unorm]);
        assert!(builder.finalize().is_ok());
    }

    #[test]
    fn missing_fragment_module_is_named() {
        let err = RenderPipelineBuilder::new()
            .set_vertex_shader(MODULE)
            .set_color_target_formats([TextureFormat::Bgra8UnormSrgb])
            .finalize()
            .unwrap_err();
        assert_eq!(err, ConfigurationError::MissingFragmentModule);
        assert_eq!(err.field(), "fragment shader");
    }

    #[test]
    fn missing_color_targets_after_explicit_empty_list() {
        let err = complete()
            .set_color_target_formats(std::iter::empty())
            .finalize()
            .unwrap_err();
        assert_eq!(err, ConfigurationError::MissingColorTargets);
    }

    #[test]
    fn empty_vertex_buffers_only_warn() {
        let builder = complete();
        assert_eq!(
            builder.warnings(),
            vec![ConfigurationWarning::EmptyVertexBuffers]
        );
        let descriptor = builder.finalize().expect("warnings must not fail finalize");
        assert!(descriptor.vertex.buffers.is_empty());
    }

    #[test]
    fn vertex_buffers_silence_the_warning_and_keep_order() {
        let first = VertexBufferLayout::new(
            8,
            vec![VertexAttribute {
                shader_location: 0,
                offset: 0,
                format: VertexFormat::Float32x2,
            }],
        );
        let second = VertexBufferLayout::new(
            16,
            vec![VertexAttribute {
                shader_location: 1,
                offset: 0,
                format: VertexFormat::Float32x4,
            }],
        );
        let builder = complete().set_vertex_buffers([first.clone(), second.clone()]);
        assert!(builder.warnings().is_empty());

        let descriptor = builder.finalize().unwrap();
        assert_eq!(descriptor.vertex.buffers, vec![first, second]);
    }

    #[test]
    fn shared_module_keeps_configured_entry_points() {
        let descriptor = RenderPipelineBuilder::new()
            .set_vertex_shader_with_entry(ShaderModuleId(1), "fullscreen")
            .set_fragment_shader_with_entry(ShaderModuleId(2), "trace")
            .set_shared_shader_module(MODULE)
            .set_color_target_formats([TextureFormat::Bgra8UnormSrgb])
            .finalize()
            .unwrap();

        assert_eq!(descriptor.vertex.module, MODULE);
        assert_eq!(descriptor.fragment.module, MODULE);
        assert_eq!(descriptor.vertex.entry_point, "fullscreen");
        assert_eq!(descriptor.fragment.entry_point, "trace");
    }

    #[test]
    fn set_vertex_shader_resets_entry_point() {
        let descriptor = complete()
            .set_vertex_shader_with_entry(MODULE, "custom")
            .set_vertex_shader(ShaderModuleId(3))
            .finalize()
            .unwrap();
        assert_eq!(descriptor.vertex.module, ShaderModuleId(3));
        assert_eq!(descriptor.vertex.entry_point, DEFAULT_VERTEX_ENTRY_POINT);
    }

    #[test]
    fn mixed_modules_are_allowed() {
        let descriptor = complete()
            .set_vertex_shader(ShaderModuleId(1))
            .set_fragment_shader(ShaderModuleId(2))
            .finalize()
            .unwrap();
        assert_eq!(descriptor.vertex.module, ShaderModuleId(1));
        assert_eq!(descriptor.fragment.module, ShaderModuleId(2));
    }

    #[test]
    fn explicit_layout_is_carried() {
        let descriptor = complete()
            .set_layout(PipelineLayoutId(4))
            .finalize()
            .unwrap();
        assert_eq!(
            descriptor.layout,
            PipelineLayout::Explicit(PipelineLayoutId(4))
        );
    }

    #[test]
    fn color_formats_are_wrapped_in_order() {
        let descriptor = complete()
            .set_color_target_formats([TextureFormat::Rgba16Float, TextureFormat::Rgba8Unorm])
            .finalize()
            .unwrap();
        assert_eq!(
            descriptor.fragment.targets,
            vec![
                ColorTargetState {
                    format: TextureFormat::Rgba16Float
                },
                ColorTargetState {
                    format: TextureFormat::Rgba8Unorm
                },
            ]
        );
    }

    #[test]
    fn depth_stencil_is_absent_by_default_and_clearable() {
        assert_eq!(complete().finalize().unwrap().depth_stencil, None);

        let with_depth = complete().set_depth_stencil(Some(DepthStencilState {
            format: TextureFormat::Depth32Float,
            depth_write_enabled: false,
            depth_compare: CompareFunction::Greater,
        }));
        let state = with_depth.finalize().unwrap().depth_stencil.unwrap();
        assert_eq!(state.format, TextureFormat::Depth32Float);
        assert!(!state.depth_write_enabled);
        assert_eq!(state.depth_compare, CompareFunction::Greater);

        let cleared = with_depth.set_depth_stencil(None);
        assert_eq!(cleared.depth_stencil(), None);
        assert_eq!(cleared.finalize().unwrap().depth_stencil, None);
    }

    #[test]
    fn primitive_state_is_replaced_wholesale() {
        let builder = complete().set_primitive_state(PrimitiveState {
            topology: PrimitiveTopology::TriangleStrip,
            cull_mode: CullMode::Back,
            front_face: FrontFace::Ccw,
        });
        let builder = builder.set_primitive_state(PrimitiveState {
            cull_mode: CullMode::Front,
            ..Default::default()
        });

        let primitive = builder.finalize().unwrap().primitive;
        assert_eq!(primitive.topology, PrimitiveTopology::TriangleList);
        assert_eq!(primitive.cull_mode, CullMode::Front);
        assert_eq!(primitive.front_face, FrontFace::Cw);
    }

    #[test]
    fn multisample_defaults_to_one_and_is_replaced() {
        assert_eq!(complete().finalize().unwrap().multisample.count.count(), 1);
        let descriptor = complete()
            .set_multisample_count(SampleCount::X4)
            .finalize()
            .unwrap();
        assert_eq!(descriptor.multisample.count, SampleCount::X4);
    }

    #[test]
    fn finalize_does_not_consume_the_builder() {
        let builder = complete().with_label("tracer");
        let first = builder.finalize().unwrap();
        let second = builder.finalize().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.label.as_deref(), Some("tracer"));
    }

    #[test]
    fn from_settings_presets_targets_and_entry_points() {
        let settings = RenderSettings {
            label: Some("preset".to_string()),
            color_format: TextureFormat::Rgba8UnormSrgb,
            depth_format: Some(TextureFormat::Depth24Plus),
            sample_count: SampleCount::X4,
            vertex_entry_point: "vs_fullscreen".to_string(),
            fragment_entry_point: "fs_trace".to_string(),
        };

        let descriptor = RenderPipelineBuilder::from_settings(&settings)
            .set_shared_shader_module(MODULE)
            .finalize()
            .unwrap();

        assert_eq!(descriptor.label.as_deref(), Some("preset"));
        assert_eq!(descriptor.vertex.entry_point, "vs_fullscreen");
        assert_eq!(descriptor.fragment.entry_point, "fs_trace");
        assert_eq!(
            descriptor.fragment.targets[0].format,
            TextureFormat::Rgba8UnormSrgb
        );
        assert_eq!(
            descriptor.depth_stencil,
            Some(DepthStencilState::new(TextureFormat::Depth24Plus))
        );
        assert_eq!(descriptor.multisample.count, SampleCount::X4);
    }
}
