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

// Lumen Sandbox
// Builds the sphere tracing pipeline on a headless device and uploads a scene.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lumen_core::math::{LinearRgba, Vec3};
use lumen_core::renderer::*;
use lumen_core::scene::{
    SceneBuffers, SceneDescription, SceneObject, MATERIAL_DIFFUSE, MATERIAL_METAL,
};
use lumen_infra::WgpuDevice;

const TRACER_SHADER: &str = include_str!("../shaders/tracer.wgsl");

fn asset_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
}

fn load_settings() -> Result<RenderSettings> {
    let path = asset_path("settings.ron");
    if !path.exists() {
        log::info!("No settings file at {}, using defaults", path.display());
        return Ok(RenderSettings::default());
    }
    RenderSettings::load(&path).with_context(|| format!("loading {}", path.display()))
}

fn default_scene() -> SceneDescription {
    SceneDescription {
        objects: vec![
            SceneObject::sphere(
                Vec3::new(0.0, 0.0, -6.0),
                1.0,
                MATERIAL_DIFFUSE,
                LinearRgba::rgb(0.7, 0.3, 0.3),
                0.0,
            ),
            SceneObject::sphere(
                Vec3::new(2.2, 0.0, -6.0),
                1.0,
                MATERIAL_METAL,
                LinearRgba::rgb(1.0, 0.6, 0.2),
                0.03,
            ),
            SceneObject::sphere(
                Vec3::new(0.0, -101.0, -6.0),
                100.0,
                MATERIAL_DIFFUSE,
                LinearRgba::rgb(0.8, 0.8, 0.0),
                0.0,
            ),
        ],
    }
}

fn load_scene() -> Result<SceneDescription> {
    let path = asset_path("scene.ron");
    if !path.exists() {
        log::info!("No scene file at {}, using the built-in scene", path.display());
        return Ok(default_scene());
    }
    SceneDescription::load(&path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .init();

    let settings = load_settings()?;
    let scene = load_scene()?;

    let device = pollster::block_on(WgpuDevice::headless())?;
    log::info!(
        "Running on \"{}\" ({:?})",
        device.context().adapter_name,
        device.context().adapter_backend
    );

    let shader = device.create_shader_module(&ShaderModuleDescriptor {
        label: Some("Tracer Shader"),
        source: ShaderSourceData::Wgsl(TRACER_SHADER.into()),
    })?;

    let scene_buffers = SceneBuffers::upload(&device, &scene.objects)?;

    let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Tracer Pipeline Layout".into()),
        bind_group_layouts: &[scene_buffers.layout],
    })?;

    // The vertex stage emits a full-screen triangle, so no vertex buffers are bound.
    let pipeline = RenderPipelineBuilder::from_settings(&settings)
        .set_layout(layout)
        .set_shared_shader_module(shader)
        .build(&device)?;

    log::info!(
        "Tracer ready: pipeline {:?}, {} objects in bind group {:?}",
        pipeline,
        scene.objects.len(),
        scene_buffers.bind_group
    );
    Ok(())
}
