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

use anyhow::anyhow;
use anyhow::Result;

/// Holds the core WGPU state objects required for rendering.
///
/// The context is headless: no surface is created, so pipelines are built
/// against an explicit color format instead of a swapchain's.
#[derive(Debug)]
pub struct WgpuGraphicsContext {
    /// The selected physical adapter.
    pub adapter: wgpu::Adapter,
    /// The logical device resources are created on.
    pub device: wgpu::Device,
    /// The queue buffer writes are submitted to.
    pub queue: wgpu::Queue,

    /// Name reported by the adapter.
    pub adapter_name: String,
    /// Backend API of the adapter.
    pub adapter_backend: wgpu::Backend,
    /// Kind of adapter (discrete, integrated, software...).
    pub adapter_device_type: wgpu::DeviceType,
}

impl WgpuGraphicsContext {
    /// Asynchronously requests a high-performance adapter and a logical
    /// device with no surface.
    ///
    /// ## Returns
    /// * `Result<Self>` - The initialized context, or an error when no adapter
    ///   or device is available.
    pub async fn new_headless() -> Result<Self> {
        log::info!("Initializing headless WGPU Graphics Context...");

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::new_without_display_handle());

        // --- 1. Select Adapter ---
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("No suitable graphics adapter found: {}", e))?;

        let adapter_info = adapter.get_info();
        log::info!(
            "Using graphics adapter: \"{}\" (Backend: {:?})",
            adapter_info.name,
            adapter_info.backend
        );

        // --- 2. Create Logical Device and Command Queue from Adapter ---
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Lumen Logical Device"),
                ..Default::default()
            })
            .await
            .map_err(|e| anyhow!("Failed to create logical device: {}", e))?;
        log::info!("Logical device and command queue created.");
        log::debug!("Device limits: {:?}", device.limits());

        Ok(WgpuGraphicsContext {
            adapter,
            device,
            queue,
            adapter_name: adapter_info.name,
            adapter_backend: adapter_info.backend,
            adapter_device_type: adapter_info.device_type,
        })
    }
}
