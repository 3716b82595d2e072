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

//! Enums describing fixed-function pipeline state.

/// The memory format of a single vertex attribute's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    /// Four 8-bit unsigned integer components normalized to `[0.0, 1.0]`.
    Unorm8x4,
    /// Two 16-bit float components.
    Float16x2,
    /// Four 16-bit float components.
    Float16x4,
    /// One 32-bit float component.
    Float32,
    /// Two 32-bit float components.
    Float32x2,
    /// Three 32-bit float components.
    Float32x3,
    /// Four 32-bit float components.
    Float32x4,
    /// One 32-bit unsigned integer component.
    Uint32,
    /// One 32-bit signed integer component.
    Sint32,
}

impl VertexFormat {
    /// Returns the size in bytes of one attribute of this format.
    pub const fn size(self) -> u64 {
        match self {
            VertexFormat::Unorm8x4 => 4,
            VertexFormat::Float16x2 => 4,
            VertexFormat::Float16x4 => 8,
            VertexFormat::Float32 => 4,
            VertexFormat::Float32x2 => 8,
            VertexFormat::Float32x3 => 12,
            VertexFormat::Float32x4 => 16,
            VertexFormat::Uint32 => 4,
            VertexFormat::Sint32 => 4,
        }
    }
}

/// Specifies how often a vertex buffer is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexStepMode {
    /// The buffer is advanced once per vertex.
    #[default]
    Vertex,
    /// The buffer is advanced once per instance.
    Instance,
}

/// The way vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Each vertex is a point.
    PointList,
    /// Every two vertices form a line.
    LineList,
    /// Consecutive vertices form a connected line strip.
    LineStrip,
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
    /// Consecutive vertices form a connected triangle strip.
    TriangleStrip,
}

/// Which faces are discarded during rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    /// No culling.
    #[default]
    None,
    /// Front faces are discarded.
    Front,
    /// Back faces are discarded.
    Back,
}

/// The vertex winding order that defines a front face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrontFace {
    /// Counter-clockwise triangles face the viewer.
    Ccw,
    /// Clockwise triangles face the viewer.
    #[default]
    Cw,
}

/// A comparison function used in depth testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompareFunction {
    /// The test never passes.
    Never,
    /// Passes if the new value is less than the existing one.
    #[default]
    Less,
    /// Passes if the values are equal.
    Equal,
    /// Passes if the new value is less than or equal to the existing one.
    LessEqual,
    /// Passes if the new value is greater than the existing one.
    Greater,
    /// Passes if the values differ.
    NotEqual,
    /// Passes if the new value is greater than or equal to the existing one.
    GreaterEqual,
    /// The test always passes.
    Always,
}
