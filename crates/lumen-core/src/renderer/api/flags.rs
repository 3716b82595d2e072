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

//! Bit flag sets for shader visibility and buffer usage.

use super::enums::ShaderStage;

/// Flags representing which shader stages can access a resource binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderStageFlags {
    bits: u32,
}

impl ShaderStageFlags {
    /// No shader stages.
    pub const NONE: Self = Self { bits: 0 };
    /// Vertex shader stage.
    pub const VERTEX: Self = Self { bits: 1 << 0 };
    /// Fragment shader stage.
    pub const FRAGMENT: Self = Self { bits: 1 << 1 };
    /// All graphics stages (vertex + fragment).
    pub const VERTEX_FRAGMENT: Self = Self {
        bits: Self::VERTEX.bits | Self::FRAGMENT.bits,
    };

    /// Creates flags from a single shader stage.
    pub const fn from_stage(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => Self::VERTEX,
            ShaderStage::Fragment => Self::FRAGMENT,
        }
    }

    /// Returns the raw bits. They match the WebGPU `GPUShaderStage` values.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Combines two sets of flags.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Checks if these flags contain a specific stage.
    pub const fn contains(&self, stage: ShaderStage) -> bool {
        let stage_bits = Self::from_stage(stage).bits;
        (self.bits & stage_bits) == stage_bits
    }
}

impl std::ops::BitOr for ShaderStageFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// A set of flags describing the allowed usages of a GPU buffer.
///
/// The bit values match the WebGPU `GPUBufferUsage` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferUsage {
    bits: u32,
}

impl BufferUsage {
    /// The buffer can be mapped for reading on the CPU.
    pub const MAP_READ: Self = Self { bits: 1 << 0 };
    /// The buffer can be mapped for writing on the CPU.
    pub const MAP_WRITE: Self = Self { bits: 1 << 1 };
    /// The buffer can be used as the source of a copy operation.
    pub const COPY_SRC: Self = Self { bits: 1 << 2 };
    /// The buffer can be used as the destination of a copy operation.
    pub const COPY_DST: Self = Self { bits: 1 << 3 };
    /// The buffer can be bound as an index buffer.
    pub const INDEX: Self = Self { bits: 1 << 4 };
    /// The buffer can be bound as a vertex buffer.
    pub const VERTEX: Self = Self { bits: 1 << 5 };
    /// The buffer can be bound as a uniform buffer.
    pub const UNIFORM: Self = Self { bits: 1 << 6 };
    /// The buffer can be bound as a storage buffer.
    pub const STORAGE: Self = Self { bits: 1 << 7 };

    /// Returns the raw bits.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns `true` if every flag in `other` is also set in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }
}

impl std::ops::BitOr for BufferUsage {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_stage_flags_combine() {
        let flags = ShaderStageFlags::VERTEX | ShaderStageFlags::FRAGMENT;
        assert_eq!(flags, ShaderStageFlags::VERTEX_FRAGMENT);
        assert!(flags.contains(ShaderStage::Vertex));
        assert!(!ShaderStageFlags::FRAGMENT.contains(ShaderStage::Vertex));
        assert!(!ShaderStageFlags::NONE.contains(ShaderStage::Fragment));
    }

    #[test]
    fn buffer_usage_contains() {
        let usage = BufferUsage::STORAGE | BufferUsage::COPY_DST;
        assert!(usage.contains(BufferUsage::STORAGE));
        assert!(usage.contains(BufferUsage::COPY_DST));
        assert!(!usage.contains(BufferUsage::UNIFORM));
        assert_eq!(usage.bits(), 0x88);
    }
}
