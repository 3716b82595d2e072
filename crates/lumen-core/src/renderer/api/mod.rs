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

//! Backend-agnostic rendering API.
//!
//! - **[`pipeline`]**: static pipeline state, layouts and the pipeline builder.
//! - **[`shader`]**, **[`buffer`]**, **[`bind_group`]**: GPU resource handles and their descriptors.
//! - **[`enums`]**, **[`flags`]**: formats, sample counts and usage flags shared by all of them.

pub mod bind_group;
pub mod buffer;
pub mod enums;
pub mod flags;
pub mod pipeline;
pub mod shader;

pub use self::bind_group::*;
pub use self::buffer::*;
pub use self::enums::*;
pub use self::flags::*;
pub use self::pipeline::*;
pub use self::shader::*;
