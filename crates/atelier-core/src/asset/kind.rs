// Copyright 2025 the atelier authors
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

use serde::{Deserialize, Serialize};

/// The category of an asset managed by the editor.
///
/// Dependencies only ever point "down" this hierarchy (a scene references
/// materials, a material references a shader program, a program references
/// shaders), which is what keeps the dependency graph acyclic without an
/// explicit cycle check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// A single shader stage (vertex, fragment, ...).
    Shader,
    /// A linked shader program referencing its stage shaders.
    ShaderProgram,
    /// A material referencing the shader program it is rendered with.
    Material,
    /// A scene referencing the materials used by its objects.
    Scene,
}

impl AssetKind {
    /// Returns a lowercase human-readable label, used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Shader => "shader",
            AssetKind::ShaderProgram => "shader program",
            AssetKind::Material => "material",
            AssetKind::Scene => "scene",
        }
    }
}
