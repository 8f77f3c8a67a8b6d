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

use super::kind::AssetKind;
use super::uuid::AssetUUID;
use serde::{Deserialize, Serialize};

/// Serializable metadata describing an asset and its references to others.
///
/// The `dependencies` list is the authoritative source the dependency
/// graph is derived from: the graph itself is never persisted, it is
/// rebuilt in memory from these fields whenever a project is (re)imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// The unique, stable identifier for this asset.
    pub uuid: AssetUUID,

    /// A human-readable name, used in diagnostics and the asset browser.
    pub name: String,

    /// The asset's category within the editor's type hierarchy.
    pub kind: AssetKind,

    /// The assets this asset's data depends on. For example, a material
    /// lists its shader program here, and a shader program lists the
    /// shaders bound to its stage slots.
    pub dependencies: Vec<AssetUUID>,
}

impl AssetMetadata {
    /// Creates metadata for an asset with no dependencies.
    pub fn new(uuid: AssetUUID, name: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            uuid,
            name: name.into(),
            kind,
            dependencies: Vec::new(),
        }
    }

    /// Builder-style helper to attach a dependency.
    pub fn with_dependency(mut self, dependency: AssetUUID) -> Self {
        self.dependencies.push(dependency);
        self
    }
}
