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

use crate::asset::AssetUUID;

/// What happened to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetLifecycleEventKind {
    /// The asset was registered and loaded for the first time.
    Imported,
    /// The asset's derived data was refreshed successfully.
    Reloaded,
    /// A reload completed with errors; see the asset's message list.
    Errored,
    /// The asset was deleted from the collection.
    Removed,
}

/// A notification that an asset changed state, published by the registry.
///
/// A tagged union plus one dispatch point replaces the polymorphic
/// observer hierarchy such systems often grow: subscribers match on `kind`
/// and ignore what they don't care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLifecycleEvent {
    /// The kind of state change.
    pub kind: AssetLifecycleEventKind,
    /// The asset the change applies to.
    pub id: AssetUUID,
}
