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

//! The dependency-tracking service owned by the asset registry.

use atelier_core::asset::AssetUUID;
use atelier_core::graph::{AdjacencyList, GraphError};

/// Maintains the dependency graph over asset identifiers.
///
/// One instance is owned by the registry for the lifetime of the loaded
/// asset collection. An edge `dependent -> dependency` means the
/// dependent's derived data must be refreshed whenever the dependency's
/// data changes; propagation walks the *incoming* edges of the asset that
/// just reloaded.
///
/// The tracker performs no cycle detection. The editor's asset-kind
/// hierarchy (scene -> material -> shader program -> shader) cannot
/// express a cycle through the supported editing flows, and an acyclic
/// graph is what bounds the recursive propagation in the registry.
#[derive(Debug, Default)]
pub struct DependencyTracker {
    graph: AdjacencyList<AssetUUID>,
}

impl DependencyTracker {
    /// Creates a tracker with an empty graph.
    pub fn new() -> Self {
        Self {
            graph: AdjacencyList::new(),
        }
    }

    /// Registers `id` as a vertex. Called when an asset is imported.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] if the asset is already
    /// tracked; the registry checks its own records first, so hitting this
    /// indicates the two fell out of sync.
    pub fn track(&mut self, id: AssetUUID) -> Result<(), GraphError> {
        log::trace!("Tracking asset {id:?}");
        self.graph.add_vertex(id)
    }

    /// Removes the vertex for `id` entirely. Called when an asset is
    /// deleted; edges referencing it are cleaned up by the removal.
    pub fn untrack(&mut self, id: &AssetUUID) -> Result<(), GraphError> {
        log::trace!("Untracking asset {id:?}");
        self.graph.remove_vertex(id)
    }

    /// Returns true iff `id` is a known vertex.
    pub fn is_tracked(&self, id: &AssetUUID) -> bool {
        self.graph.has_vertex(id)
    }

    /// Returns true iff the edge `dependent -> dependency` exists.
    pub fn has_dependency(&self, dependent: &AssetUUID, dependency: &AssetUUID) -> bool {
        self.graph.has_edge(dependent, dependency)
    }

    /// Returns the number of tracked assets.
    pub fn tracked_count(&self) -> usize {
        self.graph.len()
    }

    /// Adds the edge `dependent -> dependency` if it can be added.
    ///
    /// A no-op unless both endpoints are known vertices, they differ, and
    /// the edge is absent. The silence is intentional idempotence, not an
    /// error path: editing flows call this speculatively, before the
    /// referenced asset may have been imported.
    pub fn try_register_dependency(&mut self, dependent: AssetUUID, dependency: AssetUUID) {
        if dependent == dependency
            || !self.graph.has_vertex(&dependent)
            || !self.graph.has_vertex(&dependency)
            || self.graph.has_edge(&dependent, &dependency)
        {
            log::trace!("Skipping dependency registration {dependent:?} -> {dependency:?}");
            return;
        }
        log::debug!("Registering dependency {dependent:?} -> {dependency:?}");
        if let Err(error) = self.graph.add_edge(&dependent, &dependency) {
            // Unreachable past the guards above.
            log::error!("Failed to add dependency edge: {error}");
        }
    }

    /// Removes the edge `dependent -> dependency` if it exists; otherwise
    /// a no-op, symmetric to
    /// [`try_register_dependency`](Self::try_register_dependency).
    pub fn try_delete_dependency(&mut self, dependent: AssetUUID, dependency: AssetUUID) {
        if !self.graph.has_edge(&dependent, &dependency) {
            log::trace!("Skipping dependency deletion {dependent:?} -> {dependency:?}");
            return;
        }
        log::debug!("Deleting dependency {dependent:?} -> {dependency:?}");
        if let Err(error) = self.graph.remove_edge(&dependent, &dependency) {
            log::error!("Failed to remove dependency edge: {error}");
        }
    }

    /// Discards the graph and re-derives it from the given per-asset
    /// reference lists. Used after a full re-import, where incrementally
    /// maintained edges cannot be trusted.
    ///
    /// Each edge is added only if its target is a known asset. Missing
    /// targets are returned as `(owner, missing_dependency)` pairs so the
    /// registry can attach an asset-level diagnostic; they are never a
    /// graph error.
    pub fn rebuild(
        &mut self,
        assets: &[(AssetUUID, Vec<AssetUUID>)],
    ) -> Vec<(AssetUUID, AssetUUID)> {
        log::debug!("Rebuilding dependency graph from {} asset(s)", assets.len());
        self.graph.clear();

        for (id, _) in assets {
            if let Err(error) = self.graph.add_vertex(*id) {
                log::error!("Failed to re-add asset {id:?} during rebuild: {error}");
            }
        }

        let mut missing = Vec::new();
        for (id, dependencies) in assets {
            for dependency in dependencies {
                if !self.graph.has_vertex(dependency) {
                    missing.push((*id, *dependency));
                    continue;
                }
                if dependency == id || self.graph.has_edge(id, dependency) {
                    continue;
                }
                if let Err(error) = self.graph.add_edge(id, dependency) {
                    log::error!("Failed to re-add dependency edge during rebuild: {error}");
                }
            }
        }
        missing
    }

    /// Returns the assets that depend on `id`, as a fully-materialized
    /// snapshot in ascending graph-storage order.
    ///
    /// Propagation forces each returned dependent to reload, and those
    /// reloads recursively query their own dependents; materializing up
    /// front keeps the walk independent of the graph borrow. Reloading
    /// never removes vertices, so the snapshot cannot go stale mid-drain.
    pub fn dependents_of(&self, id: &AssetUUID) -> Vec<AssetUUID> {
        self.graph.incoming_edges_of(id).copied().collect()
    }

    /// Returns the assets `id` depends on, in edge-insertion order.
    pub fn dependencies_of(&self, id: &AssetUUID) -> Vec<AssetUUID> {
        self.graph.outgoing_edges_of(id).copied().collect()
    }
}
