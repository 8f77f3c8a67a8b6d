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

//! The asset registry: the single owner of the loaded asset collection.
//!
//! The registry holds one record per asset, the embedded
//! [`DependencyTracker`], and the lifecycle event bus. Everything here
//! runs synchronously on the thread driving the editor: each public
//! method corresponds to one discrete user or file-system event (asset
//! edited, reimported, deleted), and reload propagation completes inline
//! before the method returns.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use atelier_core::asset::{AssetMessage, AssetMetadata, AssetUUID, LoadState, MessageSeverity};
use atelier_core::event::{AssetLifecycleEvent, AssetLifecycleEventKind, EventBus};

use crate::tracker::DependencyTracker;

/// The registry's per-asset bookkeeping: the authoritative metadata plus
/// the derived load state, diagnostics, and a reload generation counter.
#[derive(Debug)]
pub struct AssetRecord {
    metadata: AssetMetadata,
    state: LoadState,
    messages: Vec<AssetMessage>,
    reload_generation: u64,
}

impl AssetRecord {
    fn new(metadata: AssetMetadata) -> Self {
        Self {
            metadata,
            state: LoadState::Unloaded,
            messages: Vec::new(),
            reload_generation: 0,
        }
    }

    /// The asset's authoritative metadata.
    pub fn metadata(&self) -> &AssetMetadata {
        &self.metadata
    }

    /// The asset's current load state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Diagnostics from the most recent reload, surfaced to the UI.
    pub fn messages(&self) -> &[AssetMessage] {
        &self.messages
    }

    /// How many times this asset has been (re)loaded.
    pub fn reload_generation(&self) -> u64 {
        self.reload_generation
    }

    /// Round-trips the record through its serialized form.
    ///
    /// The editor has no per-asset file formats in memory to re-parse
    /// here; the serialize-then-deserialize cycle is the reload step that
    /// refreshes the record from its authoritative representation.
    fn refresh_derived_data(&mut self) -> Result<()> {
        let source = serde_json::to_value(&self.metadata)
            .context("failed to serialize asset metadata")?;
        self.metadata = serde_json::from_value(source)
            .context("failed to re-deserialize asset metadata")?;
        Ok(())
    }
}

/// Owns the asset records, the dependency tracker, and the event bus.
///
/// Construct one registry per loaded project; there is no ambient or
/// global instance. The dependency graph lives exactly as long as the
/// registry that owns it.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    records: HashMap<AssetUUID, AssetRecord>,
    tracker: DependencyTracker,
    events: EventBus<AssetLifecycleEvent>,
}

impl AssetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            tracker: DependencyTracker::new(),
            events: EventBus::new(),
        }
    }

    /// Registers a new asset and performs its initial load.
    ///
    /// Dependency edges are registered for every referenced asset that is
    /// already imported; references to assets imported later are picked up
    /// by [`rebuild`](Self::rebuild). Missing references surface as
    /// error-tier messages on the record, not as a failure here.
    ///
    /// # Errors
    /// Fails if an asset with the same UUID is already imported.
    pub fn import(&mut self, metadata: AssetMetadata) -> Result<()> {
        let id = metadata.uuid;
        if self.records.contains_key(&id) {
            bail!("asset '{}' ({id:?}) is already imported", metadata.name);
        }
        log::info!(
            "Importing {} '{}' ({id:?})",
            metadata.kind.label(),
            metadata.name
        );

        self.tracker
            .track(id)
            .context("failed to add the asset to the dependency graph")?;
        for dependency in metadata.dependencies.iter().copied() {
            self.tracker.try_register_dependency(id, dependency);
        }
        self.records.insert(id, AssetRecord::new(metadata));
        self.events.publish(AssetLifecycleEvent {
            kind: AssetLifecycleEventKind::Imported,
            id,
        });

        self.force_reload(id);
        Ok(())
    }

    /// Deletes an asset from the collection.
    ///
    /// The vertex removal cascades to every edge referencing the asset;
    /// dependents are not reloaded eagerly, they report the dangling
    /// reference on their next reload.
    ///
    /// # Errors
    /// Fails if the asset is unknown.
    pub fn remove(&mut self, id: AssetUUID) -> Result<()> {
        let Some(record) = self.records.remove(&id) else {
            bail!("cannot remove unknown asset {id:?}");
        };
        log::info!(
            "Removing {} '{}' ({id:?})",
            record.metadata.kind.label(),
            record.metadata.name
        );
        self.tracker
            .untrack(&id)
            .context("failed to remove the asset from the dependency graph")?;
        self.events.publish(AssetLifecycleEvent {
            kind: AssetLifecycleEventKind::Removed,
            id,
        });
        Ok(())
    }

    /// Editing flow: sets a reference field on `dependent` to point at
    /// `dependency`, mirrors the edge into the tracker, and reloads the
    /// edited asset (propagating to its own dependents).
    ///
    /// # Errors
    /// Fails if `dependent` is unknown or equals `dependency`. The
    /// `dependency` itself may be unknown: the reference is recorded, the
    /// edge is skipped, and the reload reports the missing target.
    pub fn set_dependency(&mut self, dependent: AssetUUID, dependency: AssetUUID) -> Result<()> {
        if dependent == dependency {
            bail!("asset {dependent:?} cannot depend on itself");
        }
        let Some(record) = self.records.get_mut(&dependent) else {
            bail!("cannot edit unknown asset {dependent:?}");
        };
        if !record.metadata.dependencies.contains(&dependency) {
            record.metadata.dependencies.push(dependency);
        }
        self.tracker.try_register_dependency(dependent, dependency);
        self.force_reload(dependent);
        Ok(())
    }

    /// Editing flow: clears a reference field on `dependent`, removes the
    /// edge, and reloads the edited asset.
    ///
    /// # Errors
    /// Fails if `dependent` is unknown.
    pub fn clear_dependency(&mut self, dependent: AssetUUID, dependency: AssetUUID) -> Result<()> {
        let Some(record) = self.records.get_mut(&dependent) else {
            bail!("cannot edit unknown asset {dependent:?}");
        };
        record.metadata.dependencies.retain(|d| *d != dependency);
        self.tracker.try_delete_dependency(dependent, dependency);
        self.force_reload(dependent);
        Ok(())
    }

    /// Forces the asset to redo its load step, then propagates to its
    /// dependents.
    ///
    /// The record enters `Loading`, its message list is rebuilt, and it
    /// lands in `Loaded` or, when a referenced dependency is missing or
    /// itself errored, in `Errored`. Either way the asset's data changed
    /// state, so dependents are forced to reload as well; each nested
    /// reload drains its own dependents before the next sibling starts.
    ///
    /// A reload request for an unknown asset is logged and dropped.
    pub fn force_reload(&mut self, id: AssetUUID) {
        let Some(record) = self.records.get(&id) else {
            log::warn!("Reload requested for unknown asset {id:?}");
            return;
        };
        log::debug!(
            "Reloading {} '{}' ({id:?})",
            record.metadata.kind.label(),
            record.metadata.name
        );
        let kind_label = record.metadata.kind.label();
        let dependencies = record.metadata.dependencies.clone();

        let mut messages = Vec::new();
        for dependency in &dependencies {
            match self.records.get(dependency) {
                None => messages.push(AssetMessage::error(format!(
                    "{kind_label} references non-existent asset {dependency:?}"
                ))),
                Some(target) if target.state == LoadState::Errored => {
                    messages.push(AssetMessage::error(format!(
                        "{kind_label} depends on errored {} '{}'",
                        target.metadata.kind.label(),
                        target.metadata.name
                    )));
                }
                Some(_) => {}
            }
        }

        if let Some(record) = self.records.get_mut(&id) {
            record.state = LoadState::Loading;
            if let Err(error) = record.refresh_derived_data() {
                messages.push(AssetMessage::error(format!("reload failed: {error:#}")));
            }
            let errored = messages
                .iter()
                .any(|message| message.severity() == MessageSeverity::Error);
            record.messages = messages;
            record.reload_generation += 1;
            record.state = if errored {
                LoadState::Errored
            } else {
                LoadState::Loaded
            };
            self.events.publish(AssetLifecycleEvent {
                kind: if errored {
                    AssetLifecycleEventKind::Errored
                } else {
                    AssetLifecycleEventKind::Reloaded
                },
                id,
            });
        }

        self.on_asset_reloaded(id);
    }

    /// Consumes a "reload finished" notification for `id` and forces every
    /// dependent to redo its own load step.
    ///
    /// The dependents are a snapshot taken before any reload is forced;
    /// each forced reload re-enters this method for its own dependents, so
    /// the wavefront drains depth-first. Recursion bottoms out because the
    /// dependency graph is acyclic.
    pub fn on_asset_reloaded(&mut self, id: AssetUUID) {
        let dependents = self.tracker.dependents_of(&id);
        if dependents.is_empty() {
            return;
        }
        log::debug!(
            "Asset {id:?} reloaded; forcing {} dependent(s)",
            dependents.len()
        );
        for dependent in dependents {
            self.force_reload(dependent);
        }
    }

    /// Rebuilds the dependency graph from every asset's current reference
    /// fields, discarding prior graph state. Used after a full re-import,
    /// where incrementally maintained edges cannot be trusted.
    ///
    /// References to assets that no longer exist are attached to the
    /// owning record as error-tier diagnostics.
    pub fn rebuild(&mut self) {
        log::info!(
            "Rebuilding dependency graph from {} asset(s)",
            self.records.len()
        );
        let assets: Vec<(AssetUUID, Vec<AssetUUID>)> = self
            .records
            .values()
            .map(|record| (record.metadata.uuid, record.metadata.dependencies.clone()))
            .collect();

        for (owner, dependency) in self.tracker.rebuild(&assets) {
            if let Some(record) = self.records.get_mut(&owner) {
                record.messages.push(AssetMessage::error(format!(
                    "{} '{}' references non-existent asset {dependency:?}",
                    record.metadata.kind.label(),
                    record.metadata.name
                )));
            }
        }
    }

    /// Looks up an asset's record.
    pub fn get(&self, id: &AssetUUID) -> Option<&AssetRecord> {
        self.records.get(id)
    }

    /// Returns true iff the asset is imported.
    pub fn contains(&self, id: &AssetUUID) -> bool {
        self.records.contains_key(id)
    }

    /// Returns the number of imported assets.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true iff no assets are imported.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The embedded dependency tracker, for queries.
    pub fn tracker(&self) -> &DependencyTracker {
        &self.tracker
    }

    /// The lifecycle event bus; subscribers drain its receiver.
    pub fn events(&self) -> &EventBus<AssetLifecycleEvent> {
        &self.events
    }
}
