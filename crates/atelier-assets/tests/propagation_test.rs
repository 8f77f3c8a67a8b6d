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

//! End-to-end reload-propagation behavior across the registry and the
//! dependency tracker.

use atelier_assets::AssetRegistry;
use atelier_core::asset::{AssetKind, AssetMetadata, AssetUUID, LoadState};
use atelier_core::event::{AssetLifecycleEvent, AssetLifecycleEventKind};

fn import(registry: &mut AssetRegistry, kind: AssetKind, name: &str) -> AssetUUID {
    let id = AssetUUID::new();
    registry
        .import(AssetMetadata::new(id, name, kind))
        .unwrap();
    id
}

fn drain_events(registry: &AssetRegistry) -> Vec<AssetLifecycleEvent> {
    registry.events().receiver().try_iter().collect()
}

/// Material -> program -> shader: editing the shader must reload the
/// program, then the material, each exactly once.
#[test]
fn chain_propagates_depth_first() {
    let mut registry = AssetRegistry::new();
    let shader = import(&mut registry, AssetKind::Shader, "lit.frag");
    let program = import(&mut registry, AssetKind::ShaderProgram, "lit.prog");
    let material = import(&mut registry, AssetKind::Material, "rock.mat");
    registry.set_dependency(program, shader).unwrap();
    registry.set_dependency(material, program).unwrap();

    let generation_before = |id: &AssetUUID, registry: &AssetRegistry| {
        registry.get(id).unwrap().reload_generation()
    };
    let shader_gen = generation_before(&shader, &registry);
    let program_gen = generation_before(&program, &registry);
    let material_gen = generation_before(&material, &registry);
    drain_events(&registry);

    // The user edits the shader source.
    registry.force_reload(shader);

    let reloads: Vec<AssetUUID> = drain_events(&registry)
        .into_iter()
        .filter(|event| event.kind == AssetLifecycleEventKind::Reloaded)
        .map(|event| event.id)
        .collect();
    assert_eq!(reloads, vec![shader, program, material]);

    assert_eq!(
        registry.get(&shader).unwrap().reload_generation(),
        shader_gen + 1
    );
    assert_eq!(
        registry.get(&program).unwrap().reload_generation(),
        program_gen + 1
    );
    assert_eq!(
        registry.get(&material).unwrap().reload_generation(),
        material_gen + 1
    );
}

/// Reloading an asset with no dependents touches nothing else.
#[test]
fn leaf_reload_does_not_propagate() {
    let mut registry = AssetRegistry::new();
    let shader = import(&mut registry, AssetKind::Shader, "lit.frag");
    let material = import(&mut registry, AssetKind::Material, "rock.mat");
    drain_events(&registry);

    registry.force_reload(material);

    let events = drain_events(&registry);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, material);
    assert_eq!(registry.get(&shader).unwrap().reload_generation(), 1);
}

/// A diamond (scene -> two materials -> one program) reloads the apex
/// once per path. The tracker does not deduplicate the wavefront; the
/// graph being a DAG is what bounds the recursion.
#[test]
fn diamond_reloads_apex_once_per_path() {
    let mut registry = AssetRegistry::new();
    let program = import(&mut registry, AssetKind::ShaderProgram, "lit.prog");
    let rock = import(&mut registry, AssetKind::Material, "rock.mat");
    let moss = import(&mut registry, AssetKind::Material, "moss.mat");
    let scene = import(&mut registry, AssetKind::Scene, "cave.scene");
    registry.set_dependency(rock, program).unwrap();
    registry.set_dependency(moss, program).unwrap();
    registry.set_dependency(scene, rock).unwrap();
    registry.set_dependency(scene, moss).unwrap();

    let scene_gen = registry.get(&scene).unwrap().reload_generation();
    drain_events(&registry);

    registry.force_reload(program);

    let reloads: Vec<AssetUUID> = drain_events(&registry)
        .into_iter()
        .map(|event| event.id)
        .collect();
    // Depth-first: rock's subtree drains before moss starts.
    assert_eq!(reloads, vec![program, rock, scene, moss, scene]);
    assert_eq!(
        registry.get(&scene).unwrap().reload_generation(),
        scene_gen + 2
    );
}

/// Errored state propagates downstream: once the shader is deleted, the
/// program and the material both land in `Errored` on the next wave.
#[test]
fn error_state_flows_to_dependents() {
    let mut registry = AssetRegistry::new();
    let shader = import(&mut registry, AssetKind::Shader, "lit.frag");
    let program = import(&mut registry, AssetKind::ShaderProgram, "lit.prog");
    let material = import(&mut registry, AssetKind::Material, "rock.mat");
    registry.set_dependency(program, shader).unwrap();
    registry.set_dependency(material, program).unwrap();

    registry.remove(shader).unwrap();
    drain_events(&registry);

    // The program still lists the shader in its reference fields; its
    // next reload reports the dangling reference and the material follows.
    registry.force_reload(program);

    assert_eq!(registry.get(&program).unwrap().state(), LoadState::Errored);
    assert_eq!(registry.get(&material).unwrap().state(), LoadState::Errored);

    let errors: Vec<AssetUUID> = drain_events(&registry)
        .into_iter()
        .filter(|event| event.kind == AssetLifecycleEventKind::Errored)
        .map(|event| event.id)
        .collect();
    assert_eq!(errors, vec![program, material]);
}

/// Re-importing the shader does not resurrect edges by itself; a rebuild
/// re-derives them from the reference fields and the next wave recovers
/// both dependents.
#[test]
fn rebuild_then_reload_recovers_the_chain() {
    let mut registry = AssetRegistry::new();
    let shader = import(&mut registry, AssetKind::Shader, "lit.frag");
    let program = import(&mut registry, AssetKind::ShaderProgram, "lit.prog");
    let material = import(&mut registry, AssetKind::Material, "rock.mat");
    registry.set_dependency(program, shader).unwrap();
    registry.set_dependency(material, program).unwrap();

    registry.remove(shader).unwrap();
    registry.force_reload(program);
    assert_eq!(registry.get(&program).unwrap().state(), LoadState::Errored);

    registry
        .import(AssetMetadata::new(shader, "lit.frag", AssetKind::Shader))
        .unwrap();
    assert!(!registry.tracker().has_dependency(&program, &shader));

    registry.rebuild();
    assert!(registry.tracker().has_dependency(&program, &shader));

    registry.force_reload(shader);
    assert_eq!(registry.get(&program).unwrap().state(), LoadState::Loaded);
    assert_eq!(registry.get(&material).unwrap().state(), LoadState::Loaded);
}
