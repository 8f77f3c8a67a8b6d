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

//! # Atelier Assets
//!
//! The editor's asset layer: the [`registry::AssetRegistry`] owns the
//! loaded asset collection, and the [`tracker::DependencyTracker`] it
//! embeds maintains the dependency graph that drives transitive reload
//! propagation when an upstream asset changes.

#![warn(missing_docs)]

pub mod registry;
pub mod tracker;

pub use registry::{AssetRecord, AssetRegistry};
pub use tracker::DependencyTracker;
