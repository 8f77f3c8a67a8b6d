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

//! Provides the primitive types for the editor's asset system.
//!
//! This module defines the "common language" for all asset-related
//! operations: stable identifiers, the per-asset load state machine,
//! diagnostic messages, and the serializable metadata record that carries
//! an asset's authoritative reference fields. It has no knowledge of how
//! assets are stored or reloaded; those concerns live in the registry
//! crate built on top of these primitives.

mod kind;
mod message;
mod metadata;
mod state;
mod uuid;

pub use kind::*;
pub use message::*;
pub use metadata::*;
pub use state::*;
pub use uuid::*;
