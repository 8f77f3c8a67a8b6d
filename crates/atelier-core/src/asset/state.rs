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

/// The lifecycle state of an asset's in-memory derived data.
///
/// Assets move `Unloaded -> Loading -> Loaded` on import, and re-enter
/// `Loading` whenever they are edited directly or an upstream dependency
/// finishes reloading. `Errored` is reached from `Loading` when a
/// referenced dependency is missing or itself errored; there is no
/// terminal state, assets oscillate between `Loaded` and `Errored` for the
/// life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Registered but never loaded.
    Unloaded,
    /// A reload is in progress.
    Loading,
    /// Derived data is up to date.
    Loaded,
    /// The last reload failed; see the asset's message list.
    Errored,
}
