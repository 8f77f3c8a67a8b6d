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

use std::fmt;

/// A caller-contract violation on the dependency graph.
///
/// These indicate a programming bug in the owning service, not a
/// recoverable runtime condition: the guarded call paths in the tracker
/// check the relevant preconditions first and never hit these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// `add_vertex` was called with a value already present.
    DuplicateVertex,
    /// An edge operation referenced a vertex that is not in the graph.
    MissingVertex,
    /// `add_edge` was called for an edge that already exists.
    DuplicateEdge,
    /// `remove_edge` was called for an edge that does not exist.
    MissingEdge,
    /// `add_edge` was called with origin equal to destination.
    SelfLoop,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateVertex => {
                write!(f, "Vertex is already present in the graph")
            }
            GraphError::MissingVertex => {
                write!(f, "Vertex is not present in the graph")
            }
            GraphError::DuplicateEdge => {
                write!(f, "Edge is already present in the graph")
            }
            GraphError::MissingEdge => {
                write!(f, "Edge is not present in the graph")
            }
            GraphError::SelfLoop => {
                write!(f, "Origin and destination of an edge must differ")
            }
        }
    }
}

impl std::error::Error for GraphError {}
