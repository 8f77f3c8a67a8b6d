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

//! Generic directed-graph primitives.
//!
//! The only structure here is the index-based [`AdjacencyList`], which the
//! asset layer uses to track which assets depend on which others. It is
//! deliberately self-contained: no dependency on asset types, no hashing
//! requirement on vertices beyond equality.

mod adjacency_list;
mod error;

pub use self::adjacency_list::{AdjacencyList, IncomingEdges, OutgoingEdges};
pub use self::error::GraphError;
