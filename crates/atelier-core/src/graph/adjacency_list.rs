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

use super::error::GraphError;

/// An index-based directed graph over an arbitrary vertex type.
///
/// Vertices are stored in a single ordered sequence, and each vertex
/// carries a list of outgoing edges stored as integer positions into that
/// same sequence, not as copies of vertex values or pointers. This keeps
/// edge storage compact and iteration cache-friendly, at the cost of O(V)
/// vertex removal (every edge list must be stripped and renumbered) and
/// O(V) lookup-by-value on every mutation.
///
/// Vertex identity is value equality: each distinct value may appear at
/// most once. The structure upholds two invariants across all operations:
/// no duplicate vertices, and no edge index that does not resolve to a
/// currently-present vertex.
///
/// Iterators returned by [`incoming_edges_of`](Self::incoming_edges_of)
/// and [`outgoing_edges_of`](Self::outgoing_edges_of) borrow the graph
/// immutably, so the borrow checker rules out mutation while an iterator
/// is being drained.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList<V> {
    entries: Vec<(V, Vec<usize>)>,
}

impl<V: PartialEq> AdjacencyList<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the position of `vertex` in the sequence, if present.
    fn position_of(&self, vertex: &V) -> Option<usize> {
        self.entries.iter().position(|(v, _)| v == vertex)
    }

    /// Adds a vertex with an empty outgoing-edge list.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] if the value is already
    /// present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError> {
        if self.has_vertex(&vertex) {
            return Err(GraphError::DuplicateVertex);
        }
        self.entries.push((vertex, Vec::new()));
        Ok(())
    }

    /// Adds the directed edge `origin -> destination`.
    ///
    /// The destination's position is resolved at call time, never cached,
    /// since positions shift when vertices are removed.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if either endpoint is absent,
    /// [`GraphError::SelfLoop`] if the endpoints are equal, and
    /// [`GraphError::DuplicateEdge`] if the edge already exists.
    pub fn add_edge(&mut self, origin: &V, destination: &V) -> Result<(), GraphError> {
        if origin == destination {
            return Err(GraphError::SelfLoop);
        }
        let origin_position = self.position_of(origin).ok_or(GraphError::MissingVertex)?;
        let destination_position = self
            .position_of(destination)
            .ok_or(GraphError::MissingVertex)?;
        let edges = &mut self.entries[origin_position].1;
        if edges.contains(&destination_position) {
            return Err(GraphError::DuplicateEdge);
        }
        edges.push(destination_position);
        Ok(())
    }

    /// Returns true iff `vertex` is present.
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.position_of(vertex).is_some()
    }

    /// Returns true iff the edge `origin -> destination` exists.
    ///
    /// An absent destination has no position, so its edges cannot exist
    /// and this returns false without special-casing; likewise for an
    /// absent origin.
    pub fn has_edge(&self, origin: &V, destination: &V) -> bool {
        let Some(origin_position) = self.position_of(origin) else {
            return false;
        };
        let Some(destination_position) = self.position_of(destination) else {
            return false;
        };
        self.entries[origin_position].1.contains(&destination_position)
    }

    /// Removes `vertex` and every edge that references it.
    ///
    /// The three steps must run in this order to keep all stored indices
    /// valid: strip references to the vertex's position from every edge
    /// list, erase the entry (compacting the sequence), then decrement
    /// every remaining index greater than the removed position.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if the value is absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), GraphError> {
        let position = self.position_of(vertex).ok_or(GraphError::MissingVertex)?;

        for (_, edges) in &mut self.entries {
            edges.retain(|&edge| edge != position);
        }

        self.entries.remove(position);

        for (_, edges) in &mut self.entries {
            for edge in edges.iter_mut() {
                if *edge > position {
                    *edge -= 1;
                }
            }
        }

        Ok(())
    }

    /// Removes the edge `origin -> destination`.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if either endpoint is absent
    /// and [`GraphError::MissingEdge`] if the edge does not exist.
    pub fn remove_edge(&mut self, origin: &V, destination: &V) -> Result<(), GraphError> {
        let origin_position = self.position_of(origin).ok_or(GraphError::MissingVertex)?;
        let destination_position = self
            .position_of(destination)
            .ok_or(GraphError::MissingVertex)?;
        let edges = &mut self.entries[origin_position].1;
        let index = edges
            .iter()
            .position(|&edge| edge == destination_position)
            .ok_or(GraphError::MissingEdge)?;
        edges.remove(index);
        Ok(())
    }

    /// Drops all vertices and edges unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true iff the graph holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all vertices in storage order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(v, _)| v)
    }

    /// Returns a lazy iterator over the vertices with an edge into
    /// `vertex` (its dependents), in ascending storage-position order.
    ///
    /// Querying an absent vertex yields the empty sequence: no edge list
    /// can reference a position that does not exist.
    pub fn incoming_edges_of<'a>(&'a self, vertex: &V) -> IncomingEdges<'a, V> {
        IncomingEdges {
            entries: &self.entries,
            target: self.position_of(vertex),
            cursor: 0,
        }
    }

    /// Returns a lazy iterator over the vertices `vertex` points at (its
    /// dependencies), in edge-list insertion order.
    ///
    /// As with [`incoming_edges_of`](Self::incoming_edges_of), an absent
    /// vertex yields the empty sequence.
    pub fn outgoing_edges_of<'a>(&'a self, vertex: &V) -> OutgoingEdges<'a, V> {
        let edges = match self.position_of(vertex) {
            Some(position) => self.entries[position].1.iter(),
            None => [].iter(),
        };
        OutgoingEdges {
            entries: &self.entries,
            edges,
        }
    }
}

/// Iterator over the vertices that point at a given vertex.
///
/// Single-pass and forward-only; each call to `incoming_edges_of`
/// constructs a fresh iterator over the graph's current state.
#[derive(Debug)]
pub struct IncomingEdges<'a, V> {
    entries: &'a [(V, Vec<usize>)],
    target: Option<usize>,
    cursor: usize,
}

impl<'a, V> Iterator for IncomingEdges<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.target?;
        while self.cursor < self.entries.len() {
            let (vertex, edges) = &self.entries[self.cursor];
            self.cursor += 1;
            if edges.contains(&target) {
                return Some(vertex);
            }
        }
        None
    }
}

/// Iterator over the vertices a given vertex points at.
#[derive(Debug)]
pub struct OutgoingEdges<'a, V> {
    entries: &'a [(V, Vec<usize>)],
    edges: std::slice::Iter<'a, usize>,
}

impl<'a, V> Iterator for OutgoingEdges<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|&position| &self.entries[position].0)
    }
}
