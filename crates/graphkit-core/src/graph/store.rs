//! Arena-backed directed graph
//!
//! Vertices live in slots addressed by [`VertexId`]; edges store the
//! destination handle. Container order (the order algorithms iterate in) is
//! insertion order and is kept separately from the slots, so freed slots can
//! be reused without reordering anything.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::events::{GraphEvent, GraphObserver};
use crate::graph::types::{AllPairs, Content, Edge, ShortestPaths, Vertex, VertexId};

/// Directed, weighted graph keyed by unique vertex content
pub struct Graph<T> {
    slots: Vec<Option<Vertex<T>>>,
    free: Vec<usize>,
    order: Vec<VertexId>,
    index: HashMap<T, VertexId>,
    edge_count: usize,
    /// Bumped on every structural mutation; stored results remember the
    /// generation they were computed at.
    generation: u64,
    pub(crate) single_source: Option<ShortestPaths>,
    pub(crate) all_pairs: Option<AllPairs>,
    observers: Vec<Box<dyn GraphObserver<T>>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Graph {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
            generation: 0,
            single_source: None,
            all_pairs: None,
            observers: Vec::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.order.len())
            .field("edges", &self.edge_count)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T: Content> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for mutation events
    pub fn subscribe(&mut self, observer: Box<dyn GraphObserver<T>>) {
        self.observers.push(observer);
    }

    pub fn num_vertices(&self) -> usize {
        self.order.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Mutation counter; changes whenever a vertex or edge is added or removed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn find_vertex(&self, content: &T) -> Option<VertexId> {
        self.index.get(content).copied()
    }

    pub fn contains(&self, content: &T) -> bool {
        self.index.contains_key(content)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn content(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::content)
    }

    /// Vertex handles in container order
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.order
    }

    /// Vertices in container order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.order.iter().filter_map(|&id| self.vertex(id))
    }

    /// Outgoing edges of a vertex, looked up by content
    pub fn edges(&self, content: &T) -> Result<&[Edge]> {
        let id = self.require(content)?;
        Ok(self.out_edges(id))
    }

    /// Add a vertex. Fails with `AlreadyExists` (and changes nothing) if a
    /// vertex with equal content is present.
    pub fn add_vertex(&mut self, content: T) -> Result<VertexId> {
        if self.index.contains_key(&content) {
            return Err(GraphError::already_exists(&content));
        }

        let vertex = Vertex::new(content.clone());
        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(vertex);
                VertexId(slot)
            }
            None => {
                self.slots.push(Some(vertex));
                VertexId(self.slots.len() - 1)
            }
        };
        self.order.push(id);
        self.index.insert(content.clone(), id);
        self.touch();

        debug!(vertex = ?content, id = %id, "add_vertex");
        self.emit(GraphEvent::VertexAdded { vertex: content });
        Ok(id)
    }

    /// Remove a vertex together with every edge that leaves or enters it
    pub fn remove_vertex(&mut self, content: &T) -> Result<()> {
        let target = self.require(content)?;

        let mut removed: Vec<(VertexId, VertexId)> = Vec::new();
        for &id in &self.order {
            let Some(vertex) = self.slots[id.0].as_mut() else {
                continue;
            };
            if id == target {
                removed.extend(vertex.edges.iter().map(|e| (id, e.dest)));
                continue;
            }
            let before = vertex.edges.len();
            vertex.edges.retain(|e| e.dest != target);
            for _ in vertex.edges.len()..before {
                removed.push((id, target));
            }
        }

        let events: Vec<GraphEvent<T>> = removed
            .iter()
            .filter_map(|&(from, to)| {
                Some(GraphEvent::EdgeRemoved {
                    source: self.content(from)?.clone(),
                    dest: self.content(to)?.clone(),
                })
            })
            .collect();

        self.edge_count -= removed.len();
        self.slots[target.0] = None;
        self.free.push(target.0);
        self.order.retain(|&id| id != target);
        self.index.remove(content);
        self.touch();

        debug!(vertex = ?content, edges_removed = removed.len(), "remove_vertex");
        for event in events {
            self.emit(event);
        }
        self.emit(GraphEvent::VertexRemoved {
            vertex: content.clone(),
        });
        Ok(())
    }

    /// Append an edge `source -> dest`. Parallel edges are kept as distinct
    /// edges. The weight must be a finite number.
    pub fn add_edge(&mut self, source: &T, dest: &T, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            bail_invalid!("edge weight", weight);
        }
        let from = self.require(source)?;
        let to = self.require(dest)?;

        if let Some(vertex) = self.slots[from.0].as_mut() {
            vertex.edges.push(Edge { dest: to, weight });
        }
        self.edge_count += 1;
        self.touch();

        debug!(source = ?source, dest = ?dest, weight, "add_edge");
        self.emit(GraphEvent::EdgeAdded {
            source: source.clone(),
            dest: dest.clone(),
            weight,
        });
        Ok(())
    }

    /// Remove the first edge `source -> dest` in edge-list order
    pub fn remove_edge(&mut self, source: &T, dest: &T) -> Result<()> {
        let from = self.require(source)?;
        let to = self.require(dest)?;

        let removed = match self.slots[from.0].as_mut() {
            Some(vertex) => match vertex.edges.iter().position(|e| e.dest == to) {
                Some(pos) => {
                    vertex.edges.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        };
        if !removed {
            return Err(GraphError::edge_not_found(source, dest));
        }

        self.edge_count -= 1;
        self.touch();

        debug!(source = ?source, dest = ?dest, "remove_edge");
        self.emit(GraphEvent::EdgeRemoved {
            source: source.clone(),
            dest: dest.clone(),
        });
        Ok(())
    }

    /// Handle for `content`, or `VertexNotFound`
    pub(crate) fn require(&self, content: &T) -> Result<VertexId> {
        self.find_vertex(content)
            .ok_or_else(|| GraphError::vertex_not_found(content))
    }

    /// Number of arena slots; scratch tables are sized to this
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn out_edges(&self, id: VertexId) -> &[Edge] {
        match self.vertex(id) {
            Some(vertex) => &vertex.edges,
            None => &[],
        }
    }

    /// Contents for a list of handles, in the same order
    pub(crate) fn contents(&self, ids: &[VertexId]) -> Vec<T> {
        ids.iter()
            .filter_map(|&id| self.content(id).cloned())
            .collect()
    }

    fn touch(&mut self) {
        self.generation += 1;
    }

    fn emit(&mut self, event: GraphEvent<T>) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}
