//! Scratch state shared by the traversal algorithms
//!
//! Every algorithm call builds its own tables sized to the graph's arena, so
//! no state survives between calls and the vertex records stay plain data.

use crate::graph::types::VertexId;

/// Visited and on-stack marks, indexed by arena slot
#[derive(Debug, Clone)]
pub struct Marks {
    visited: Vec<bool>,
    processing: Vec<bool>,
}

impl Marks {
    /// All vertices unvisited and off the stack
    pub fn new(slots: usize) -> Self {
        Marks {
            visited: vec![false; slots],
            processing: vec![false; slots],
        }
    }

    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited[id.index()]
    }

    /// Mark a vertex visited. Returns false if it already was.
    pub fn visit(&mut self, id: VertexId) -> bool {
        !std::mem::replace(&mut self.visited[id.index()], true)
    }

    pub fn is_processing(&self, id: VertexId) -> bool {
        self.processing[id.index()]
    }

    /// Vertex entered the DFS stack
    pub fn enter(&mut self, id: VertexId) {
        self.visited[id.index()] = true;
        self.processing[id.index()] = true;
    }

    /// Vertex left the DFS stack; it stays visited
    pub fn leave(&mut self, id: VertexId) {
        self.processing[id.index()] = false;
    }
}

/// One level of an explicit DFS stack: the vertex and the next edge to follow
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub vertex: VertexId,
    pub next_edge: usize,
}

impl Frame {
    pub fn new(vertex: VertexId) -> Self {
        Frame {
            vertex,
            next_edge: 0,
        }
    }
}
