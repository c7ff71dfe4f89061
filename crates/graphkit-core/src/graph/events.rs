//! Graph mutation events
//!
//! A renderer (or anything else that mirrors the graph) subscribes with a
//! [`GraphObserver`] and receives one [`GraphEvent`] per structural change.
//! Labels, colours and layout are the subscriber's business.

use std::fmt;

/// A structural change to a graph
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent<T> {
    VertexAdded { vertex: T },
    /// Emitted after the `EdgeRemoved` events of the vertex's incident edges
    VertexRemoved { vertex: T },
    EdgeAdded { source: T, dest: T, weight: f64 },
    EdgeRemoved { source: T, dest: T },
}

impl<T> GraphEvent<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            GraphEvent::VertexAdded { .. } => "vertex_added",
            GraphEvent::VertexRemoved { .. } => "vertex_removed",
            GraphEvent::EdgeAdded { .. } => "edge_added",
            GraphEvent::EdgeRemoved { .. } => "edge_removed",
        }
    }
}

/// Receives graph mutation events in the order they happen
pub trait GraphObserver<T> {
    fn on_event(&mut self, event: &GraphEvent<T>);
}

/// Observer that forwards every event to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<T: fmt::Debug> GraphObserver<T> for TracingObserver {
    fn on_event(&mut self, event: &GraphEvent<T>) {
        match event {
            GraphEvent::VertexAdded { vertex } | GraphEvent::VertexRemoved { vertex } => {
                tracing::debug!(kind = event.kind(), vertex = ?vertex, "graph_event");
            }
            GraphEvent::EdgeAdded {
                source,
                dest,
                weight,
            } => {
                tracing::debug!(
                    kind = event.kind(),
                    source = ?source,
                    dest = ?dest,
                    weight,
                    "graph_event"
                );
            }
            GraphEvent::EdgeRemoved { source, dest } => {
                tracing::debug!(kind = event.kind(), source = ?source, dest = ?dest, "graph_event");
            }
        }
    }
}
