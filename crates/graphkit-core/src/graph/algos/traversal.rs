use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::algos::shared::{Frame, Marks};
use crate::graph::types::{Content, VertexId};
use crate::graph::Graph;

impl<T: Content> Graph<T> {
    /// Depth-first pre-order over the whole graph.
    ///
    /// Roots are taken in container order and neighbours in edge-list order,
    /// so the result is deterministic for a given insertion history. Every
    /// vertex appears exactly once.
    #[tracing::instrument(skip(self), fields(vertices = self.num_vertices()))]
    pub fn dfs(&self) -> Vec<T> {
        let mut marks = Marks::new(self.slot_count());
        let mut order = Vec::with_capacity(self.num_vertices());

        for &root in self.vertex_ids() {
            if marks.is_visited(root) {
                continue;
            }
            self.dfs_visit(root, &mut marks, &mut order);
        }

        self.contents(&order)
    }

    /// Iterative pre-order visit from `root`; same order as the recursive form
    fn dfs_visit(&self, root: VertexId, marks: &mut Marks, order: &mut Vec<VertexId>) {
        marks.visit(root);
        order.push(root);
        let mut stack = vec![Frame::new(root)];

        while let Some(frame) = stack.last_mut() {
            let edges = self.out_edges(frame.vertex);
            let Some(edge) = edges.get(frame.next_edge) else {
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            if marks.visit(edge.dest) {
                order.push(edge.dest);
                stack.push(Frame::new(edge.dest));
            }
        }
    }

    /// Breadth-first order from `source`.
    ///
    /// A vertex is marked when first discovered, so it is queued and emitted
    /// once even when several edges lead to it.
    #[tracing::instrument(skip(self))]
    pub fn bfs(&self, source: &T) -> Result<Vec<T>> {
        let start = self.require(source)?;
        let mut marks = Marks::new(self.slot_count());
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();
        marks.visit(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for edge in self.out_edges(current) {
                if marks.visit(edge.dest) {
                    queue.push_back(edge.dest);
                }
            }
        }

        tracing::debug!(visited = order.len(), "bfs");
        Ok(self.contents(&order))
    }

    /// Breadth-first search from `source` that finds the vertex discovering
    /// the most new children.
    ///
    /// A neighbour counts as a new child of the first dequeued vertex that
    /// reaches it. Returns the first vertex (in BFS order) with the strict
    /// maximum and its count, or `(source, 0)` when nothing new is reachable.
    #[tracing::instrument(skip(self))]
    pub fn max_new_children(&self, source: &T) -> Result<(T, usize)> {
        let start = self.require(source)?;
        let mut marks = Marks::new(self.slot_count());
        let mut queue = VecDeque::from([start]);
        marks.visit(start);

        let mut best = (start, 0usize);
        while let Some(current) = queue.pop_front() {
            let mut children = 0;
            for edge in self.out_edges(current) {
                if marks.visit(edge.dest) {
                    queue.push_back(edge.dest);
                    children += 1;
                }
            }
            if children > best.1 {
                best = (current, children);
            }
        }

        let content = self.content(best.0).cloned().unwrap_or_else(|| source.clone());
        Ok((content, best.1))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphError;
    use crate::graph::Graph;

    /// Graph used across the traversal tests (1 is the entry point):
    /// 1->2, 1->3, 2->4, 2->5, 3->6, 5->7, 6->5, 6->8, 8->7, 9 isolated
    fn sample() -> Graph<u32> {
        let mut graph = Graph::new();
        for v in 1..=9 {
            graph.add_vertex(v).unwrap();
        }
        for (a, b) in [
            (1, 2),
            (1, 3),
            (2, 4),
            (2, 5),
            (3, 6),
            (5, 7),
            (6, 5),
            (6, 8),
            (8, 7),
        ] {
            graph.add_edge(&a, &b, 1.0).unwrap();
        }
        graph
    }

    #[test]
    fn test_dfs_pre_order() {
        let graph = sample();
        assert_eq!(graph.dfs(), vec![1, 2, 4, 5, 7, 3, 6, 8, 9]);
    }

    #[test]
    fn test_dfs_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert!(graph.dfs().is_empty());
    }

    #[test]
    fn test_dfs_visits_each_vertex_once_with_cycles() {
        let mut graph = Graph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&"a", &"b", 1.0).unwrap();
        graph.add_edge(&"b", &"c", 1.0).unwrap();
        graph.add_edge(&"c", &"a", 1.0).unwrap();
        graph.add_edge(&"c", &"c", 1.0).unwrap();
        assert_eq!(graph.dfs(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bfs_order() {
        let graph = sample();
        assert_eq!(graph.bfs(&1).unwrap(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_bfs_from_middle_covers_reachable_only() {
        let graph = sample();
        assert_eq!(graph.bfs(&6).unwrap(), vec![6, 5, 8, 7]);
        assert_eq!(graph.bfs(&9).unwrap(), vec![9]);
    }

    #[test]
    fn test_bfs_diamond_emits_once() {
        let mut graph = Graph::new();
        for v in 1..=4 {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&1, &2, 1.0).unwrap();
        graph.add_edge(&1, &3, 1.0).unwrap();
        graph.add_edge(&2, &4, 1.0).unwrap();
        graph.add_edge(&3, &4, 1.0).unwrap();
        assert_eq!(graph.bfs(&1).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bfs_missing_source() {
        let graph = sample();
        assert!(matches!(
            graph.bfs(&42),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn test_max_new_children() {
        let graph = sample();
        // 1 and 2 both discover two vertices; 1 comes first
        assert_eq!(graph.max_new_children(&1).unwrap(), (1, 2));
        // from 6: 6 discovers {5, 8}, 5 discovers {7}
        assert_eq!(graph.max_new_children(&6).unwrap(), (6, 2));
    }

    #[test]
    fn test_max_new_children_counts_each_neighbour_once() {
        let mut graph = Graph::new();
        for v in 1..=5 {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&1, &2, 1.0).unwrap();
        graph.add_edge(&1, &3, 1.0).unwrap();
        // 2 and 3 share children: 3 must not count 4 again
        graph.add_edge(&2, &4, 1.0).unwrap();
        graph.add_edge(&3, &4, 1.0).unwrap();
        graph.add_edge(&3, &5, 1.0).unwrap();
        graph.add_edge(&3, &1, 1.0).unwrap();
        assert_eq!(graph.max_new_children(&1).unwrap(), (1, 2));
        assert_eq!(graph.max_new_children(&3).unwrap(), (3, 3));
    }

    #[test]
    fn test_max_new_children_isolated_source() {
        let graph = sample();
        assert_eq!(graph.max_new_children(&9).unwrap(), (9, 0));
        assert!(matches!(
            graph.max_new_children(&0),
            Err(GraphError::VertexNotFound { .. })
        ));
    }
}
