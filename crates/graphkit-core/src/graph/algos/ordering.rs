use std::collections::VecDeque;

use crate::graph::algos::shared::{Frame, Marks};
use crate::graph::types::Content;
use crate::graph::Graph;

impl<T: Content> Graph<T> {
    /// Topological order by indegree reduction (Kahn).
    ///
    /// Zero-indegree vertices are seeded in container order. Returns an empty
    /// sequence when the graph has a cycle, detected by emitting fewer
    /// vertices than the graph holds.
    #[tracing::instrument(skip(self), fields(vertices = self.num_vertices()))]
    pub fn topological_sort(&self) -> Vec<T> {
        let mut indegree = vec![0usize; self.slot_count()];
        for &id in self.vertex_ids() {
            for edge in self.out_edges(id) {
                indegree[edge.dest.index()] += 1;
            }
        }

        let mut queue: VecDeque<_> = self
            .vertex_ids()
            .iter()
            .copied()
            .filter(|id| indegree[id.index()] == 0)
            .collect();

        let mut order = Vec::with_capacity(self.num_vertices());
        while let Some(current) = queue.pop_front() {
            order.push(current);
            for edge in self.out_edges(current) {
                let slot = &mut indegree[edge.dest.index()];
                *slot -= 1;
                if *slot == 0 {
                    queue.push_back(edge.dest);
                }
            }
        }

        if order.len() < self.num_vertices() {
            tracing::debug!(
                emitted = order.len(),
                vertices = self.num_vertices(),
                "cycle prevents topological order"
            );
            return Vec::new();
        }

        self.contents(&order)
    }

    /// True iff the graph has no directed cycle.
    ///
    /// Depth-first search where a vertex is `processing` while it is on the
    /// stack; an edge into a processing vertex is a back edge.
    #[tracing::instrument(skip(self), fields(vertices = self.num_vertices()))]
    pub fn is_dag(&self) -> bool {
        let mut marks = Marks::new(self.slot_count());

        for &root in self.vertex_ids() {
            if marks.is_visited(root) {
                continue;
            }
            marks.enter(root);
            let mut stack = vec![Frame::new(root)];

            while let Some(frame) = stack.last_mut() {
                let edges = self.out_edges(frame.vertex);
                let Some(edge) = edges.get(frame.next_edge) else {
                    marks.leave(frame.vertex);
                    stack.pop();
                    continue;
                };
                frame.next_edge += 1;

                if marks.is_processing(edge.dest) {
                    return false;
                }
                if !marks.is_visited(edge.dest) {
                    marks.enter(edge.dest);
                    stack.push(Frame::new(edge.dest));
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    fn build(
        vertices: &[&'static str],
        edges: &[(&'static str, &'static str)],
    ) -> Graph<&'static str> {
        let mut graph = Graph::new();
        for v in vertices {
            graph.add_vertex(*v).unwrap();
        }
        for (a, b) in edges {
            graph.add_edge(a, b, 1.0).unwrap();
        }
        graph
    }

    fn respects_edges(graph: &Graph<&'static str>, order: &[&'static str]) -> bool {
        let pos = |v: &str| order.iter().position(|o| *o == v);
        graph.vertices().all(|vertex| {
            vertex.edges().iter().all(|edge| {
                let dest = graph.content(edge.dest).unwrap();
                pos(vertex.content()) < pos(dest)
            })
        })
    }

    #[test]
    fn test_topological_sort_dag() {
        let graph = build(
            &["shirt", "tie", "jacket", "belt", "pants", "shoes", "socks"],
            &[
                ("shirt", "tie"),
                ("tie", "jacket"),
                ("shirt", "belt"),
                ("belt", "jacket"),
                ("pants", "belt"),
                ("pants", "shoes"),
                ("socks", "shoes"),
            ],
        );
        let order = graph.topological_sort();
        assert_eq!(order.len(), 7);
        assert!(respects_edges(&graph, &order));
        assert_eq!(
            order,
            vec!["shirt", "pants", "socks", "tie", "belt", "shoes", "jacket"]
        );
    }

    #[test]
    fn test_topological_sort_two_cycle_is_empty() {
        let graph = build(&["A", "B"], &[("A", "B"), ("B", "A")]);
        assert!(graph.topological_sort().is_empty());
        assert!(!graph.is_dag());
    }

    #[test]
    fn test_topological_sort_single_vertex() {
        let graph = build(&["A"], &[]);
        assert_eq!(graph.topological_sort(), vec!["A"]);
    }

    #[test]
    fn test_topological_sort_parallel_edges() {
        let graph = build(&["A", "B"], &[("A", "B"), ("A", "B")]);
        assert_eq!(graph.topological_sort(), vec!["A", "B"]);
    }

    #[test]
    fn test_topological_sort_cycle_behind_dag_part() {
        let graph = build(
            &["root", "x", "y"],
            &[("root", "x"), ("x", "y"), ("y", "x")],
        );
        assert!(graph.topological_sort().is_empty());
    }

    #[test]
    fn test_is_dag_empty_and_acyclic() {
        let empty: Graph<&'static str> = Graph::new();
        assert!(empty.is_dag());

        let graph = build(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        assert!(graph.is_dag());
    }

    #[test]
    fn test_is_dag_self_loop() {
        let graph = build(&["A"], &[("A", "A")]);
        assert!(!graph.is_dag());
    }

    #[test]
    fn test_is_dag_cross_edge_is_not_a_cycle() {
        // C is finished before D reaches it: a cross edge, not a back edge
        let graph = build(
            &["A", "B", "C", "D"],
            &[("A", "C"), ("B", "D"), ("D", "C")],
        );
        assert!(graph.is_dag());
    }

    #[test]
    fn test_is_dag_cycle_in_second_component() {
        let graph = build(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("C", "D"), ("D", "E"), ("E", "C")],
        );
        assert!(!graph.is_dag());
    }
}
