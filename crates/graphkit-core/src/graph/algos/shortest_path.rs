//! Single-source shortest paths: unweighted BFS layering, Bellman-Ford, and
//! the queries over whichever single-source run is stored.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::types::{Algorithm, Content, PathResult, PathStep, ShortestPaths};
use crate::graph::Graph;

const SINGLE_SOURCE: &str = "shortest paths";

impl<T: Content> Graph<T> {
    /// Unweighted shortest paths from `source`: every edge costs 1.
    ///
    /// A neighbour is relaxed the first time BFS reaches it, which is the
    /// fewest-edges distance.
    #[tracing::instrument(skip(self))]
    pub fn unweighted_shortest_path(&mut self, source: &T) -> Result<()> {
        let start = self.require(source)?;
        let mut paths = ShortestPaths::new(
            Algorithm::Unweighted,
            start,
            self.slot_count(),
            self.generation(),
        );

        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let next = paths.distance_of(current) + 1.0;
            for edge in self.out_edges(current) {
                if !paths.is_reachable(edge.dest) {
                    paths.relax(current, edge.dest, next);
                    queue.push_back(edge.dest);
                }
            }
        }

        self.store_single_source(paths);
        Ok(())
    }

    /// Bellman-Ford from `source`. Handles negative weights.
    ///
    /// Runs at most V-1 passes over all edges, stopping early once a pass
    /// relaxes nothing. A further relaxation after that means a negative
    /// cycle reachable from `source`: the run fails with `NegativeCycle` and
    /// no result is stored.
    #[tracing::instrument(skip(self))]
    pub fn bellman_ford_shortest_path(&mut self, source: &T) -> Result<()> {
        let start = self.require(source)?;
        let mut paths = ShortestPaths::new(
            Algorithm::BellmanFord,
            start,
            self.slot_count(),
            self.generation(),
        );

        let passes = self.num_vertices().saturating_sub(1);
        let mut settled = false;
        for pass in 0..passes {
            if !self.relax_all(&mut paths) {
                debug!(pass, "bellman-ford converged");
                settled = true;
                break;
            }
        }

        if !settled && self.relax_all(&mut paths) {
            warn!(source = ?source, "negative cycle reachable from source");
            self.single_source = None;
            return Err(GraphError::negative_cycle(Algorithm::BellmanFord.as_str()));
        }

        self.store_single_source(paths);
        Ok(())
    }

    /// One relaxation pass over every edge. Unreached vertices are skipped
    /// so `inf + negative` never counts as an improvement.
    fn relax_all(&self, paths: &mut ShortestPaths) -> bool {
        let mut changed = false;
        for &from in self.vertex_ids() {
            let base = paths.distance_of(from);
            if !base.is_finite() {
                continue;
            }
            for edge in self.out_edges(from) {
                let candidate = base + edge.weight;
                if candidate < paths.distance_of(edge.dest) {
                    paths.relax(from, edge.dest, candidate);
                    changed = true;
                }
            }
        }
        changed
    }

    pub(crate) fn store_single_source(&mut self, paths: ShortestPaths) {
        debug!(
            algorithm = %paths.algorithm(),
            reached = paths.distance.iter().filter(|d| d.is_finite()).count(),
            "stored single-source result"
        );
        self.single_source = Some(paths);
    }

    /// Stored single-source result, if any. May be stale; the content
    /// queries below check that.
    pub fn shortest_paths(&self) -> Option<&ShortestPaths> {
        self.single_source.as_ref()
    }

    fn current_single_source(&self) -> Result<&ShortestPaths> {
        let paths = self
            .single_source
            .as_ref()
            .ok_or_else(|| GraphError::not_computed(SINGLE_SOURCE))?;
        if paths.generation != self.generation() {
            return Err(GraphError::stale(SINGLE_SOURCE));
        }
        Ok(paths)
    }

    /// Path from the stored run's source to `dest`, both inclusive.
    ///
    /// A vertex the run never reached yields `[dest]`.
    pub fn path_to(&self, dest: &T) -> Result<Vec<T>> {
        let paths = self.current_single_source()?;
        let id = self.require(dest)?;
        Ok(self.contents(&paths.path_ids(id)))
    }

    /// Distance from the stored run's source; `UNREACHABLE` if never reached
    pub fn distance(&self, vertex: &T) -> Result<f64> {
        let paths = self.current_single_source()?;
        let id = self.require(vertex)?;
        Ok(paths.distance_of(id))
    }

    pub fn predecessor(&self, vertex: &T) -> Result<Option<T>> {
        let paths = self.current_single_source()?;
        let id = self.require(vertex)?;
        Ok(paths
            .predecessor_of(id)
            .and_then(|pred| self.content(pred).cloned()))
    }

    /// Every vertex of the stored run in container order, with its distance
    /// and predecessor
    pub fn distance_table(&self) -> Result<Vec<PathStep<T>>> {
        let paths = self.current_single_source()?;
        Ok(self
            .vertex_ids()
            .iter()
            .filter_map(|&id| {
                Some(PathStep {
                    vertex: self.content(id)?.clone(),
                    distance: Some(paths.distance_of(id)).filter(|d| d.is_finite()),
                    predecessor: paths
                        .predecessor_of(id)
                        .and_then(|pred| self.content(pred).cloned()),
                })
            })
            .collect())
    }

    /// Run a single-source algorithm by selector
    pub fn run_single_source(&mut self, algorithm: Algorithm, source: &T) -> Result<()> {
        match algorithm {
            Algorithm::Unweighted => self.unweighted_shortest_path(source),
            Algorithm::Dijkstra => self.dijkstra_shortest_path(source),
            Algorithm::BellmanFord => self.bellman_ford_shortest_path(source),
            Algorithm::FloydWarshall => Err(GraphError::invalid_value(
                "single-source algorithm",
                algorithm,
            )),
        }
    }

    /// Run `algorithm` and answer the shortest path from `from` to `to`.
    ///
    /// An unreachable `to` gives `found: false` and an empty path whichever
    /// algorithm ran.
    pub fn shortest_path_between(
        &mut self,
        from: &T,
        to: &T,
        algorithm: Algorithm,
    ) -> Result<PathResult<T>> {
        self.require(to)?;
        let (distance, path) = if algorithm.is_single_source() {
            self.run_single_source(algorithm, from)?;
            (self.distance(to)?, self.path_to(to)?)
        } else {
            self.require(from)?;
            self.floyd_warshall_shortest_path()?;
            (
                self.floyd_warshall_distance(from, to)?,
                self.floyd_warshall_path(from, to)?,
            )
        };

        let found = distance.is_finite();
        Ok(PathResult {
            from: from.clone(),
            to: to.clone(),
            algorithm,
            found,
            distance: found.then_some(distance),
            path: if found { path } else { Vec::new() },
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphError;
    use crate::graph::{Algorithm, Graph, UNREACHABLE};

    fn weighted(edges: &[(&'static str, &'static str, f64)]) -> Graph<&'static str> {
        let mut graph = Graph::new();
        for (a, b, _) in edges {
            for v in [a, b] {
                if !graph.contains(v) {
                    graph.add_vertex(*v).unwrap();
                }
            }
        }
        for (a, b, w) in edges {
            graph.add_edge(a, b, *w).unwrap();
        }
        graph
    }

    #[test]
    fn test_unweighted_counts_edges() {
        let mut graph = weighted(&[
            ("A", "B", 10.0),
            ("B", "C", 10.0),
            ("A", "C", 50.0),
            ("C", "D", 1.0),
        ]);
        graph.unweighted_shortest_path(&"A").unwrap();
        assert_eq!(graph.distance(&"A").unwrap(), 0.0);
        assert_eq!(graph.distance(&"B").unwrap(), 1.0);
        assert_eq!(graph.distance(&"C").unwrap(), 1.0);
        assert_eq!(graph.distance(&"D").unwrap(), 2.0);
        assert_eq!(graph.path_to(&"D").unwrap(), vec!["A", "C", "D"]);
        assert_eq!(graph.predecessor(&"A").unwrap(), None);
        assert_eq!(
            graph.shortest_paths().map(|p| p.algorithm()),
            Some(Algorithm::Unweighted)
        );
    }

    #[test]
    fn test_unreached_vertex_path_is_itself() {
        let mut graph = weighted(&[("A", "B", 1.0), ("C", "A", 1.0)]);
        graph.unweighted_shortest_path(&"A").unwrap();
        assert_eq!(graph.distance(&"C").unwrap(), UNREACHABLE);
        assert_eq!(graph.path_to(&"C").unwrap(), vec!["C"]);
        assert_eq!(graph.path_to(&"A").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_queries_before_any_run() {
        let graph = weighted(&[("A", "B", 1.0)]);
        assert!(graph.shortest_paths().is_none());
        assert!(matches!(
            graph.path_to(&"B"),
            Err(GraphError::NotComputed { .. })
        ));
    }

    #[test]
    fn test_mutation_makes_result_stale() {
        let mut graph = weighted(&[("A", "B", 1.0)]);
        graph.unweighted_shortest_path(&"A").unwrap();
        graph.add_vertex("C").unwrap();
        assert!(matches!(
            graph.path_to(&"B"),
            Err(GraphError::StaleResult { .. })
        ));
        graph.unweighted_shortest_path(&"A").unwrap();
        assert_eq!(graph.path_to(&"B").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_source_and_dest() {
        let mut graph = weighted(&[("A", "B", 1.0)]);
        assert!(matches!(
            graph.bellman_ford_shortest_path(&"Z"),
            Err(GraphError::VertexNotFound { .. })
        ));
        graph.bellman_ford_shortest_path(&"A").unwrap();
        assert!(matches!(
            graph.path_to(&"Z"),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn test_bellman_ford_negative_edges() {
        let mut graph = weighted(&[
            ("S", "A", 4.0),
            ("S", "B", 5.0),
            ("B", "A", -3.0),
            ("A", "C", 2.0),
        ]);
        graph.bellman_ford_shortest_path(&"S").unwrap();
        assert_eq!(graph.distance(&"A").unwrap(), 2.0);
        assert_eq!(graph.distance(&"C").unwrap(), 4.0);
        assert_eq!(graph.path_to(&"C").unwrap(), vec!["S", "B", "A", "C"]);
        assert_eq!(graph.predecessor(&"A").unwrap(), Some("B"));
    }

    #[test]
    fn test_bellman_ford_reachable_negative_cycle() {
        let mut graph = weighted(&[
            ("S", "A", 1.0),
            ("A", "B", 1.0),
            ("B", "A", -3.0),
        ]);
        graph.unweighted_shortest_path(&"S").unwrap();
        let err = graph.bellman_ford_shortest_path(&"S").unwrap_err();
        assert!(matches!(err, GraphError::NegativeCycle { .. }));
        // the failed run discards the previous result too
        assert!(matches!(
            graph.path_to(&"B"),
            Err(GraphError::NotComputed { .. })
        ));
    }

    #[test]
    fn test_bellman_ford_ignores_unreachable_negative_cycle() {
        let mut graph = weighted(&[
            ("S", "A", 2.0),
            ("X", "Y", 1.0),
            ("Y", "X", -5.0),
        ]);
        graph.bellman_ford_shortest_path(&"S").unwrap();
        assert_eq!(graph.distance(&"A").unwrap(), 2.0);
        assert_eq!(graph.distance(&"X").unwrap(), UNREACHABLE);
        assert_eq!(graph.path_to(&"Y").unwrap(), vec!["Y"]);
    }

    #[test]
    fn test_bellman_ford_single_vertex() {
        let mut graph: Graph<&'static str> = Graph::new();
        graph.add_vertex("A").unwrap();
        graph.bellman_ford_shortest_path(&"A").unwrap();
        assert_eq!(graph.distance(&"A").unwrap(), 0.0);
    }

    #[test]
    fn test_distance_table() {
        let mut graph = weighted(&[("A", "B", 2.0), ("C", "A", 1.0)]);
        graph.bellman_ford_shortest_path(&"A").unwrap();
        let table = graph.distance_table().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].vertex, "A");
        assert_eq!(table[0].distance, Some(0.0));
        assert_eq!(table[1].distance, Some(2.0));
        assert_eq!(table[1].predecessor, Some("A"));
        assert_eq!(table[2].vertex, "C");
        assert_eq!(table[2].distance, None);
    }

    #[test]
    fn test_shortest_path_between_each_algorithm() {
        let mut graph = weighted(&[
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("A", "C", 5.0),
            ("C", "D", 1.0),
        ]);
        for algorithm in [
            Algorithm::Dijkstra,
            Algorithm::BellmanFord,
            Algorithm::FloydWarshall,
        ] {
            let result = graph.shortest_path_between(&"A", &"D", algorithm).unwrap();
            assert!(result.found);
            assert_eq!(result.distance, Some(4.0));
            assert_eq!(result.path, vec!["A", "B", "C", "D"]);
        }

        let hops = graph
            .shortest_path_between(&"A", &"D", Algorithm::Unweighted)
            .unwrap();
        assert_eq!(hops.distance, Some(2.0));
        assert_eq!(hops.path, vec!["A", "C", "D"]);

        let none = graph
            .shortest_path_between(&"D", &"A", Algorithm::FloydWarshall)
            .unwrap();
        assert!(!none.found);
        assert!(none.path.is_empty());
        let none = graph
            .shortest_path_between(&"D", &"A", Algorithm::Dijkstra)
            .unwrap();
        assert!(!none.found);
        assert!(none.path.is_empty());
    }

    #[test]
    fn test_run_single_source_rejects_all_pairs() {
        let mut graph = weighted(&[("A", "B", 1.0)]);
        assert!(matches!(
            graph.run_single_source(Algorithm::FloydWarshall, &"A"),
            Err(GraphError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_bellman_ford_negative_self_loop() {
        let mut graph = weighted(&[("S", "S", -1.0)]);
        assert!(matches!(
            graph.bellman_ford_shortest_path(&"S"),
            Err(GraphError::NegativeCycle { .. })
        ));
    }
}
