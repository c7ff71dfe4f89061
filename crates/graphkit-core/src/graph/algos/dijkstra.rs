use crate::error::{GraphError, Result};
use crate::graph::queue::IndexedMinHeap;
use crate::graph::types::{Algorithm, Content, ShortestPaths};
use crate::graph::Graph;

impl<T: Content> Graph<T> {
    /// Dijkstra's algorithm from `source` over non-negative weights.
    ///
    /// Every weight is validated before any work starts: a negative weight
    /// anywhere in the graph fails with `NegativeWeight` and leaves
    /// the stored result untouched. The frontier is an indexed min-heap
    /// keyed by tentative distance: a vertex is inserted on first discovery
    /// and re-positioned with decrease-key on later improvements.
    #[tracing::instrument(skip(self))]
    pub fn dijkstra_shortest_path(&mut self, source: &T) -> Result<()> {
        let start = self.require(source)?;
        self.check_non_negative()?;

        let mut paths = ShortestPaths::new(
            Algorithm::Dijkstra,
            start,
            self.slot_count(),
            self.generation(),
        );
        let mut frontier: IndexedMinHeap<f64> = IndexedMinHeap::new(self.slot_count());
        frontier.insert(start, 0.0);

        let mut settled = 0usize;
        while let Some((current, dist)) = frontier.extract_min() {
            settled += 1;
            for edge in self.out_edges(current) {
                let candidate = dist + edge.weight;
                if candidate >= paths.distance_of(edge.dest) {
                    continue;
                }
                let first_discovery = !paths.is_reachable(edge.dest);
                paths.relax(current, edge.dest, candidate);
                if first_discovery {
                    frontier.insert(edge.dest, candidate);
                } else {
                    frontier.decrease_key(edge.dest, candidate);
                }
            }
        }

        tracing::debug!(settled, "dijkstra finished");
        self.store_single_source(paths);
        Ok(())
    }

    fn check_non_negative(&self) -> Result<()> {
        for vertex in self.vertices() {
            let negative = vertex
                .edges()
                .iter()
                .filter(|edge| edge.weight < 0.0)
                .find_map(|edge| Some((self.content(edge.dest)?, edge.weight)));
            if let Some((dest, weight)) = negative {
                return Err(GraphError::negative_weight(vertex.content(), dest, weight));
            }
        }
        Ok(())
    }
}
