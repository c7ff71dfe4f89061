//! All-pairs shortest paths (Floyd-Warshall) with a next-hop matrix

use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::types::{Algorithm, AllPairs, Content, VertexId, UNREACHABLE};
use crate::graph::Graph;

const ALL_PAIRS: &str = "all-pairs matrices";

impl<T: Content> Graph<T> {
    /// Compute every pairwise shortest distance and the next hop on each path.
    ///
    /// Matrix positions follow container order at call time and are stored
    /// with the matrices. A direct distance is the cheapest of any parallel
    /// edges. A negative diagonal entry after the run means a negative cycle:
    /// the call fails with `NegativeCycle` and nothing is stored.
    #[tracing::instrument(skip(self), fields(vertices = self.num_vertices()))]
    pub fn floyd_warshall_shortest_path(&mut self) -> Result<()> {
        let positions: Vec<VertexId> = self.vertex_ids().to_vec();
        let n = positions.len();
        let mut position_of = vec![None; self.slot_count()];
        for (pos, id) in positions.iter().enumerate() {
            position_of[id.index()] = Some(pos);
        }

        let mut distance = vec![vec![UNREACHABLE; n]; n];
        let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
        for (i, &id) in positions.iter().enumerate() {
            distance[i][i] = 0.0;
            next[i][i] = Some(i);
            for edge in self.out_edges(id) {
                let Some(j) = position_of[edge.dest.index()] else {
                    continue;
                };
                if edge.weight < distance[i][j] {
                    distance[i][j] = edge.weight;
                    next[i][j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through = distance[i][k];
                if !through.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = through + distance[k][j];
                    if candidate < distance[i][j] {
                        distance[i][j] = candidate;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        if (0..n).any(|i| distance[i][i] < 0.0) {
            warn!("negative cycle in all-pairs run");
            self.all_pairs = None;
            return Err(GraphError::negative_cycle(Algorithm::FloydWarshall.as_str()));
        }

        debug!(positions = n, "stored all-pairs result");
        self.all_pairs = Some(AllPairs {
            positions,
            position_of,
            distance,
            next,
            generation: self.generation(),
        });
        Ok(())
    }

    /// Stored all-pairs result, if any. May be stale.
    pub fn all_pairs(&self) -> Option<&AllPairs> {
        self.all_pairs.as_ref()
    }

    fn current_all_pairs(&self) -> Result<&AllPairs> {
        let matrices = self
            .all_pairs
            .as_ref()
            .ok_or_else(|| GraphError::not_computed(ALL_PAIRS))?;
        if matrices.generation != self.generation() {
            return Err(GraphError::stale(ALL_PAIRS));
        }
        Ok(matrices)
    }

    /// Matrix positions of two vertices in the current all-pairs result
    fn pair_positions(&self, origin: &T, dest: &T) -> Result<(&AllPairs, usize, usize)> {
        let matrices = self.current_all_pairs()?;
        let from = self.require(origin)?;
        let to = self.require(dest)?;
        match (matrices.position(from), matrices.position(to)) {
            (Some(o), Some(d)) => Ok((matrices, o, d)),
            _ => Err(GraphError::stale(ALL_PAIRS)),
        }
    }

    /// Shortest path from `origin` to `dest`, both inclusive, read from the
    /// next-hop matrix. Empty when `dest` is unreachable.
    pub fn floyd_warshall_path(&self, origin: &T, dest: &T) -> Result<Vec<T>> {
        let (matrices, o, d) = self.pair_positions(origin, dest)?;
        let ids: Vec<VertexId> = matrices
            .path_positions(o, d)
            .into_iter()
            .filter_map(|pos| matrices.vertex_at(pos))
            .collect();
        Ok(self.contents(&ids))
    }

    /// Shortest distance from `origin` to `dest`; `UNREACHABLE` if none
    pub fn floyd_warshall_distance(&self, origin: &T, dest: &T) -> Result<f64> {
        let (matrices, o, d) = self.pair_positions(origin, dest)?;
        Ok(matrices.distance(o, d))
    }
}
