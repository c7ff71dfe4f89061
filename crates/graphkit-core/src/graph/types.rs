use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Distance of a vertex the algorithm never reached
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Bounds every vertex content type must satisfy.
///
/// Content values are the unique key of a vertex, so they must be hashable
/// and comparable; `Debug` is used to name vertices in errors.
pub trait Content: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Content for T {}

/// Stable handle to a vertex slot in a graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Arena slot index of this vertex
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Outgoing arc. The destination is a handle into the owning graph's arena,
/// never an owning reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub dest: VertexId,
    pub weight: f64,
}

/// A vertex: its content and the edges leaving it
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    pub(crate) content: T,
    pub(crate) edges: Vec<Edge>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(content: T) -> Self {
        Vertex {
            content,
            edges: Vec::new(),
        }
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn outdegree(&self) -> usize {
        self.edges.len()
    }
}

/// Shortest-path algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// BFS layering, every edge costs 1
    Unweighted,
    /// Dijkstra with an indexed priority queue (non-negative weights)
    Dijkstra,
    /// Bellman-Ford relaxation with negative-cycle detection
    BellmanFord,
    /// All-pairs Floyd-Warshall with a next-hop matrix
    FloydWarshall,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Unweighted => "unweighted",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::FloydWarshall => "floyd-warshall",
        }
    }

    /// Whether this algorithm computes paths from a single source
    pub fn is_single_source(&self) -> bool {
        !matches!(self, Algorithm::FloydWarshall)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unweighted" | "bfs" => Ok(Algorithm::Unweighted),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" => Ok(Algorithm::BellmanFord),
            "floyd-warshall" | "floyd_warshall" => Ok(Algorithm::FloydWarshall),
            other => Err(format!(
                "unknown algorithm '{}' (expected: unweighted, dijkstra, bellman-ford, floyd-warshall)",
                other
            )),
        }
    }
}

/// Result of one single-source shortest-path run.
///
/// Tables are indexed by arena slot and sized to the arena at run time, so
/// every vertex (reachable or not) has an entry.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub(crate) algorithm: Algorithm,
    pub(crate) source: VertexId,
    pub(crate) distance: Vec<f64>,
    pub(crate) predecessor: Vec<Option<VertexId>>,
    pub(crate) generation: u64,
}

impl ShortestPaths {
    /// Fresh tables: every distance unreachable, no predecessors, source at 0
    pub(crate) fn new(
        algorithm: Algorithm,
        source: VertexId,
        slots: usize,
        generation: u64,
    ) -> Self {
        let mut distance = vec![UNREACHABLE; slots];
        distance[source.0] = 0.0;
        ShortestPaths {
            algorithm,
            source,
            distance,
            predecessor: vec![None; slots],
            generation,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn distance_of(&self, id: VertexId) -> f64 {
        self.distance.get(id.0).copied().unwrap_or(UNREACHABLE)
    }

    pub fn predecessor_of(&self, id: VertexId) -> Option<VertexId> {
        self.predecessor.get(id.0).copied().flatten()
    }

    pub fn is_reachable(&self, id: VertexId) -> bool {
        self.distance_of(id).is_finite()
    }

    /// Handles from the source to `dest` inclusive, following predecessors.
    /// An unreached `dest` yields just `[dest]`.
    pub fn path_ids(&self, dest: VertexId) -> Vec<VertexId> {
        let mut path = vec![dest];
        let mut current = dest;
        while let Some(pred) = self.predecessor_of(current) {
            path.push(pred);
            current = pred;
        }
        path.reverse();
        path
    }

    /// Record an improved distance for `to` reached through `from`
    pub(crate) fn relax(&mut self, from: VertexId, to: VertexId, distance: f64) {
        self.distance[to.0] = distance;
        self.predecessor[to.0] = Some(from);
    }
}

/// Result of one Floyd-Warshall run: the position index it was computed
/// against plus the distance and next-hop matrices.
#[derive(Debug, Clone)]
pub struct AllPairs {
    pub(crate) positions: Vec<VertexId>,
    pub(crate) position_of: Vec<Option<usize>>,
    pub(crate) distance: Vec<Vec<f64>>,
    pub(crate) next: Vec<Vec<Option<usize>>>,
    pub(crate) generation: u64,
}

impl AllPairs {
    /// Matrix position of a vertex, if it existed when the matrices were built
    pub fn position(&self, id: VertexId) -> Option<usize> {
        self.position_of.get(id.0).copied().flatten()
    }

    /// Vertex at a matrix position
    pub fn vertex_at(&self, position: usize) -> Option<VertexId> {
        self.positions.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn distance(&self, origin: usize, dest: usize) -> f64 {
        self.distance[origin][dest]
    }

    /// Next hop after `origin` on a shortest path to `dest`
    pub fn next_hop(&self, origin: usize, dest: usize) -> Option<usize> {
        self.next[origin][dest]
    }

    /// Positions from `origin` to `dest` inclusive; empty when no path exists
    pub fn path_positions(&self, origin: usize, dest: usize) -> Vec<usize> {
        if self.next[origin][dest].is_none() {
            return Vec::new();
        }
        let mut path = vec![origin];
        let mut current = origin;
        while current != dest {
            match self.next[current][dest] {
                Some(hop) => {
                    current = hop;
                    path.push(current);
                }
                None => return Vec::new(),
            }
        }
        path
    }
}

/// One vertex of a single-source result: its distance from the source (none
/// when unreached) and the vertex it was reached from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep<T> {
    pub vertex: T,
    pub distance: Option<f64>,
    pub predecessor: Option<T>,
}

/// Serializable shortest-path answer used by the CLI
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<T> {
    pub from: T,
    pub to: T,
    pub algorithm: Algorithm,
    pub found: bool,
    pub distance: Option<f64>,
    pub path: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("Bellman-Ford".parse::<Algorithm>(), Ok(Algorithm::BellmanFord));
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Unweighted));
        assert!("astar".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for alg in [
            Algorithm::Unweighted,
            Algorithm::Dijkstra,
            Algorithm::BellmanFord,
            Algorithm::FloydWarshall,
        ] {
            assert_eq!(alg.to_string().parse::<Algorithm>(), Ok(alg));
        }
        assert!(!Algorithm::FloydWarshall.is_single_source());
    }

    #[test]
    fn test_shortest_paths_fresh_state() {
        let paths = ShortestPaths::new(Algorithm::Dijkstra, VertexId(1), 3, 0);
        assert_eq!(paths.distance_of(VertexId(1)), 0.0);
        assert!(!paths.is_reachable(VertexId(0)));
        assert_eq!(paths.predecessor_of(VertexId(2)), None);
        assert_eq!(paths.path_ids(VertexId(2)), vec![VertexId(2)]);
    }

    #[test]
    fn test_shortest_paths_path_ids_follow_predecessors() {
        let mut paths = ShortestPaths::new(Algorithm::Unweighted, VertexId(0), 3, 0);
        paths.relax(VertexId(0), VertexId(1), 1.0);
        paths.relax(VertexId(1), VertexId(2), 2.0);
        assert_eq!(
            paths.path_ids(VertexId(2)),
            vec![VertexId(0), VertexId(1), VertexId(2)]
        );
    }
}
