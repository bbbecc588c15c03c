//! All-pairs shortest paths.

use tracing::debug;

use super::dijkstra::{dijkstra, ShortestPathTree};
use crate::distance::DistanceMatrix;
use crate::models::{Graph, NodeId, Path};

/// Shortest paths between every ordered pair of nodes.
///
/// Holds one Dijkstra tree per source, so every answer is the same one
/// [`shortest_path`](super::shortest_path) gives for that pair.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths {
    trees: Vec<ShortestPathTree>,
}

impl AllPairsShortestPaths {
    /// Shortest path from `source` to `target`, or `None` if unreachable or
    /// either node is not in the graph.
    pub fn path(&self, source: NodeId, target: NodeId) -> Option<Path> {
        let tree = self.trees.get(source.index())?;
        if source == target {
            return Some(Path::trivial(source));
        }
        tree.path_to(target)
    }

    /// Shortest distance from `source` to `target`, or `None` if unreachable
    /// or either node is not in the graph.
    pub fn distance(&self, source: NodeId, target: NodeId) -> Option<f64> {
        self.trees.get(source.index())?.distance_to(target)
    }

    /// Iterates `(source, target, path)` over ordered pairs with
    /// `source != target` and `target` reachable, sources and targets in
    /// ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, Path)> + '_ {
        let trees = &self.trees;
        trees.iter().flat_map(move |tree| {
            let source = tree.source();
            trees
                .iter()
                .map(ShortestPathTree::source)
                .filter(move |&target| target != source)
                .filter_map(move |target| tree.path_to(target).map(|p| (source, target, p)))
        })
    }

    /// Metric closure: shortest distances between every pair, with
    /// `f64::INFINITY` for unreachable pairs and `0.0` on the diagonal.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        let n = self.trees.len();
        let mut matrix = DistanceMatrix::filled(n, f64::INFINITY);
        for (i, tree) in self.trees.iter().enumerate() {
            for (j, &d) in tree.distances().iter().enumerate() {
                matrix.set(i, j, d);
            }
        }
        matrix
    }
}

/// Computes shortest paths between every ordered pair of nodes by running
/// Dijkstra from each source.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::shortest_path::all_pairs_shortest_paths;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "B", 1.0).unwrap();
/// b.add_edge("B", "C", 2.0).unwrap();
/// let g = b.build();
///
/// let all = all_pairs_shortest_paths(&g);
/// assert_eq!(all.iter().count(), 6);
/// let (a, c) = (g.node_id("A").unwrap(), g.node_id("C").unwrap());
/// assert_eq!(all.distance(c, a), Some(3.0));
/// ```
pub fn all_pairs_shortest_paths(graph: &Graph) -> AllPairsShortestPaths {
    let trees: Vec<ShortestPathTree> = graph.nodes().map(|s| dijkstra(graph, s)).collect();
    debug!(sources = trees.len(), "all-pairs shortest paths computed");
    AllPairsShortestPaths { trees }
}
