//! Single-source shortest paths.
//!
//! # Algorithm
//!
//! Binary-heap Dijkstra over non-negative weights. The heap is ordered by
//! `(cost, NodeId)` and neighbors are relaxed in ascending id order. A
//! tentative label is replaced only by a strictly smaller cost, so among
//! equal-cost paths the first one discovered is kept.
//!
//! # Complexity
//!
//! O(E log V) per source.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::models::{Graph, NodeId, Path};

/// Heap entry; reversed so `BinaryHeap` pops the smallest `(cost, node)`.
#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    node: NodeId,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Shortest-path distances and predecessors from one source node.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    dist: Vec<f64>,
    pred: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    /// The source node.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `target`, or `None` if unreachable or not a node of the
    /// tree's graph.
    pub fn distance_to(&self, target: NodeId) -> Option<f64> {
        let d = *self.dist.get(target.index())?;
        d.is_finite().then_some(d)
    }

    /// Returns `true` if `target` is reachable from the source.
    pub fn reaches(&self, target: NodeId) -> bool {
        self.distance_to(target).is_some()
    }

    /// The shortest path to `target`, or `None` if unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<Path> {
        let cost = self.distance_to(target)?;
        let mut nodes = vec![target];
        let mut current = target;
        while let Some(&Some(prev)) = self.pred.get(current.index()) {
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();
        Some(Path::new(nodes, cost))
    }

    /// Raw distance row indexed by node id (`f64::INFINITY` if unreachable).
    pub(crate) fn distances(&self) -> &[f64] {
        &self.dist
    }
}

/// Runs Dijkstra from `source` over the whole graph.
///
/// # Panics
///
/// Panics if `source` does not belong to `graph`.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::shortest_path::dijkstra;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C", "D"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "B", 1.0).unwrap();
/// b.add_edge("B", "C", 2.0).unwrap();
/// let g = b.build();
///
/// let tree = dijkstra(&g, g.node_id("A").unwrap());
/// assert_eq!(tree.distance_to(g.node_id("C").unwrap()), Some(3.0));
/// assert_eq!(tree.distance_to(g.node_id("D").unwrap()), None);
/// ```
pub fn dijkstra(graph: &Graph, source: NodeId) -> ShortestPathTree {
    let n = graph.num_nodes();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source.index()] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        for (next, weight) in graph.neighbors(node) {
            if settled[next.index()] {
                continue;
            }
            let candidate = cost + weight;
            if candidate < dist[next.index()] {
                dist[next.index()] = candidate;
                pred[next.index()] = Some(node);
                heap.push(State {
                    cost: candidate,
                    node: next,
                });
            }
        }
    }

    ShortestPathTree { source, dist, pred }
}

fn no_path(graph: &Graph, source: NodeId, target: NodeId) -> GraphError {
    GraphError::NoPath {
        from: graph.label(source).to_string(),
        to: graph.label(target).to_string(),
    }
}

fn check_node(graph: &Graph, id: NodeId) -> Result<()> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(GraphError::UnknownNode(id.to_string()))
    }
}

/// Computes the minimum-weight path from `source` to `target`.
///
/// Returns `[source]` at cost 0 when `source == target`, and
/// [`GraphError::NoPath`] when `target` is unreachable.
pub fn shortest_path(graph: &Graph, source: NodeId, target: NodeId) -> Result<Path> {
    check_node(graph, source)?;
    check_node(graph, target)?;
    if source == target {
        return Ok(Path::trivial(source));
    }
    dijkstra(graph, source)
        .path_to(target)
        .ok_or_else(|| no_path(graph, source, target))
}

/// Total weight of the shortest path from `source` to `target`.
pub fn shortest_distance(graph: &Graph, source: NodeId, target: NodeId) -> Result<f64> {
    shortest_path(graph, source, target).map(|p| p.cost())
}

/// Result of a farthest-reachable query.
#[derive(Debug, Clone, PartialEq)]
pub struct Farthest {
    /// The farthest candidate.
    pub node: NodeId,
    /// Its shortest-path distance from the source.
    pub distance: f64,
    /// The shortest path realizing that distance.
    pub path: Path,
}

/// Finds the candidate with the greatest shortest-path distance from
/// `source`.
///
/// Candidates are scanned in the given order; unreachable ones are skipped
/// and a later candidate wins only with a strictly greater distance. Returns
/// `None` if no candidate is reachable.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::shortest_path::farthest_reachable;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "B", 1.0).unwrap();
/// b.add_edge("B", "C", 2.0).unwrap();
/// let g = b.build();
///
/// let all: Vec<_> = g.nodes().collect();
/// let far = farthest_reachable(&g, g.node_id("A").unwrap(), &all).unwrap();
/// assert_eq!(g.label(far.node), "C");
/// assert_eq!(far.distance, 3.0);
/// ```
pub fn farthest_reachable(
    graph: &Graph,
    source: NodeId,
    candidates: &[NodeId],
) -> Option<Farthest> {
    if !graph.contains(source) {
        return None;
    }
    let tree = dijkstra(graph, source);

    let mut best: Option<(NodeId, f64)> = None;
    for &candidate in candidates {
        if !graph.contains(candidate) {
            continue;
        }
        let Some(d) = tree.distance_to(candidate) else {
            continue;
        };
        match best {
            Some((_, best_d)) if d <= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }

    let (node, distance) = best?;
    let path = tree.path_to(node)?;
    debug!(
        source = graph.label(source),
        farthest = graph.label(node),
        distance,
        "farthest reachable node"
    );
    Some(Farthest {
        node,
        distance,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GraphBuilder;

    fn build(labels: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
        let mut b = GraphBuilder::new();
        for &l in labels {
            b.add_node(l).expect("unique");
        }
        for &(u, v, w) in edges {
            b.add_edge(u, v, w).expect("valid");
        }
        b.build()
    }

    fn id(g: &Graph, label: &str) -> NodeId {
        g.node_id(label).expect("known label")
    }

    #[test]
    fn test_tree_ignores_foreign_target() {
        let g = build(&["A"], &[]);
        let tree = dijkstra(&g, id(&g, "A"));
        let other = build(&["P", "Q", "R"], &[]);
        let r = id(&other, "R");
        assert_eq!(tree.distance_to(r), None);
        assert!(!tree.reaches(r));
        assert_eq!(tree.path_to(r), None);
    }

    #[test]
    fn test_prefers_lighter_detour() {
        let g = build(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)],
        );
        let p = shortest_path(&g, id(&g, "A"), id(&g, "C")).expect("reachable");
        assert_eq!(p.labels(&g), vec!["A", "B", "C"]);
        assert!((p.cost() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_equal_cost_tie_keeps_direct_edge() {
        // A-B 1, B-C 2, A-C 3: both routes to C cost 3; the direct edge is
        // discovered first when A is expanded.
        let g = build(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)],
        );
        let p = shortest_path(&g, id(&g, "A"), id(&g, "C")).expect("reachable");
        assert_eq!(p.labels(&g), vec!["A", "C"]);
        assert_eq!(p.cost(), 3.0);

        let back = shortest_path(&g, id(&g, "C"), id(&g, "A")).expect("reachable");
        assert_eq!(back.labels(&g), vec!["C", "A"]);
    }

    #[test]
    fn test_self_path_is_trivial() {
        let g = build(&["A", "B"], &[("A", "B", 1.0)]);
        let p = shortest_path(&g, id(&g, "A"), id(&g, "A")).expect("trivial");
        assert_eq!(p.labels(&g), vec!["A"]);
        assert_eq!(p.cost(), 0.0);
        assert_eq!(shortest_distance(&g, id(&g, "B"), id(&g, "B")).ok(), Some(0.0));
    }

    #[test]
    fn test_unreachable_target() {
        let g = build(&["A", "B", "C"], &[("A", "B", 1.0)]);
        let err = shortest_path(&g, id(&g, "A"), id(&g, "C")).unwrap_err();
        assert!(matches!(err, GraphError::NoPath { ref from, ref to } if from == "A" && to == "C"));
    }

    #[test]
    fn test_tree_paths() {
        let g = build(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("A", "D", 10.0)],
        );
        let tree = dijkstra(&g, id(&g, "A"));
        assert_eq!(tree.source(), id(&g, "A"));
        assert_eq!(tree.distance_to(id(&g, "D")), Some(3.0));
        let p = tree.path_to(id(&g, "D")).expect("reachable");
        assert_eq!(p.labels(&g), vec!["A", "B", "C", "D"]);
        assert!(tree.reaches(id(&g, "C")));
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = build(&["A", "B", "C"], &[("A", "B", 0.0), ("B", "C", 0.0)]);
        assert_eq!(shortest_distance(&g, id(&g, "A"), id(&g, "C")).ok(), Some(0.0));
    }

    #[test]
    fn test_farthest_first_max_wins() {
        // B and C are both at distance 2 from A.
        let g = build(&["A", "B", "C"], &[("A", "B", 2.0), ("A", "C", 2.0)]);
        let all: Vec<NodeId> = g.nodes().collect();
        let far = farthest_reachable(&g, id(&g, "A"), &all).expect("reachable");
        assert_eq!(g.label(far.node), "B");

        let reversed = vec![id(&g, "C"), id(&g, "B")];
        let far = farthest_reachable(&g, id(&g, "A"), &reversed).expect("reachable");
        assert_eq!(g.label(far.node), "C");
    }

    #[test]
    fn test_farthest_skips_unreachable() {
        let g = build(&["A", "B", "Z"], &[("A", "B", 4.0)]);
        let all: Vec<NodeId> = g.nodes().collect();
        let far = farthest_reachable(&g, id(&g, "A"), &all).expect("reachable");
        assert_eq!(g.label(far.node), "B");
        assert_eq!(far.distance, 4.0);
        assert_eq!(far.path.labels(&g), vec!["A", "B"]);

        assert!(farthest_reachable(&g, id(&g, "A"), &[id(&g, "Z")]).is_none());
        assert!(farthest_reachable(&g, id(&g, "A"), &[]).is_none());
    }

    #[test]
    fn test_farthest_only_source() {
        let g = build(&["A"], &[]);
        let far = farthest_reachable(&g, id(&g, "A"), &[id(&g, "A")]).expect("source");
        assert_eq!(far.distance, 0.0);
        assert_eq!(far.path.labels(&g), vec!["A"]);
    }
}
