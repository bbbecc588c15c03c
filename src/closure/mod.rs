//! Reachability: connected components and transitive closure.

use std::collections::VecDeque;

use tracing::debug;

use crate::models::{EdgeKey, Graph, NodeId};

/// Weight given to closure edges that have no counterpart in the original
/// graph. Only their presence is meaningful.
pub const CLOSURE_EDGE_WEIGHT: f64 = 1.0;

/// Partitions the nodes into connected components.
///
/// Components are ordered by their first node in insertion order, and each
/// component lists its nodes in ascending id order.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::closure::connected_components;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "C", 1.0).unwrap();
/// let g = b.build();
///
/// let comps = connected_components(&g);
/// assert_eq!(comps.len(), 2);
/// assert_eq!(g.labels_of(&comps[0]), vec!["A", "C"]);
/// assert_eq!(g.labels_of(&comps[1]), vec!["B"]);
/// ```
pub fn connected_components(graph: &Graph) -> Vec<Vec<NodeId>> {
    let mut seen = vec![false; graph.num_nodes()];
    let mut components = Vec::new();

    for start in graph.nodes() {
        if seen[start.index()] {
            continue;
        }
        seen[start.index()] = true;
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for (v, _) in graph.neighbors(u) {
                if !seen[v.index()] {
                    seen[v.index()] = true;
                    component.push(v);
                    queue.push_back(v);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

/// Builds the transitive closure of an undirected graph.
///
/// The result has the same nodes and an edge between every pair of distinct
/// nodes joined by some path. Existing edges keep their weight; added edges
/// get [`CLOSURE_EDGE_WEIGHT`]. No self-loops are added, and closing an
/// already-closed graph changes nothing.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::closure::transitive_closure;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C", "D"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "B", 2.0).unwrap();
/// b.add_edge("B", "C", 3.0).unwrap();
/// let g = b.build();
///
/// let closed = transitive_closure(&g);
/// assert_eq!(closed.num_edges(), 3); // A-B, A-C, B-C
/// let (a, c, d) = (g.node_id("A").unwrap(), g.node_id("C").unwrap(), g.node_id("D").unwrap());
/// assert!(closed.has_edge(a, c));
/// assert_eq!(closed.degree(d), 0);
/// ```
pub fn transitive_closure(graph: &Graph) -> Graph {
    let mut closed = graph.without_edges();

    for component in connected_components(graph) {
        for (i, &u) in component.iter().enumerate() {
            for &v in &component[i + 1..] {
                let weight = graph.edge_weight(u, v).unwrap_or(CLOSURE_EDGE_WEIGHT);
                closed.insert_edge(EdgeKey::new(u, v), weight);
            }
        }
    }

    debug!(
        original = graph.num_edges(),
        closed = closed.num_edges(),
        "transitive closure built"
    );
    closed
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

    fn edge_set(g: &Graph) -> Vec<(usize, usize, f64)> {
        g.edges()
            .map(|e| (e.key.low().index(), e.key.high().index(), e.weight))
            .collect()
    }

    #[test]
    fn test_path_becomes_complete() {
        let g = build(
            &["A", "B", "C", "D"],
            &[("A", "B", 5.0), ("B", "C", 6.0), ("C", "D", 7.0)],
        );
        let closed = transitive_closure(&g);
        assert_eq!(closed.num_nodes(), 4);
        assert_eq!(closed.num_edges(), 6);
        assert_eq!(
            edge_set(&closed),
            vec![
                (0, 1, 5.0),
                (0, 2, 1.0),
                (0, 3, 1.0),
                (1, 2, 6.0),
                (1, 3, 1.0),
                (2, 3, 7.0)
            ]
        );
    }

    #[test]
    fn test_components_stay_separate() {
        let g = build(
            &["A", "B", "X", "C", "Y"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("X", "Y", 1.0)],
        );
        let closed = transitive_closure(&g);
        let a = g.node_id("A").expect("exists");
        let c = g.node_id("C").expect("exists");
        let x = g.node_id("X").expect("exists");
        assert!(closed.has_edge(a, c));
        assert!(!closed.has_edge(a, x));
        assert_eq!(closed.num_edges(), 4);
    }

    #[test]
    fn test_no_self_loops() {
        let g = build(&["A", "B"], &[("A", "B", 1.0)]);
        let closed = transitive_closure(&g);
        for u in closed.nodes() {
            assert!(!closed.has_edge(u, u));
        }
    }

    #[test]
    fn test_idempotent() {
        let g = build(
            &["A", "B", "C", "D", "E"],
            &[("A", "C", 2.0), ("C", "E", 3.0), ("B", "D", 4.0)],
        );
        let once = transitive_closure(&g);
        let twice = transitive_closure(&once);
        assert_eq!(edge_set(&once), edge_set(&twice));
    }

    #[test]
    fn test_isolated_nodes() {
        let g = build(&["A", "B", "C"], &[]);
        let closed = transitive_closure(&g);
        assert_eq!(closed.num_edges(), 0);
        assert_eq!(connected_components(&g).len(), 3);
    }

    #[test]
    fn test_component_order() {
        let g = build(
            &["A", "B", "C", "D"],
            &[("D", "B", 1.0), ("C", "A", 1.0)],
        );
        let comps = connected_components(&g);
        let labels: Vec<Vec<&str>> = comps.iter().map(|c| g.labels_of(c)).collect();
        assert_eq!(labels, vec![vec!["A", "C"], vec!["B", "D"]]);
    }
}
