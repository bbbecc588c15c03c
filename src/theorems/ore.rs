//! Ore's condition.

use tracing::debug;

use super::{require_min_nodes, Theorem, Verdict};
use crate::error::Result;
use crate::models::{Graph, NodeId};

/// Checks Ore's condition: every pair of non-adjacent vertices has degree
/// sum at least n.
///
/// Each unordered non-adjacent pair is visited once as `(u, v)` with `u`
/// before `v` in insertion order; the first pair with
/// `degree(u) + degree(v) < n` is the witness.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::theorems::check_ore;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C", "D"] {
///     b.add_node(l).unwrap();
/// }
/// for (u, v) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")] {
///     b.add_edge(u, v, 1.0).unwrap();
/// }
/// let g = b.build();
///
/// // Non-adjacent pairs (A, C) and (B, D) each have degree sum 4 = n.
/// assert!(check_ore(&g).unwrap().is_certified());
/// ```
pub fn check_ore(graph: &Graph) -> Result<Verdict<(NodeId, NodeId)>> {
    let n = require_min_nodes(graph, Theorem::Ore)?;
    let nodes: Vec<NodeId> = graph.nodes().collect();

    for (i, &u) in nodes.iter().enumerate() {
        for &v in &nodes[i + 1..] {
            if graph.has_edge(u, v) {
                continue;
            }
            let sum = graph.degree(u) + graph.degree(v);
            if sum < n {
                debug!(
                    u = graph.label(u),
                    v = graph.label(v),
                    sum,
                    n,
                    "Ore condition violated"
                );
                return Ok(Verdict::NotCertified((u, v)));
            }
        }
    }
    Ok(Verdict::Certified)
}
