//! Dirac's condition.

use tracing::debug;

use super::{require_min_nodes, Theorem, Verdict};
use crate::error::Result;
use crate::models::{Graph, NodeId};

/// Checks Dirac's condition: every vertex has degree at least n/2.
///
/// Vertices are scanned in insertion order and the first one with
/// `degree < n/2` is returned as the witness. Fails with
/// [`GraphError::IndeterminateTheorem`](crate::error::GraphError::IndeterminateTheorem)
/// for graphs with fewer than three vertices.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::theorems::check_dirac;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "B", 1.0).unwrap();
/// b.add_edge("B", "C", 2.0).unwrap();
/// b.add_edge("A", "C", 3.0).unwrap();
/// let g = b.build();
///
/// assert!(check_dirac(&g).unwrap().is_certified());
/// ```
pub fn check_dirac(graph: &Graph) -> Result<Verdict<NodeId>> {
    let n = require_min_nodes(graph, Theorem::Dirac)?;
    let half = n as f64 / 2.0;

    for node in graph.nodes() {
        let degree = graph.degree(node);
        if (degree as f64) < half {
            debug!(node = graph.label(node), degree, n, "Dirac condition violated");
            return Ok(Verdict::NotCertified(node));
        }
    }
    Ok(Verdict::Certified)
}
