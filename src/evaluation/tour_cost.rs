//! Tour evaluation over the edges of a graph.

use crate::error::{GraphError, Result};
use crate::models::{Graph, NodeId};

fn check_nodes(graph: &Graph, order: &[NodeId]) -> Result<()> {
    match order.iter().find(|&&id| !graph.contains(id)) {
        Some(id) => Err(GraphError::UnknownNode(id.to_string())),
        None => Ok(()),
    }
}

/// Sums the edge weights of a closed tour, including the return from the
/// last node to the first.
///
/// Every consecutive pair must be joined by an edge of `graph`; otherwise
/// the result is [`GraphError::MissingEdge`]. Empty and single-node tours
/// cost 0.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::evaluation::tour_cost;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "B", 1.0).unwrap();
/// b.add_edge("B", "C", 2.0).unwrap();
/// let g = b.build();
///
/// let order: Vec<_> = g.nodes().collect();
/// assert!(tour_cost(&g, &order).is_err()); // no edge C-A
/// ```
pub fn tour_cost(graph: &Graph, order: &[NodeId]) -> Result<f64> {
    check_nodes(graph, order)?;
    if order.len() < 2 {
        return Ok(0.0);
    }

    let next = order.iter().skip(1).chain(order.first());
    let mut total = 0.0;
    for (&from, &to) in order.iter().zip(next) {
        total += graph
            .edge_weight(from, to)
            .ok_or_else(|| GraphError::MissingEdge {
                from: graph.label(from).to_string(),
                to: graph.label(to).to_string(),
            })?;
    }
    Ok(total)
}

/// Returns `true` if `order` visits every node of `graph` exactly once and
/// each consecutive pair (including last to first) shares an edge.
///
/// Graphs with fewer than three nodes have no Hamiltonian cycle.
pub fn is_hamiltonian_cycle(graph: &Graph, order: &[NodeId]) -> bool {
    let n = graph.num_nodes();
    if n < 3 || order.len() != n || check_nodes(graph, order).is_err() {
        return false;
    }
    let mut seen = vec![false; n];
    for id in order {
        if std::mem::replace(&mut seen[id.index()], true) {
            return false;
        }
    }
    tour_cost(graph, order).is_ok()
}
