//! Paths through a graph.

use super::{Graph, NodeId};

/// An ordered node sequence where consecutive nodes share an edge, together
/// with the total weight of the traversed edges.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::shortest_path::shortest_path;
///
/// let mut b = GraphBuilder::new();
/// b.add_node("A").unwrap();
/// b.add_node("B").unwrap();
/// b.add_edge("A", "B", 4.0).unwrap();
/// let g = b.build();
///
/// let a = g.node_id("A").unwrap();
/// let bb = g.node_id("B").unwrap();
/// let path = shortest_path(&g, a, bb).unwrap();
/// assert_eq!(path.labels(&g), vec!["A", "B"]);
/// assert_eq!(path.cost(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: f64,
}

impl Path {
    /// Creates a path from its node sequence and total cost.
    pub fn new(nodes: Vec<NodeId>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    /// The zero-cost path that stays at `node`.
    pub fn trivial(node: NodeId) -> Self {
        Self::new(vec![node], 0.0)
    }

    /// Node sequence from origin to destination.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Sum of traversed edge weights.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// First node.
    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node.
    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of edges traversed.
    pub fn num_hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Node labels in path order.
    pub fn labels<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        graph.labels_of(&self.nodes)
    }
}
