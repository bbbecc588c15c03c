//! Tour type.

use super::{Graph, NodeId};

/// A closed tour visiting every node of a graph exactly once.
///
/// `order` lists each node once; the return from the last node to the first
/// is implicit. A tour built with [`Tour::cycle`] is a Hamiltonian cycle:
/// every leg is a direct edge. Otherwise consecutive nodes need not share an
/// edge, each leg follows the shortest path between them, and `walk` spells
/// out that closed walk through real edges, starting and ending at the first
/// node.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::tour::approximate_tour;
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "B", 1.0).unwrap();
/// b.add_edge("B", "C", 1.0).unwrap();
/// b.add_edge("C", "A", 1.0).unwrap();
/// let g = b.build();
///
/// let tour = approximate_tour(&g).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.cost(), 3.0);
/// assert_eq!(tour.walk().first(), tour.walk().last());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<NodeId>,
    cost: f64,
    walk: Vec<NodeId>,
    cycle: bool,
}

impl Tour {
    /// Creates a tour whose legs follow shortest paths, from its visiting
    /// order, total cost, and expanded walk.
    pub fn new(order: Vec<NodeId>, cost: f64, walk: Vec<NodeId>) -> Self {
        Self {
            order,
            cost,
            walk,
            cycle: false,
        }
    }

    /// Creates a Hamiltonian cycle: every leg of `order`, including the
    /// return, is a direct edge and `cost` is the sum of their weights.
    pub fn cycle(order: Vec<NodeId>, cost: f64) -> Self {
        let walk = order.iter().chain(order.first()).copied().collect();
        Self {
            order,
            cost,
            walk,
            cycle: true,
        }
    }

    /// The tour over no nodes.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0, Vec::new())
    }

    /// Returns `true` if every leg is a direct edge of the graph.
    pub fn is_cycle(&self) -> bool {
        self.cycle
    }

    /// Visiting order; every node appears once.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Total cost: direct edge weights for a cycle, otherwise each leg
    /// charged its shortest-path distance.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Closed walk through real edges, first node repeated at the end.
    pub fn walk(&self) -> &[NodeId] {
        &self.walk
    }

    /// Number of nodes visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visiting order as labels.
    pub fn labels<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        graph.labels_of(&self.order)
    }

    /// Sum of edge weights along [`walk`](Self::walk).
    ///
    /// Consecutive walk nodes always share an edge of the graph the tour was
    /// built from, so this equals [`cost`](Self::cost) up to rounding.
    pub fn walk_cost(&self, graph: &Graph) -> f64 {
        self.walk
            .windows(2)
            .filter_map(|leg| graph.edge_weight(leg[0], leg[1]))
            .sum()
    }

    /// Closed walk as labels.
    pub fn walk_labels<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        graph.labels_of(&self.walk)
    }
}
