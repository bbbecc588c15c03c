//! Undirected weighted graph and its builder.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::{EdgeDefect, GraphError, Result};

/// Dense identifier of a node, assigned in insertion order.
///
/// Every deterministic iteration in this crate (theorem witnesses, Dijkstra
/// tie-breaks, tour construction) follows ascending `NodeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of this node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Normalized key of an undirected edge: `(min(u, v), max(u, v))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    /// Creates the key for the unordered pair `{u, v}`.
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self(u, v)
        } else {
            Self(v, u)
        }
    }

    /// The endpoint with the smaller id.
    pub fn low(self) -> NodeId {
        self.0
    }

    /// The endpoint with the larger id.
    pub fn high(self) -> NodeId {
        self.1
    }
}

/// An undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Normalized endpoints.
    pub key: EdgeKey,
    /// Non-negative finite weight.
    pub weight: f64,
}

/// Accumulates nodes and edges, validating each one, then freezes them into
/// an immutable [`Graph`].
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node("A").unwrap();
/// builder.add_node("B").unwrap();
/// builder.add_edge("A", "B", 2.5).unwrap();
/// assert!(builder.add_edge("B", "A", 1.0).is_err()); // duplicate
///
/// let graph = builder.build();
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.num_edges(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with a unique label and returns its id.
    pub fn add_node(&mut self, label: impl Into<String>) -> Result<NodeId> {
        let label = label.into();
        if self.graph.index.contains_key(&label) {
            return Err(GraphError::DuplicateNode(label));
        }
        let id = NodeId(self.graph.labels.len());
        self.graph.index.insert(label.clone(), id);
        self.graph.labels.push(label);
        self.graph.adjacency.push(BTreeMap::new());
        Ok(id)
    }

    /// Adds an undirected edge between two existing nodes.
    ///
    /// Self-loops, duplicate pairs (in either orientation), and negative or
    /// non-finite weights are rejected with [`GraphError::InvalidEdge`].
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> Result<()> {
        let invalid = |reason| GraphError::InvalidEdge {
            u: u.to_string(),
            v: v.to_string(),
            reason,
        };

        let a = self
            .graph
            .node_id(u)
            .ok_or_else(|| invalid(EdgeDefect::UnknownEndpoint(u.to_string())))?;
        let b = self
            .graph
            .node_id(v)
            .ok_or_else(|| invalid(EdgeDefect::UnknownEndpoint(v.to_string())))?;
        if a == b {
            return Err(invalid(EdgeDefect::SelfLoop));
        }
        if !weight.is_finite() {
            return Err(invalid(EdgeDefect::NonFiniteWeight));
        }
        if weight < 0.0 {
            return Err(invalid(EdgeDefect::NegativeWeight(weight)));
        }

        let key = EdgeKey::new(a, b);
        if self.graph.edges.contains_key(&key) {
            return Err(invalid(EdgeDefect::Duplicate));
        }
        self.graph.insert_edge(key, weight);
        Ok(())
    }

    /// Freezes the graph.
    pub fn build(self) -> Graph {
        debug!(
            nodes = self.graph.num_nodes(),
            edges = self.graph.num_edges(),
            "graph built"
        );
        self.graph
    }
}

/// An immutable undirected weighted graph with string-labelled nodes.
///
/// Built through [`GraphBuilder`]; all algorithms take it by shared
/// reference.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// for label in ["A", "B", "C"] {
///     b.add_node(label).unwrap();
/// }
/// b.add_edge("A", "B", 1.0).unwrap();
/// b.add_edge("B", "C", 2.0).unwrap();
/// let g = b.build();
///
/// let a = g.node_id("A").unwrap();
/// let bb = g.node_id("B").unwrap();
/// assert_eq!(g.degree(bb), 2);
/// assert_eq!(g.edge_weight(bb, a), Some(1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<BTreeMap<NodeId, f64>>,
    edges: BTreeMap<EdgeKey, f64>,
}

impl Graph {
    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId)
    }

    /// Looks up the id of a labelled node.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Looks up the id of a labelled node, failing with
    /// [`GraphError::UnknownNode`].
    pub fn require(&self, label: &str) -> Result<NodeId> {
        self.node_id(label)
            .ok_or_else(|| GraphError::UnknownNode(label.to_string()))
    }

    /// Returns `true` if `id` belongs to this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.labels.len()
    }

    /// Label of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.0]
    }

    /// Labels of a node sequence.
    pub fn labels_of(&self, ids: &[NodeId]) -> Vec<&str> {
        ids.iter().map(|&id| self.label(id)).collect()
    }

    /// Neighbors of `u` with edge weights, in ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if `u` does not belong to this graph.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency[u.0].iter().map(|(&v, &w)| (v, w))
    }

    /// Number of edges incident to `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` does not belong to this graph.
    pub fn degree(&self, u: NodeId) -> usize {
        self.adjacency[u.0].len()
    }

    /// Weight of the edge `{u, v}`, or `None` if absent.
    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.edges.get(&EdgeKey::new(u, v)).copied()
    }

    /// Returns `true` if an edge joins `u` and `v`.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    /// Edges ordered by normalized key.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|(&key, &weight)| Edge { key, weight })
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Dense weighted adjacency matrix: the edge weight where an edge
    /// exists, `0.0` elsewhere (including the diagonal).
    pub fn adjacency_matrix(&self) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::new(self.num_nodes());
        for edge in self.edges() {
            let (a, b) = (edge.key.low().0, edge.key.high().0);
            matrix.set(a, b, edge.weight);
            matrix.set(b, a, edge.weight);
        }
        matrix
    }

    /// Copy of the node set with no edges.
    pub(crate) fn without_edges(&self) -> Self {
        Self {
            labels: self.labels.clone(),
            index: self.index.clone(),
            adjacency: vec![BTreeMap::new(); self.labels.len()],
            edges: BTreeMap::new(),
        }
    }

    /// Inserts a pre-validated edge.
    pub(crate) fn insert_edge(&mut self, key: EdgeKey, weight: f64) {
        self.adjacency[key.low().0].insert(key.high(), weight);
        self.adjacency[key.high().0].insert(key.low(), weight);
        self.edges.insert(key, weight);
    }
}
