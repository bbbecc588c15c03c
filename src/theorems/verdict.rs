//! Theorem verdicts and their human-readable reports.

use std::fmt;

use crate::error::{GraphError, Result};
use crate::models::{Graph, NodeId};

/// Which sufficient condition was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theorem {
    /// Every vertex has degree ≥ n/2.
    Dirac,
    /// Every non-adjacent pair has degree sum ≥ n.
    Ore,
}

impl Theorem {
    /// Name of the theorem's author.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dirac => "Dirac",
            Self::Ore => "Ore",
        }
    }
}

impl fmt::Display for Theorem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a sufficient-condition check.
///
/// `W` is the witness of the first violation: a node for Dirac, a node pair
/// for Ore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<W> {
    /// The condition holds; the graph is Hamiltonian.
    Certified,
    /// The condition fails at `W`; Hamiltonicity is not certified either way.
    NotCertified(W),
}

impl<W> Verdict<W> {
    /// Returns `true` if the theorem certifies a Hamiltonian cycle.
    pub fn is_certified(&self) -> bool {
        matches!(self, Self::Certified)
    }

    /// The first violation found, if any.
    pub fn witness(&self) -> Option<&W> {
        match self {
            Self::Certified => None,
            Self::NotCertified(w) => Some(w),
        }
    }
}

/// A verdict (or indeterminate outcome) rendered for display.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::theorems::{check_dirac, Theorem, TheoremReport};
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C"] {
///     b.add_node(l).unwrap();
/// }
/// b.add_edge("A", "B", 1.0).unwrap();
/// let g = b.build();
///
/// let report = TheoremReport::dirac(&g, check_dirac(&g));
/// assert!(!report.certified);
/// assert!(!report.indeterminate);
/// assert_eq!(report.theorem, Theorem::Dirac);
/// assert!(report.message.contains("Vertex A"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheoremReport {
    /// The theorem evaluated.
    pub theorem: Theorem,
    /// `true` only when the theorem certifies a Hamiltonian cycle.
    pub certified: bool,
    /// `true` when the theorem could not be applied at all, such as on a
    /// graph with fewer than three vertices.
    pub indeterminate: bool,
    /// Diagnostic sentence.
    pub message: String,
}

impl TheoremReport {
    /// Renders the outcome of [`check_dirac`](super::check_dirac).
    pub fn dirac(graph: &Graph, outcome: Result<Verdict<NodeId>>) -> Self {
        Self::render(Theorem::Dirac, outcome, |&node| {
            format!("Vertex {} violates Dirac's condition", graph.label(node))
        })
    }

    /// Renders the outcome of [`check_ore`](super::check_ore).
    pub fn ore(graph: &Graph, outcome: Result<Verdict<(NodeId, NodeId)>>) -> Self {
        Self::render(Theorem::Ore, outcome, |&(u, v)| {
            format!(
                "Pair ({}, {}) violates Ore's condition",
                graph.label(u),
                graph.label(v)
            )
        })
    }

    fn render<W>(
        theorem: Theorem,
        outcome: Result<Verdict<W>>,
        describe: impl FnOnce(&W) -> String,
    ) -> Self {
        let (certified, indeterminate, message) = match outcome {
            Ok(Verdict::Certified) => (
                true,
                false,
                format!("Graph satisfies {theorem}'s condition and is Hamiltonian"),
            ),
            Ok(Verdict::NotCertified(w)) => (
                false,
                false,
                format!(
                    "{}; {theorem}'s theorem does not certify a Hamiltonian cycle",
                    describe(&w)
                ),
            ),
            Err(GraphError::IndeterminateTheorem { nodes, .. }) => (
                false,
                true,
                format!("Graph has {nodes} vertices; {theorem}'s theorem needs at least 3"),
            ),
            Err(e) => (false, true, e.to_string()),
        };
        Self {
            theorem,
            certified,
            indeterminate,
            message,
        }
    }
}

impl fmt::Display for TheoremReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.certified, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GraphBuilder;
    use crate::theorems::{check_dirac, check_ore};

    fn pair_graph() -> Graph {
        let mut b = GraphBuilder::new();
        b.add_node("P").expect("unique");
        b.add_node("Q").expect("unique");
        b.build()
    }

    #[test]
    fn test_verdict_accessors() {
        let v: Verdict<u8> = Verdict::NotCertified(3);
        assert!(!v.is_certified());
        assert_eq!(v.witness(), Some(&3));
        assert_eq!(Verdict::<u8>::Certified.witness(), None);
    }

    #[test]
    fn test_report_messages() {
        let g = pair_graph();
        let p = g.node_id("P").expect("exists");
        let q = g.node_id("Q").expect("exists");

        let ok = TheoremReport::ore(&g, Ok(Verdict::Certified));
        assert!(ok.certified);
        assert!(!ok.indeterminate);
        assert_eq!(
            ok.message,
            "Graph satisfies Ore's condition and is Hamiltonian"
        );

        let bad = TheoremReport::ore(&g, Ok(Verdict::NotCertified((p, q))));
        assert!(!bad.certified);
        assert!(!bad.indeterminate);
        assert!(bad.message.starts_with("Pair (P, Q) violates Ore's condition"));
        assert!(bad.message.contains("does not certify"));
        assert!(!bad.message.contains("not Hamiltonian"));

        let small = TheoremReport::dirac(
            &g,
            Err(GraphError::IndeterminateTheorem {
                theorem: "Dirac",
                nodes: 2,
            }),
        );
        assert!(!small.certified);
        assert!(small.indeterminate);
        assert!(small.message.contains("needs at least 3"));
        assert_eq!(small.to_string(), format!("false {}", small.message));
    }

    #[test]
    fn test_small_graph_report_is_indeterminate() {
        let g = pair_graph();
        let dirac = TheoremReport::dirac(&g, check_dirac(&g));
        assert!(dirac.indeterminate);
        assert!(!dirac.certified);
        let ore = TheoremReport::ore(&g, check_ore(&g));
        assert!(ore.indeterminate);
    }
}
