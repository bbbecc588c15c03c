//! Sufficient conditions for Hamiltonicity.
//!
//! - [`check_dirac`] — Dirac (1952): every vertex has degree ≥ n/2
//! - [`check_ore`] — Ore (1960): every non-adjacent pair has degree sum ≥ n
//!
//! Both theorems are sufficient, not necessary. A
//! [`Verdict::NotCertified`] result means only that the theorem does not
//! certify a Hamiltonian cycle; the graph may still have one.

mod dirac;
mod ore;
mod verdict;

pub use dirac::check_dirac;
pub use ore::check_ore;
pub use verdict::{Theorem, TheoremReport, Verdict};

use crate::error::{GraphError, Result};
use crate::models::Graph;

/// Both theorems require at least three vertices.
const MIN_NODES: usize = 3;

fn require_min_nodes(graph: &Graph, theorem: Theorem) -> Result<usize> {
    let n = graph.num_nodes();
    if n < MIN_NODES {
        return Err(GraphError::IndeterminateTheorem {
            theorem: theorem.name(),
            nodes: n,
        });
    }
    Ok(n)
}
