//! Backtracking search for a Hamiltonian cycle.
//!
//! # Algorithm
//!
//! Depth-first extension of a simple path from the start node, trying the
//! cheapest incident edge first (ties by lower id). A full-length path closes
//! into a cycle when its last node is adjacent to the start.
//!
//! # Complexity
//!
//! Exponential in the worst case, so the search stops after a fixed number
//! of node expansions.

use tracing::debug;

use crate::models::{Graph, NodeId};

/// Neighbors of `u`, ordered so that `pop` yields the cheapest edge first.
fn cheapest_last(graph: &Graph, u: NodeId) -> Vec<NodeId> {
    let mut next: Vec<(NodeId, f64)> = graph.neighbors(u).collect();
    next.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    next.into_iter().map(|(v, _)| v).collect()
}

/// Finds a Hamiltonian cycle through `start`, listed from `start` with the
/// return edge implicit.
///
/// Returns `None` if the graph has fewer than three nodes, if no cycle
/// exists, or if `budget` expansions pass without finding one.
pub(crate) fn find_hamiltonian_cycle(
    graph: &Graph,
    start: NodeId,
    budget: usize,
) -> Option<Vec<NodeId>> {
    let n = graph.num_nodes();
    if n < 3 || !graph.contains(start) {
        return None;
    }

    let mut on_path = vec![false; n];
    on_path[start.index()] = true;
    let mut path = vec![start];
    let mut frontier = vec![cheapest_last(graph, start)];
    let mut expansions = 0usize;

    while let Some(candidates) = frontier.last_mut() {
        let Some(next) = candidates.pop() else {
            frontier.pop();
            if let Some(done) = path.pop() {
                on_path[done.index()] = false;
            }
            continue;
        };
        if on_path[next.index()] {
            continue;
        }

        expansions += 1;
        if expansions > budget {
            debug!(budget, "Hamiltonian cycle search gave up");
            return None;
        }

        path.push(next);
        on_path[next.index()] = true;
        if path.len() == n {
            if graph.has_edge(next, start) {
                debug!(expansions, "Hamiltonian cycle found");
                return Some(path);
            }
            path.pop();
            on_path[next.index()] = false;
            continue;
        }
        frontier.push(cheapest_last(graph, next));
    }
    None
}
