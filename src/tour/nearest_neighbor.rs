//! Nearest-neighbor tour construction.
//!
//! Builds a tour greedily: starting from the start node, always move to the
//! nearest unvisited node.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;

/// Constructs a visiting order with the nearest-neighbor heuristic.
///
/// Returns the nodes after `start` in visiting order (`start` itself is
/// excluded, like a depot). Ties go to the lower index.
///
/// # Examples
///
/// ```
/// use road_graph::distance::DistanceMatrix;
/// use road_graph::tour::nearest_neighbor_route;
///
/// // Points at 0, 10, 1 on a line.
/// let dm = DistanceMatrix::from_data(
///     3,
///     vec![0.0, 10.0, 1.0, 10.0, 0.0, 9.0, 1.0, 9.0, 0.0],
/// )
/// .unwrap();
/// assert_eq!(nearest_neighbor_route(&dm, 0), vec![2, 1]);
/// ```
pub fn nearest_neighbor_route(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut route = Vec::with_capacity(unvisited.len());
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        route.push(next);
        current = next;
    }
    route
}
