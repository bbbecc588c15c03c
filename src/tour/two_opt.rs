//! 2-opt tour improvement.
//!
//! # Algorithm
//!
//! For each pair of edges (i, i+1) and (j, j+1) in a tour, compute the
//! change in cost from reversing the segment between them:
//!
//! ```text
//! delta = d(r[i], r[j]) + d(r[i+1], r[j+1]) - d(r[i], r[i+1]) - d(r[j], r[j+1])
//! ```
//!
//! If delta < 0, reverse the segment and accept the improvement. Repeat
//! until no further improvements are found (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

use super::route_distance;

/// Applies 2-opt improvement to a tour that starts and ends at `start`.
///
/// `route` lists the other nodes in visiting order. Returns the improved
/// order and the total tour cost. Requires a symmetric matrix.
///
/// # Examples
///
/// ```
/// use road_graph::distance::DistanceMatrix;
/// use road_graph::tour::{route_distance, two_opt_improve};
///
/// // Unit square 0-1-2-3; the order 0,2,1,3 crosses itself.
/// let s = 2f64.sqrt();
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![0.0, 1.0, s, 1.0, 1.0, 0.0, 1.0, s, s, 1.0, 0.0, 1.0, 1.0, s, 1.0, 0.0],
/// )
/// .unwrap();
/// let (improved, cost) = two_opt_improve(&[2, 1, 3], 0, &dm);
/// assert!(cost < route_distance(&[2, 1, 3], 0, &dm));
/// assert!((cost - 4.0).abs() < 1e-10);
/// assert_eq!(improved.len(), 3);
/// ```
pub fn two_opt_improve(
    route: &[usize],
    start: usize,
    distances: &DistanceMatrix,
) -> (Vec<usize>, f64) {
    if route.len() < 2 {
        return (route.to_vec(), route_distance(route, start, distances));
    }

    let mut current = route.to_vec();
    let n = current.len();
    let mut improved = true;

    while improved {
        improved = false;
        for i in 0..n - 1 {
            for j in i + 1..n {
                if two_opt_delta(&current, start, distances, i, j) < -1e-10 {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let cost = route_distance(&current, start, distances);
    (current, cost)
}

/// Cost change from reversing `route[i..=j]`.
///
/// Before: ...-prev_i - route[i] - ... - route[j] - next_j-...
/// After:  ...-prev_i - route[j] - ... - route[i] - next_j-...
fn two_opt_delta(
    route: &[usize],
    start: usize,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> f64 {
    let n = route.len();
    let prev_i = if i == 0 { start } else { route[i - 1] };
    let next_j = if j == n - 1 { start } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[f64]) -> DistanceMatrix {
        let n = points.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (points[i] - points[j]).abs());
            }
        }
        dm
    }

    fn plane(points: &[(f64, f64)]) -> DistanceMatrix {
        let n = points.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = line(&[0.0, 1.0, 2.0, 3.0]);
        let (improved, cost) = two_opt_improve(&[1, 2, 3], 0, &dm);
        assert_eq!(improved, vec![1, 2, 3]);
        assert!((cost - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_uncrosses() {
        let dm = plane(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (1.0, -1.0)]);
        // 0 → (1,1) → (1,-1) → (2,0) → 0 crosses itself.
        let before = route_distance(&[1, 3, 2], 0, &dm);
        let (_, after) = two_opt_improve(&[1, 3, 2], 0, &dm);
        assert!(after < before - 1e-10);
    }

    #[test]
    fn test_2opt_empty_route() {
        let dm = line(&[0.0, 1.0]);
        let (improved, cost) = two_opt_improve(&[], 0, &dm);
        assert!(improved.is_empty());
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_2opt_single_node() {
        let dm = line(&[0.0, 1.0, 2.0]);
        let (improved, cost) = two_opt_improve(&[2], 0, &dm);
        assert_eq!(improved, vec![2]);
        assert!((cost - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let dm = plane(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
        ]);
        let initial = vec![1, 4, 2, 3];
        let before = route_distance(&initial, 0, &dm);
        let (improved, after) = two_opt_improve(&initial, 0, &dm);
        assert!(after <= before + 1e-10);
        let mut sorted = improved;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }
}
