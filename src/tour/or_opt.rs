//! Or-opt tour improvement.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive nodes to a different
//! position of the tour, keeping their orientation. Each pass applies the
//! best improving move for one segment length; passes repeat until none
//! improves.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::DistanceMatrix;

/// Longest segment considered for relocation.
const MAX_SEGMENT: usize = 3;

/// Applies Or-opt improvement to a tour that starts and ends at `start`.
///
/// Returns the improved order (excluding `start`) and the total tour cost.
///
/// # Examples
///
/// ```
/// use road_graph::distance::DistanceMatrix;
/// use road_graph::tour::{or_opt_improve, route_distance};
///
/// // Points at 0, 1, 2, 3 on a line; visiting 2 before 1 doubles back.
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let (improved, cost) = or_opt_improve(&[2, 1, 3], 0, &dm);
/// assert!(cost <= route_distance(&[2, 1, 3], 0, &dm));
/// assert!((cost - 6.0).abs() < 1e-10);
/// assert_eq!(improved.len(), 3);
/// ```
pub fn or_opt_improve(
    route: &[usize],
    start: usize,
    distances: &DistanceMatrix,
) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    let mut improved = current.len() >= 2;

    while improved {
        improved = false;
        for seg_len in 1..=MAX_SEGMENT.min(current.len() - 1) {
            if try_or_opt_pass(&mut current, start, distances, seg_len) {
                improved = true;
            }
        }
    }

    let cost = route_distance(&current, start, distances);
    (current, cost)
}

/// Computes the total cost of a closed tour:
/// `start → route[0] → ... → route[n-1] → start`.
pub fn route_distance(route: &[usize], start: usize, distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };
    let mut dist = distances.get(start, first);
    for w in route.windows(2) {
        dist += distances.get(w[0], w[1]);
    }
    dist += distances.get(last, start);
    dist
}

/// One pass of Or-opt for a given segment length. Returns true if improved.
fn try_or_opt_pass(
    route: &mut Vec<usize>,
    start: usize,
    distances: &DistanceMatrix,
    seg_len: usize,
) -> bool {
    let n = route.len();
    if n < seg_len + 1 {
        return false;
    }

    let mut best_delta = -1e-10;
    let mut best_move: Option<(usize, usize)> = None;

    for from in 0..=(n - seg_len) {
        let prev = if from == 0 { start } else { route[from - 1] };
        let after = if from + seg_len == n {
            start
        } else {
            route[from + seg_len]
        };
        let seg_first = route[from];
        let seg_last = route[from + seg_len - 1];

        // Old edges prev→seg_first and seg_last→after become prev→after.
        let removal_gain = distances.get(prev, seg_first) + distances.get(seg_last, after)
            - distances.get(prev, after);

        // `to` is a gap in the original order: between route[to-1] and
        // route[to], with `start` standing in past either end.
        for to in 0..=n {
            if to >= from && to <= from + seg_len {
                continue;
            }
            let ins_prev = if to == 0 { start } else { route[to - 1] };
            let ins_next = if to == n { start } else { route[to] };

            let insertion_cost = distances.get(ins_prev, seg_first)
                + distances.get(seg_last, ins_next)
                - distances.get(ins_prev, ins_next);

            let delta = insertion_cost - removal_gain;
            if delta < best_delta {
                best_delta = delta;
                best_move = Some((from, to));
            }
        }
    }

    let Some((from, to)) = best_move else {
        return false;
    };
    let segment: Vec<usize> = route.drain(from..from + seg_len).collect();
    let insert_at = if to > from { to - seg_len } else { to };
    route.splice(insert_at..insert_at, segment);
    true
}
