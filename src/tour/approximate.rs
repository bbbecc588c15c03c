//! Approximate minimum-cost Hamiltonian cycle.

use tracing::{debug, info};

use super::hamiltonian::find_hamiltonian_cycle;
use super::{nearest_neighbor_route, or_opt_improve, route_distance, two_opt_improve};
use crate::distance::DistanceMatrix;
use crate::error::{GraphError, Result};
use crate::evaluation::{is_hamiltonian_cycle, tour_cost};
use crate::models::{Graph, NodeId, Tour};
use crate::shortest_path::{all_pairs_shortest_paths, AllPairsShortestPaths};

/// Smallest cost decrease that counts as progress between rounds.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Node expansions allowed to the backtracking cycle search.
const CYCLE_SEARCH_BUDGET: usize = 100_000;

/// Builds an approximate minimum-cost tour starting at the first node.
///
/// See [`approximate_tour_from`].
pub fn approximate_tour(graph: &Graph) -> Result<Tour> {
    match graph.nodes().next() {
        Some(start) => approximate_tour_from(graph, start),
        None => Ok(Tour::empty()),
    }
}

/// Builds an approximate minimum-cost tour starting at `start`.
///
/// The search runs on a road matrix that charges direct edges their weight
/// and every other pair its shortest-path distance plus a penalty larger
/// than the whole edge set:
///
/// 1. nearest-neighbor construction from `start`,
/// 2. 2-opt and Or-opt rounds until neither lowers the cost,
/// 3. if a leg still lacks an edge, a bounded backtracking search seeds the
///    same local search with a Hamiltonian cycle.
///
/// The result is a [`Tour::cycle`] whose cost equals
/// [`tour_cost`](crate::evaluation::tour_cost). When no Hamiltonian cycle is
/// found, the same heuristic runs on the metric closure instead, and each leg
/// is expanded into its shortest path to form the closed walk.
///
/// Fails with [`GraphError::DisconnectedGraph`] if some node cannot be
/// reached from `start`.
///
/// # Examples
///
/// ```
/// use road_graph::models::GraphBuilder;
/// use road_graph::tour::{approximate_tour_from, tour_cost};
///
/// let mut b = GraphBuilder::new();
/// for l in ["A", "B", "C", "D"] {
///     b.add_node(l).unwrap();
/// }
/// for (u, v, w) in [("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("D", "A", 1.0), ("A", "C", 5.0)] {
///     b.add_edge(u, v, w).unwrap();
/// }
/// let g = b.build();
///
/// let tour = approximate_tour_from(&g, g.node_id("B").unwrap()).unwrap();
/// assert!(tour.is_cycle());
/// assert_eq!(tour.order()[0], g.node_id("B").unwrap());
/// assert_eq!(tour.cost(), 4.0);
/// assert_eq!(tour_cost(&g, tour.order()).unwrap(), 4.0);
/// ```
pub fn approximate_tour_from(graph: &Graph, start: NodeId) -> Result<Tour> {
    if !graph.contains(start) {
        return Err(GraphError::UnknownNode(start.to_string()));
    }

    let paths = all_pairs_shortest_paths(graph);
    if let Some(unreachable) = graph.nodes().find(|&v| paths.distance(start, v).is_none()) {
        return Err(GraphError::DisconnectedGraph {
            start: graph.label(start).to_string(),
            unreachable: graph.label(unreachable).to_string(),
        });
    }

    let closure = paths.distance_matrix();
    if let Some(order) = road_cycle(graph, start, &closure) {
        let cost = tour_cost(graph, &order)?;
        info!(
            nodes = order.len(),
            cost,
            "Hamiltonian tour from {}",
            graph.label(start)
        );
        return Ok(Tour::cycle(order, cost));
    }

    let depot = start.index();
    let (route, cost) = improve(nearest_neighbor_route(&closure, depot), depot, &closure);
    let order = to_order(graph, start, &route);
    let walk = expand_walk(&order, &paths);

    info!(
        nodes = order.len(),
        cost,
        "no Hamiltonian cycle found; closed walk from {}",
        graph.label(start)
    );
    Ok(Tour::new(order, cost, walk))
}

/// Searches for a low-cost tour whose legs are all direct edges.
fn road_cycle(graph: &Graph, start: NodeId, closure: &DistanceMatrix) -> Option<Vec<NodeId>> {
    if graph.num_nodes() < 3 {
        return None;
    }
    let depot = start.index();
    let roads = road_matrix(graph, closure);

    let (route, _) = improve(nearest_neighbor_route(&roads, depot), depot, &roads);
    let order = to_order(graph, start, &route);
    if is_hamiltonian_cycle(graph, &order) {
        return Some(order);
    }

    debug!("local search left a missing edge; searching for a cycle");
    let cycle = find_hamiltonian_cycle(graph, start, CYCLE_SEARCH_BUDGET)?;
    let seed = cycle[1..].iter().map(|id| id.index()).collect();
    let (route, _) = improve(seed, depot, &roads);
    let order = to_order(graph, start, &route);
    if is_hamiltonian_cycle(graph, &order) {
        Some(order)
    } else {
        Some(cycle)
    }
}

/// Direct edge weights, with every missing edge charged its shortest-path
/// distance plus more than the total weight of all edges.
///
/// Any tour using a missing edge then costs more than any Hamiltonian cycle,
/// so improving moves never leave the set of cycles.
fn road_matrix(graph: &Graph, closure: &DistanceMatrix) -> DistanceMatrix {
    let penalty = 1.0 + graph.edges().map(|e| e.weight).sum::<f64>();
    let ids: Vec<NodeId> = graph.nodes().collect();
    let mut roads = DistanceMatrix::new(ids.len());
    for (i, &u) in ids.iter().enumerate() {
        for (j, &v) in ids.iter().enumerate() {
            if i != j {
                let cost = graph
                    .edge_weight(u, v)
                    .unwrap_or_else(|| closure.get(i, j) + penalty);
                roads.set(i, j, cost);
            }
        }
    }
    roads
}

/// Alternates 2-opt and Or-opt until a round gains nothing.
fn improve(mut route: Vec<usize>, depot: usize, distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut cost = route_distance(&route, depot, distances);
    debug!(cost, "initial tour");

    loop {
        let (after_two_opt, _) = two_opt_improve(&route, depot, distances);
        let (after_or_opt, improved_cost) = or_opt_improve(&after_two_opt, depot, distances);
        let progressed = improved_cost < cost - IMPROVEMENT_EPS;
        route = after_or_opt;
        cost = improved_cost;
        if !progressed {
            break;
        }
        debug!(cost, "local search round improved tour");
    }
    (route, cost)
}

/// Prepends `start` to a route of node indices.
fn to_order(graph: &Graph, start: NodeId, route: &[usize]) -> Vec<NodeId> {
    let ids: Vec<NodeId> = graph.nodes().collect();
    std::iter::once(start)
        .chain(route.iter().map(|&i| ids[i]))
        .collect()
}

/// Joins the shortest paths of every leg, including the return leg.
fn expand_walk(order: &[NodeId], paths: &AllPairsShortestPaths) -> Vec<NodeId> {
    let Some(&first) = order.first() else {
        return Vec::new();
    };
    let mut walk = vec![first];
    if order.len() < 2 {
        return walk;
    }
    let legs = order.iter().zip(order.iter().skip(1).chain(std::iter::once(&first)));
    for (&from, &to) in legs {
        if let Some(leg) = paths.path(from, to) {
            walk.extend_from_slice(&leg.nodes()[1..]);
        }
    }
    walk
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GraphBuilder;

    fn build(labels: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
        let mut b = GraphBuilder::new();
        for &l in labels {
            b.add_node(l).expect("unique");
        }
        for &(u, v, w) in edges {
            b.add_edge(u, v, w).expect("valid");
        }
        b.build()
    }

    fn assert_visits_each_once(g: &Graph, tour: &Tour) {
        let mut seen: Vec<usize> = tour.order().iter().map(|id| id.index()).collect();
        seen.sort_unstable();
        let expected: Vec<usize> = g.nodes().map(NodeId::index).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_square_with_diagonals() {
        let g = build(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 1.0),
                ("C", "D", 1.0),
                ("D", "A", 1.0),
                ("A", "C", 1.5),
                ("B", "D", 1.5),
            ],
        );
        let tour = approximate_tour(&g).expect("connected");
        assert_visits_each_once(&g, &tour);
        assert_eq!(tour.order()[0], g.node_id("A").expect("exists"));
        assert!((tour.cost() - 4.0).abs() < 1e-10);
        assert_eq!(tour_cost(&g, tour.order()).ok(), Some(tour.cost()));
    }

    #[test]
    fn test_path_graph_walk_retraces() {
        // A tree has no Hamiltonian cycle; legs fall back to shortest paths.
        let g = build(&["A", "B", "C"], &[("A", "B", 2.0), ("B", "C", 3.0)]);
        let tour = approximate_tour(&g).expect("connected");
        assert_visits_each_once(&g, &tour);
        assert!((tour.cost() - 10.0).abs() < 1e-10);
        assert_eq!(tour.walk().first(), tour.walk().last());
        assert!(!tour.is_cycle());
        assert!(tour_cost(&g, tour.order()).is_err());
        assert_eq!(tour.walk_labels(&g), vec!["A", "B", "C", "B", "A"]);
        assert!((tour.walk_cost(&g) - tour.cost()).abs() < 1e-10);
    }

    #[test]
    fn test_prefers_real_cycle_over_cheap_shortcuts() {
        // Shortcuts through A make every metric leg cheap, but the only
        // Hamiltonian cycle uses both heavy rim edges.
        let g = build(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("A", "C", 1.0),
                ("A", "D", 1.0),
                ("B", "C", 100.0),
                ("B", "D", 100.0),
            ],
        );
        let tour = approximate_tour(&g).expect("connected");
        assert!(tour.is_cycle());
        assert!(is_hamiltonian_cycle(&g, tour.order()));
        assert_eq!(tour.labels(&g), vec!["A", "C", "B", "D"]);
        assert_eq!(tour.cost(), 202.0);
        assert_eq!(tour_cost(&g, tour.order()).ok(), Some(tour.cost()));
        assert_eq!(tour.walk_labels(&g), vec!["A", "C", "B", "D", "A"]);
    }

    #[test]
    fn test_road_matrix_penalizes_missing_edges() {
        let g = build(
            &["A", "B", "C"],
            &[("A", "B", 2.0), ("B", "C", 3.0)],
        );
        let closure = all_pairs_shortest_paths(&g).distance_matrix();
        let roads = road_matrix(&g, &closure);
        assert_eq!(roads.get(0, 1), 2.0);
        assert_eq!(roads.get(1, 2), 3.0);
        // 5 by shortest path, plus 1 + (2 + 3).
        assert_eq!(roads.get(0, 2), 11.0);
        assert_eq!(roads.get(2, 0), 11.0);
    }

    #[test]
    fn test_disconnected_graph() {
        let g = build(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 1.0)],
        );
        let err = approximate_tour(&g).unwrap_err();
        assert!(matches!(
            err,
            GraphError::DisconnectedGraph { ref unreachable, .. } if unreachable == "D"
        ));
    }

    #[test]
    fn test_trivial_graphs() {
        let empty = build(&[], &[]);
        assert!(approximate_tour(&empty).expect("empty").is_empty());

        let single = build(&["A"], &[]);
        let tour = approximate_tour(&single).expect("single");
        assert_eq!(tour.len(), 1);
        assert_eq!(tour.cost(), 0.0);
        assert_eq!(tour.walk_labels(&single), vec!["A"]);
    }

    #[test]
    fn test_two_nodes_out_and_back() {
        let g = build(&["A", "B"], &[("A", "B", 2.5)]);
        let tour = approximate_tour(&g).expect("connected");
        assert_eq!(tour.cost(), 5.0);
        assert_eq!(tour.walk_labels(&g), vec!["A", "B", "A"]);
    }

    #[test]
    fn test_custom_start() {
        let g = build(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)],
        );
        let c = g.node_id("C").expect("exists");
        let tour = approximate_tour_from(&g, c).expect("connected");
        assert_eq!(tour.order()[0], c);
        assert_eq!(tour.labels(&g)[0], "C");
    }
}
