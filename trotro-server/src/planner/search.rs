//! Minimum-fare path search over the route graph.
//!
//! Classic Dijkstra over non-negative fares: a binary-heap frontier keyed
//! by best-known cost, a lazily populated distance map, and a predecessor
//! map recording the edge used to reach each stop, walked backwards to
//! reconstruct the path once the destination is settled.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace, warn};

use crate::domain::{RouteStep, StopId};
use crate::graph::{Edge, RouteGraph};

use super::config::SearchConfig;

/// The result of a successful path search.
///
/// A derived, transient value: the step payloads of the edges on the
/// cheapest path, in traversal order, plus the fare total. A search from a
/// stop to itself yields a zero-step, zero-fare result, which is distinct
/// from finding no path at all.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// The steps of the path, in traversal order.
    pub steps: Vec<RouteStep>,

    /// Sum of the step fares.
    pub total_fare: f64,
}

impl PathResult {
    /// The degenerate result for a search from a stop to itself.
    pub fn empty() -> Self {
        Self {
            steps: Vec::new(),
            total_fare: 0.0,
        }
    }

    /// Number of legs in the path.
    pub fn leg_count(&self) -> usize {
        self.steps.len()
    }
}

/// Fare cost with a total order, for use as a heap key.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Frontier entry: a stop and the cost it was inserted with.
///
/// Entries become stale when a cheaper cost for the same stop is found
/// later; stale entries are skipped at pop time rather than removed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    stop: StopId,
    cost: Cost,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap becomes a min-heap by cost. Equal
        // costs are broken by lexicographic stop id, smallest first, so
        // search order is deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.stop.cmp(&self.stop))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimum-total-fare path between two stops.
///
/// Returns `None` when no connecting path exists, when `start` is unknown
/// to the graph, or when the search exceeds the configured settling limit.
/// "No route" is an ordinary outcome for the caller to present, not an
/// error.
pub fn find_shortest_path(
    graph: &RouteGraph,
    start: &StopId,
    end: &StopId,
    config: &SearchConfig,
) -> Option<PathResult> {
    if start == end {
        return Some(PathResult::empty());
    }

    if !graph.contains_stop(start) {
        debug!(start = %start, "start stop unknown to graph");
        return None;
    }

    let mut distances: HashMap<StopId, f64> = HashMap::new();
    let mut came_from: HashMap<StopId, (StopId, Edge)> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut settled = 0usize;

    distances.insert(start.clone(), 0.0);
    frontier.push(FrontierEntry {
        stop: start.clone(),
        cost: Cost(0.0),
    });

    while let Some(entry) = frontier.pop() {
        let current_distance = match distances.get(&entry.stop) {
            Some(d) if *d < entry.cost.0 => continue, // stale entry
            Some(d) => *d,
            None => continue,
        };

        if &entry.stop == end {
            let result = reconstruct(&came_from, start, end);
            trace!(
                start = %start,
                end = %end,
                legs = result.leg_count(),
                total_fare = result.total_fare,
                settled,
                "path found"
            );
            return Some(result);
        }

        settled += 1;
        if settled > config.max_settled_stops {
            warn!(
                start = %start,
                end = %end,
                limit = config.max_settled_stops,
                "search abandoned: settling limit reached"
            );
            return None;
        }

        for edge in graph.neighbors(&entry.stop) {
            let candidate = current_distance + edge.weight;
            let best = distances.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if candidate < best {
                distances.insert(edge.to.clone(), candidate);
                came_from.insert(edge.to.clone(), (entry.stop.clone(), edge.clone()));
                frontier.push(FrontierEntry {
                    stop: edge.to.clone(),
                    cost: Cost(candidate),
                });
            }
        }
    }

    debug!(start = %start, end = %end, settled, "no path found");
    None
}

/// Walk the predecessor chain backwards from `end`, then reverse.
fn reconstruct(
    came_from: &HashMap<StopId, (StopId, Edge)>,
    start: &StopId,
    end: &StopId,
) -> PathResult {
    let mut steps = Vec::new();
    let mut total_fare = 0.0;
    let mut current = end.clone();

    while &current != start {
        // The predecessor entry exists for every stop reached during the
        // search, so this lookup cannot fail for a settled destination.
        let Some((prev, edge)) = came_from.get(&current) else {
            break;
        };
        total_fare += edge.weight;
        steps.push(edge.step.clone());
        current = prev.clone();
    }

    steps.reverse();
    PathResult { steps, total_fare }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{ContributedRoute, DirectRoute};
    use proptest::prelude::*;

    const STOPS: &[&str] = &["a", "b", "c", "d", "e", "f"];

    fn arb_edge() -> impl Strategy<Value = (usize, usize, f64)> {
        (0..STOPS.len(), 0..STOPS.len(), 0.0f64..50.0)
    }

    fn build(edges: &[(usize, usize, f64)]) -> RouteGraph {
        let mut graph = RouteGraph::new();
        let routes: Vec<ContributedRoute> = edges
            .iter()
            .map(|(f, t, w)| {
                ContributedRoute::Direct(DirectRoute {
                    id: "p".to_string(),
                    from: STOPS[*f].to_string(),
                    to: STOPS[*t].to_string(),
                    fare: Some(serde_json::json!(w)),
                    notes: None,
                })
            })
            .collect();
        graph.merge_routes(&routes);
        graph
    }

    proptest! {
        /// A search from a stop to itself is always the empty result.
        #[test]
        fn self_search_is_zero(edges in proptest::collection::vec(arb_edge(), 0..20), s in 0..STOPS.len()) {
            let graph = build(&edges);
            let id = StopId::new(STOPS[s]);
            let result = find_shortest_path(&graph, &id, &id, &SearchConfig::default()).unwrap();
            prop_assert!(result.steps.is_empty());
            prop_assert_eq!(result.total_fare, 0.0);
        }

        /// Any found path is well-formed: consecutive steps chain, the
        /// first leaves the start, the last reaches the end, and the total
        /// is the literal sum of the step fares.
        #[test]
        fn found_paths_are_well_formed(
            edges in proptest::collection::vec(arb_edge(), 1..25),
            s in 0..STOPS.len(),
            t in 0..STOPS.len(),
        ) {
            let graph = build(&edges);
            let start = StopId::new(STOPS[s]);
            let end = StopId::new(STOPS[t]);

            if let Some(result) = find_shortest_path(&graph, &start, &end, &SearchConfig::default()) {
                if start == end {
                    prop_assert!(result.steps.is_empty());
                } else {
                    prop_assert!(!result.steps.is_empty());
                    prop_assert_eq!(&result.steps[0].from.id, &start);
                    prop_assert_eq!(&result.steps[result.steps.len() - 1].to.id, &end);
                    for pair in result.steps.windows(2) {
                        prop_assert_eq!(&pair[0].to.id, &pair[1].from.id);
                    }
                    let sum: f64 = result.steps.iter().map(|s| s.fare).sum();
                    prop_assert!((result.total_fare - sum).abs() < 1e-9);
                }
            }
        }

        /// Merging extra edges never makes a reachable pair unreachable,
        /// and never makes the cheapest path more expensive.
        #[test]
        fn merge_is_monotonic(
            edges in proptest::collection::vec(arb_edge(), 1..20),
            extra in proptest::collection::vec(arb_edge(), 1..10),
            s in 0..STOPS.len(),
            t in 0..STOPS.len(),
        ) {
            let before_graph = build(&edges);
            let start = StopId::new(STOPS[s]);
            let end = StopId::new(STOPS[t]);
            let before = find_shortest_path(&before_graph, &start, &end, &SearchConfig::default());

            let mut after_graph = build(&edges);
            let additions: Vec<ContributedRoute> = extra
                .iter()
                .map(|(f, t, w)| {
                    ContributedRoute::Direct(DirectRoute {
                        id: "extra".to_string(),
                        from: STOPS[*f].to_string(),
                        to: STOPS[*t].to_string(),
                        fare: Some(serde_json::json!(w)),
                        notes: None,
                    })
                })
                .collect();
            after_graph.merge_routes(&additions);
            let after = find_shortest_path(&after_graph, &start, &end, &SearchConfig::default());

            if let Some(before) = before {
                let after = after.expect("merge removed a path");
                prop_assert!(after.total_fare <= before.total_fare + 1e-9);
            }
        }

        /// Search order ties are broken deterministically: repeated runs
        /// over the same graph return the identical result.
        #[test]
        fn search_is_deterministic(
            edges in proptest::collection::vec(arb_edge(), 1..20),
            s in 0..STOPS.len(),
            t in 0..STOPS.len(),
        ) {
            let graph = build(&edges);
            let start = StopId::new(STOPS[s]);
            let end = StopId::new(STOPS[t]);
            let first = find_shortest_path(&graph, &start, &end, &SearchConfig::default());
            let second = find_shortest_path(&graph, &start, &end, &SearchConfig::default());
            prop_assert_eq!(first, second);
        }
    }
}
