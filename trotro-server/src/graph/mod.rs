//! The route graph: stops and weighted directed edges between them.
//!
//! The graph is a flat adjacency structure: an arena of stops plus a map
//! from stop id to an append-only list of outgoing edges, each edge
//! referencing stop ids rather than node objects. Built once from the seed
//! dataset, then grown by merging contributed routes; there is no removal
//! operation. The planner only reads it.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{ContributedRoute, RouteStep, SeedNetwork, Stop, StopId};

/// A directed, weighted connection between two stops.
///
/// Edges are immutable once inserted. Duplicates (same endpoints, same
/// route) are permitted: contributed data may legitimately offer alternative
/// fares for the same leg, and the search picks the cheapest at query time.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Destination stop id.
    pub to: StopId,

    /// Fare for this leg. Non-negative.
    pub weight: f64,

    /// Owning route identifier, for traceability.
    pub route_id: String,

    /// Human-readable description of the leg.
    pub description: String,

    /// The full step payload shown to the end user.
    pub step: RouteStep,
}

/// The transit network as a weighted directed graph.
///
/// Invariant: every id that appears as an endpoint of any edge has an
/// adjacency entry, possibly an empty one for a destination-only stop.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    stops: HashMap<StopId, Stop>,
    adjacency: HashMap<StopId, Vec<Edge>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from the seed dataset.
    ///
    /// Registers every seed stop first, then inserts one edge per step of
    /// every route. Seed data is assumed internally consistent, so this
    /// never fails.
    pub fn from_seed(network: &SeedNetwork) -> Self {
        let mut graph = Self::new();

        for stop in &network.stops {
            graph.ensure_stop(stop.clone());
        }

        for route in &network.routes {
            for step in &route.steps {
                graph.add_step_edge(&route.id, step);
            }
        }

        debug!(
            stops = graph.stop_count(),
            edges = graph.edge_count(),
            routes = network.routes.len(),
            "built route graph from seed"
        );

        graph
    }

    /// Merge externally contributed routes into the graph.
    ///
    /// Append-only: existing stops and edges are never altered or removed.
    /// Unknown stops referenced by a record are created on demand with
    /// placeholder coordinates. A direct record's missing or unparseable
    /// fare becomes a weight of `0.0` (a degraded-quality edge, by the
    /// leniency policy for noisy contributed data), never an error.
    pub fn merge_routes(&mut self, routes: &[ContributedRoute]) {
        for route in routes {
            match route {
                ContributedRoute::Stepped(stepped) => {
                    for step in &stepped.steps {
                        self.add_step_edge(&stepped.id, step);
                    }
                }
                ContributedRoute::Direct(direct) => {
                    let from = Stop::placeholder(&direct.from);
                    let to = Stop::placeholder(&direct.to);
                    let fare = direct.fare_amount();
                    let description = direct
                        .notes
                        .clone()
                        .unwrap_or_else(|| "Direct".to_string());

                    let step = RouteStep {
                        from: from.clone(),
                        to: to.clone(),
                        fare,
                        duration: "N/A".to_string(),
                        description: description.clone(),
                    };

                    self.ensure_stop(from);
                    self.ensure_stop(to);
                    self.push_edge(
                        step.from.id.clone(),
                        Edge {
                            to: step.to.id.clone(),
                            weight: fare,
                            route_id: direct.id.clone(),
                            description,
                            step,
                        },
                    );
                }
            }
        }

        debug!(
            merged = routes.len(),
            stops = self.stop_count(),
            edges = self.edge_count(),
            "merged contributed routes"
        );
    }

    /// The outgoing edges of a stop.
    ///
    /// An absent id is not an error; it simply has no outgoing edges.
    pub fn neighbors(&self, id: &StopId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stops.get(id)
    }

    /// Whether the graph knows this stop.
    pub fn contains_stop(&self, id: &StopId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Iterate over all stops.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    /// Number of stops in the graph.
    pub fn stop_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Insert an edge for a route step, registering unknown endpoints.
    ///
    /// Step data carries full stop records, so endpoints created here use
    /// the step's own name and coordinates.
    fn add_step_edge(&mut self, route_id: &str, step: &RouteStep) {
        self.ensure_stop(step.from.clone());
        self.ensure_stop(step.to.clone());

        self.push_edge(
            step.from.id.clone(),
            Edge {
                to: step.to.id.clone(),
                weight: step.fare,
                route_id: route_id.to_string(),
                description: step.description.clone(),
                step: step.clone(),
            },
        );
    }

    /// Register a stop if its id is unknown. Existing stops win: a merge
    /// never overwrites seed data.
    fn ensure_stop(&mut self, stop: Stop) {
        self.adjacency.entry(stop.id.clone()).or_default();
        self.stops.entry(stop.id.clone()).or_insert(stop);
    }

    fn push_edge(&mut self, from: StopId, edge: Edge) {
        // ensure_stop has already created the entry for `from`; the entry
        // for `edge.to` exists for the same reason, keeping the invariant
        // that every endpoint has an adjacency entry.
        self.adjacency.entry(from).or_default().push(edge);
    }
}
