//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::PlanCache;
use crate::graph::RouteGraph;
use crate::planner::SearchConfig;
use crate::stops::StopResolver;

/// The graph and its derived name resolver, guarded together.
///
/// A merge mutates the graph and rebuilds the resolver under one write
/// lock, so readers always see the two in sync. Path searches take the
/// read lock for their whole duration, which keeps them well-defined
/// against concurrent merges.
pub struct Network {
    /// The route graph.
    pub graph: RouteGraph,

    /// Name → id resolution over the graph's current stops.
    pub resolver: StopResolver,
}

impl Network {
    /// Create a network from a graph, deriving the resolver.
    pub fn new(graph: RouteGraph) -> Self {
        let resolver = StopResolver::from_graph(&graph);
        Self { graph, resolver }
    }

    /// Rebuild the resolver after the graph has been mutated.
    pub fn refresh_resolver(&mut self) {
        self.resolver = StopResolver::from_graph(&self.graph);
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The transit network, under reader/writer discipline.
    pub network: Arc<RwLock<Network>>,

    /// Cache of computed plans, invalidated on merge.
    pub cache: Arc<PlanCache>,

    /// Search limits.
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: RouteGraph, cache: PlanCache, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(RwLock::new(Network::new(graph))),
            cache: Arc::new(cache),
            config: Arc::new(config),
        }
    }
}
