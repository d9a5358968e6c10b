//! Search configuration for the path finder.

/// Configuration parameters for shortest-path search.
///
/// The engine completes in time proportional to graph size, but contributed
/// data can grow the graph without bound, so a server imposes upper limits
/// as a defensive measure.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of stops the search may settle before giving up.
    /// An abandoned search reports "no route".
    pub max_settled_stops: usize,

    /// Maximum number of edges the graph may hold before further
    /// contributions are refused by the serving layer.
    pub max_graph_edges: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given limits.
    pub fn new(max_settled_stops: usize, max_graph_edges: usize) -> Self {
        Self {
            max_settled_stops,
            max_graph_edges,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_settled_stops: 10_000,
            max_graph_edges: 100_000,
        }
    }
}
