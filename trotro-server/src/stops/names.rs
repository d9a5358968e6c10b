//! Stop name lookup.
//!
//! The engine only accepts canonical stop ids; turning user text like
//! "Kaneshie Market" into an id is input handling, and it lives here,
//! outside the graph and the planner.

use std::collections::HashMap;

use crate::domain::{Stop, StopId};
use crate::graph::RouteGraph;

/// A match from a name search.
#[derive(Debug, Clone, PartialEq)]
pub struct StopMatch {
    /// Canonical stop id.
    pub id: StopId,

    /// Display name.
    pub name: String,
}

/// Display-name to stop-id resolution over a graph snapshot.
///
/// Built from the graph's stop arena; cheap to rebuild after a merge.
#[derive(Debug, Clone, Default)]
pub struct StopResolver {
    by_id: HashMap<StopId, String>,
    by_name: HashMap<String, StopId>,
}

impl StopResolver {
    /// Build a resolver from the stops currently in a graph.
    pub fn from_graph(graph: &RouteGraph) -> Self {
        Self::from_stops(graph.stops())
    }

    /// Build a resolver from an iterator of stops.
    pub fn from_stops<'a>(stops: impl Iterator<Item = &'a Stop>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();

        for stop in stops {
            by_id.insert(stop.id.clone(), stop.name.clone());
            by_name.insert(stop.name.to_lowercase(), stop.id.clone());
        }

        Self { by_id, by_name }
    }

    /// Resolve user text to a stop id.
    ///
    /// Tries, in order: the text as an id (normalized), then an exact
    /// case-insensitive display-name match. Returns `None` when neither
    /// matches; fuzzy matching is deliberately not attempted.
    pub fn resolve(&self, text: &str) -> Option<StopId> {
        let as_id = StopId::new(text);
        if self.by_id.contains_key(&as_id) {
            return Some(as_id);
        }

        self.by_name.get(&text.trim().to_lowercase()).cloned()
    }

    /// Look up the display name for an id.
    pub fn name(&self, id: &StopId) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    /// Search stops whose id or name contains the query, case-insensitive.
    ///
    /// Results are sorted by id for stable output and truncated to `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<StopMatch> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<StopMatch> = self
            .by_id
            .iter()
            .filter(|(id, name)| {
                id.as_str().contains(&needle) || name.to_lowercase().contains(&needle)
            })
            .map(|(id, name)| StopMatch {
                id: id.clone(),
                name: name.clone(),
            })
            .collect();

        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches.truncate(limit);
        matches
    }

    /// Number of known stops.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the resolver knows any stops.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
