//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{ContributedRoute, RouteStep, Stop};
use crate::planner::PathResult;

/// Request to search stops by name.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Query text: part of a stop id or display name
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A stop in search results.
#[derive(Debug, Serialize)]
pub struct StopSearchResult {
    /// Canonical stop id
    pub id: String,

    /// Display name
    pub name: String,
}

/// Response for stop search.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    /// Matching stops
    pub stops: Vec<StopSearchResult>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Start stop: an id or a display name
    pub from: String,

    /// End stop: an id or a display name
    pub to: String,
}

/// Stop information for display.
#[derive(Debug, Serialize)]
pub struct StopInfo {
    /// Canonical stop id
    pub id: String,

    /// Display name
    pub name: String,

    /// Coordinate pair [lat, lng]
    pub coords: (f64, f64),
}

impl From<&Stop> for StopInfo {
    fn from(stop: &Stop) -> Self {
        Self {
            id: stop.id.as_str().to_string(),
            name: stop.name.clone(),
            coords: stop.coords,
        }
    }
}

/// A leg of a planned route.
#[derive(Debug, Serialize)]
pub struct StepResult {
    /// Origin stop
    pub from: StopInfo,

    /// Destination stop
    pub to: StopInfo,

    /// Fare for this leg
    pub fare: f64,

    /// Duration label, passed through from the route data
    pub duration: String,

    /// Rider instructions
    pub description: String,
}

impl From<&RouteStep> for StepResult {
    fn from(step: &RouteStep) -> Self {
        Self {
            from: StopInfo::from(&step.from),
            to: StopInfo::from(&step.to),
            fare: step.fare,
            duration: step.duration.clone(),
            description: step.description.clone(),
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// The legs of the cheapest route, in travel order
    pub steps: Vec<StepResult>,

    /// Sum of the leg fares
    pub total_fare: f64,

    /// One-line summary for display
    pub summary: String,
}

impl From<&PathResult> for PlanResponse {
    fn from(result: &PathResult) -> Self {
        Self {
            steps: result.steps.iter().map(StepResult::from).collect(),
            total_fare: result.total_fare,
            summary: format!("found a path via {} connection(s)", result.leg_count()),
        }
    }
}

/// Request to contribute routes: a single record or a batch.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContributeRequest {
    /// A batch of contributed records
    Many(Vec<ContributedRoute>),

    /// A single contributed record
    One(Box<ContributedRoute>),
}

impl ContributeRequest {
    /// Flatten into a list of records.
    pub fn into_routes(self) -> Vec<ContributedRoute> {
        match self {
            ContributeRequest::Many(routes) => routes,
            ContributeRequest::One(route) => vec![*route],
        }
    }
}

/// Response for a contribution.
#[derive(Debug, Serialize)]
pub struct ContributeResponse {
    /// Number of records merged
    pub merged: usize,

    /// Stops in the graph after the merge
    pub stops: usize,

    /// Edges in the graph after the merge
    pub edges: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
