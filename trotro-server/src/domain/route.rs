//! Route record types: seed data and contributed submissions.

use serde::{Deserialize, Serialize};

use super::stop::Stop;

/// One traversable leg of a route, carrying the full presentation payload.
///
/// This is the denormalized "step" record shown to the end user; `duration`
/// and `description` are opaque strings passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Origin stop.
    pub from: Stop,

    /// Destination stop.
    pub to: Stop,

    /// Fare for this leg in cedis. Non-negative.
    pub fare: f64,

    /// Duration label, e.g. "45 mins". Opaque.
    pub duration: String,

    /// Free-text rider instructions. Opaque.
    pub description: String,
}

/// A route from the seed dataset: an ordered step sequence with totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRoute {
    /// Route identifier, e.g. "r1".
    pub id: String,

    /// Sum of the step fares.
    pub total_fare: f64,

    /// Duration label for the whole route. Opaque.
    pub total_duration: String,

    /// Consecutive legs of the route.
    pub steps: Vec<RouteStep>,
}

/// The seed dataset: pre-registered stops plus the routes over them.
///
/// Seed data is assumed internally consistent: every stop referenced by a
/// step appears in `stops`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedNetwork {
    /// All known stops, registered before any edge is added.
    pub stops: Vec<Stop>,

    /// Seed routes.
    pub routes: Vec<SeedRoute>,
}

fn default_route_id() -> String {
    "contributed".to_string()
}

/// An externally contributed route record.
///
/// Contributed data arrives in one of two shapes, tried in order:
/// a fully-formed route with an explicit step sequence, or a minimal
/// free-text record with just endpoints and a fare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContributedRoute {
    /// Fully-formed: each step already carries stop data and a fare.
    Stepped(SteppedRoute),

    /// Minimal: free-text endpoint names, a fare, an optional note.
    Direct(DirectRoute),
}

/// A contributed route with an explicit step sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct SteppedRoute {
    /// Owning route identifier, for traceability.
    #[serde(default = "default_route_id")]
    pub id: String,

    /// The steps, each with full stop data.
    pub steps: Vec<RouteStep>,
}

/// A minimal contributed record: endpoints by name, fare, optional note.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectRoute {
    /// Owning route identifier, for traceability.
    #[serde(default = "default_route_id")]
    pub id: String,

    /// Free-text origin name.
    pub from: String,

    /// Free-text destination name.
    pub to: String,

    /// Fare as submitted: a number, a numeric string, or absent.
    #[serde(default)]
    pub fare: Option<serde_json::Value>,

    /// Optional submitter note, used as the step description.
    #[serde(default)]
    pub notes: Option<String>,
}

impl DirectRoute {
    /// The fare as a non-negative weight.
    ///
    /// Contributed data is noisy: a missing, unparseable, non-finite or
    /// negative fare degrades to `0.0` rather than rejecting the record.
    pub fn fare_amount(&self) -> f64 {
        let parsed = match &self.fare {
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed
            .filter(|f| f.is_finite() && *f >= 0.0)
            .unwrap_or(0.0)
    }
}
