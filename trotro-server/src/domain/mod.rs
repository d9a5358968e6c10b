//! Domain types for the trotro route planner.
//!
//! This module contains the core model types for the transit network:
//! stops, their canonical identifiers, and the route records (seed and
//! contributed) that edges are built from. Identifiers normalize themselves
//! at construction, so code that receives a `StopId` can trust its form.

mod route;
mod stop;

pub use route::{ContributedRoute, DirectRoute, RouteStep, SeedNetwork, SeedRoute, SteppedRoute};
pub use stop::{Stop, StopId};
